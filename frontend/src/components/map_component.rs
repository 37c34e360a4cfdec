use gloo_console::{error, info};
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys::{Object, Reflect},
    HtmlElement, Node,
};
use workout_tracker_lib::{
    capabilities::{MapView, PanOptions},
    constants::{TILE_ATTRIBUTION, TILE_URL},
    render::MarkerSpec,
    Coordinates,
};
use yew::prelude::*;

/// Leaflet map living in a detached container, which the root component mounts as a
/// `VRef`. The Leaflet instance itself is only created once a position is known.
pub struct LeafletMap {
    container: HtmlElement,
    map: Option<Map>,
    markers: Vec<Marker>,
    on_click: Callback<Coordinates>,
}

impl LeafletMap {
    pub fn new(on_click: Callback<Coordinates>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .expect("Failed to create map container")
            .dyn_into()
            .expect("Map container is not an HtmlElement");
        container.set_id("map");

        Self {
            container,
            map: None,
            markers: Vec::new(),
            on_click,
        }
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapView for LeafletMap {
    fn load(&mut self, center: Coordinates, zoom: f64) {
        let map = Map::new_with_element(&self.container, &MapOptions::default());
        map.set_view(&to_lat_lng(center), zoom);
        add_tile_layer(&map);

        let on_click = self.on_click.clone();
        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(Coordinates::new(lat_lng.lat(), lat_lng.lng()));
        }));

        // The container may have been sized after the map was attached
        map.invalidate_size(false);
        self.map = Some(map);
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions) {
        let Some(map) = &self.map else {
            return;
        };

        match pan_options(pan) {
            Ok(options) => {
                map.set_view_with_options(&to_lat_lng(center), zoom, &options);
            }
            Err(err) => {
                error!("Failed to build pan options", err);
                map.set_view(&to_lat_lng(center), zoom);
            }
        }
    }

    fn add_marker(&mut self, spec: &MarkerSpec) {
        let Some(map) = &self.map else {
            return;
        };

        let popup_opts = PopupOptions::default();
        popup_opts.set_max_width(spec.style.max_width);
        popup_opts.set_min_width(spec.style.min_width);
        popup_opts.set_auto_close(spec.style.auto_close);
        popup_opts.set_close_on_click(spec.style.close_on_click);
        popup_opts.set_class_name(spec.style.class_name.clone());
        let popup = Popup::new(&popup_opts, None);
        popup.set_content(&spec.content.as_str().into());

        let marker = Marker::new(&to_lat_lng(spec.coordinates));
        marker.add_to(map);
        marker.bind_popup(&popup);
        marker.open_popup();

        info!(format!("Added marker for workout {}", spec.id));
        self.markers.push(marker);
    }

    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            marker.remove();
        }
    }
}

fn to_lat_lng(coordinates: Coordinates) -> LatLng {
    LatLng::new(coordinates.lat, coordinates.lng)
}

/// Zoom/pan options for `setView`, which leaflet only takes as a plain object.
fn pan_options(pan: PanOptions) -> Result<Object, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"animate".into(), &pan.animate.into())?;
    Reflect::set(&options, &"duration".into(), &pan.duration.as_secs_f64().into())?;
    Ok(options)
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(TILE_ATTRIBUTION.to_owned());
    TileLayer::new_options(TILE_URL, &opts).add_to(map);
}
