//! Outside capabilities the controller drives. The browser frontend implements them on
//! top of Leaflet, `localStorage` and `window.alert`.

use std::time::Duration;

use crate::{coordinates::Coordinates, error::StoreError, render::MarkerSpec};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration: Duration,
}

pub trait MapView {
    /// Creates the map at `center`. Click events on the map must be routed back to
    /// [`App::on_map_click`](crate::App::on_map_click).
    fn load(&mut self, center: Coordinates, zoom: f64);

    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions);

    fn add_marker(&mut self, marker: &MarkerSpec);

    fn clear_markers(&mut self);
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str);
}

pub trait Notifier {
    /// Blocking, user-visible message.
    fn alert(&self, message: &str);
}
