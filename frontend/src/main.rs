use browser::{AlertNotifier, LocalStorage};
use chrono::Local;
use components::{entry_form::EntryFormView, map_component::LeafletMap, workout_list::WorkoutItem};
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use web_sys::HtmlInputElement;
use workout_tracker_lib::{form::FormField, App, AppConfig, Coordinates, WorkoutId, WorkoutKind};
use yew::prelude::*;

mod browser;
mod components;
mod logging;

enum Msg {
    PositionFound(Coordinates),
    PositionUnavailable,
    MapClicked(Coordinates),
    KindChanged(WorkoutKind),
    FieldChanged(FormField, String),
    Submit,
    FormRevealed,
    WorkoutClicked(WorkoutId),
    Reset,
}

struct Model {
    app: App<LeafletMap, LocalStorage, AlertNotifier>,
    distance_ref: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        let map = LeafletMap::new(link.callback(Msg::MapClicked));
        let app = App::new(map, LocalStorage::open(), AlertNotifier, AppConfig::default());
        info!(format!("Loaded {} stored workouts", app.workouts().len()));

        browser::request_position(
            link.callback(Msg::PositionFound),
            link.callback(|()| Msg::PositionUnavailable),
        );

        Self {
            app,
            distance_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PositionFound(position) => {
                info!(format!("Position: {}, {}", position.lat, position.lng));
                self.app.on_position(position);
            }
            Msg::PositionUnavailable => self.app.on_position_unavailable(),
            Msg::MapClicked(coordinates) => self.app.on_map_click(coordinates),
            Msg::KindChanged(kind) => self.app.set_kind(kind),
            Msg::FieldChanged(field, value) => self.app.set_field(field, value),
            Msg::Submit => {
                if self.app.submit(Local::now()).is_ok() {
                    let link = ctx.link().clone();
                    let delay = self.app.config().form_reveal_delay.as_millis() as u32;
                    Timeout::new(delay, move || link.send_message(Msg::FormRevealed)).forget();
                }
            }
            Msg::FormRevealed => self.app.finish_form_collapse(),
            Msg::WorkoutClicked(id) => {
                // Panning happens inside leaflet, nothing to re-render
                self.app.on_workout_click(id);
                return false;
            }
            Msg::Reset => {
                self.app.reset();
                if let Err(err) = window().location().reload() {
                    error!("Failed to reload after reset", err);
                }
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.app.take_focus_request() {
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_kind = link.callback(Msg::KindChanged);
        let on_input = link.callback(|(field, value): (FormField, String)| Msg::FieldChanged(field, value));
        let on_submit = link.callback(|()| Msg::Submit);
        let on_workout = link.callback(Msg::WorkoutClicked);
        let on_reset = link.callback(|_: MouseEvent| Msg::Reset);

        html! { <>
            <div class="sidebar">
                <ul class="workouts">
                    <EntryFormView
                        form={self.app.form().clone()}
                        distance_ref={self.distance_ref.clone()}
                        {on_kind}
                        {on_input}
                        {on_submit}
                    />
                    { for self.app.entries().map(|entry| html! {
                        <WorkoutItem key={entry.id.to_string()} entry={entry.clone()} on_click={on_workout.clone()} />
                    }) }
                </ul>
                <button class="reset-btn" onclick={on_reset}>{"Reset"}</button>
            </div>
            { self.app.map().render() }
        </> }
    }
}

fn main() {
    logging::init();
    yew::Renderer::<Model>::new().render();
}
