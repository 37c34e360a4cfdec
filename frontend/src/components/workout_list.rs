use workout_tracker_lib::{render::WorkoutEntry, WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutItemProps {
    pub entry: WorkoutEntry,
    pub on_click: Callback<WorkoutId>,
}

#[function_component]
pub fn WorkoutItem(props: &WorkoutItemProps) -> Html {
    let entry = &props.entry;

    let onclick = {
        let on_click = props.on_click.clone();
        let id = entry.id;
        Callback::from(move |_: MouseEvent| on_click.emit(id))
    };

    html! {
        <li class={entry.class_name()} data-id={entry.id.to_string()} onclick={onclick}>
            <h2 class="workout__title">{entry.title.clone()}</h2>
            { for entry.metrics.iter().map(|metric| html! {
                <div class="workout__details">
                    <span class="workout__icon">{metric.icon}</span>
                    <span class="workout__value">{metric.value.clone()}</span>
                    <span class="workout__unit">{metric.unit}</span>
                </div>
            }) }
        </li>
    }
}
