use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    form::{EntryForm, FormField, FormVisibility},
    WorkoutKind,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct EntryFormProps {
    pub form: EntryForm,
    pub distance_ref: NodeRef,
    pub on_kind: Callback<WorkoutKind>,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn EntryFormView(props: &EntryFormProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_kind = props.on_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<WorkoutKind>() {
                Ok(kind) => on_kind.emit(kind),
                Err(err) => error!(err),
            }
        })
    };

    let oninput = |field: FormField| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    // Collapsing skips the css transition by taking the form out of the layout
    let (class, style) = match form.visibility() {
        FormVisibility::Shown => ("form", None),
        FormVisibility::Hidden => ("form hidden", None),
        FormVisibility::Collapsing => ("form hidden", Some("display: none")),
    };

    let row_class = |field: FormField| {
        if form.visible_extra_field() == field { "form__row" } else { "form__row form__row--hidden" }
    };

    html! {
        <form class={class} style={style} onsubmit={onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={onchange}>
                    <option value="running" selected={form.kind() == WorkoutKind::Running}>{"Running"}</option>
                    <option value="cycling" selected={form.kind() == WorkoutKind::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    ref={props.distance_ref.clone()}
                    class="form__input form__input--distance"
                    placeholder="km"
                    value={form.field(FormField::Distance).to_owned()}
                    oninput={oninput(FormField::Distance)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={form.field(FormField::Duration).to_owned()}
                    oninput={oninput(FormField::Duration)}
                />
            </div>
            <div class={row_class(FormField::Cadence)}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    value={form.field(FormField::Cadence).to_owned()}
                    oninput={oninput(FormField::Cadence)}
                />
            </div>
            <div class={row_class(FormField::Elevation)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    value={form.field(FormField::Elevation).to_owned()}
                    oninput={oninput(FormField::Elevation)}
                />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
