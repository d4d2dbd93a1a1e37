//! Labelled text input.
//!
//! # Design
//! - The label and input are paired by id; callers may pass one, otherwise
//!   one is drawn from the app's [`IdScope`] once per instance.
//! - Emits the raw input value; trimming is left to validation.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::core::ids::IdScope;

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    let scope = use_context::<IdScope>().unwrap_or_default();
    let generated = use_state(move || scope.next_id());
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| AttrValue::from((*generated).clone()));

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for={id.clone()}>{props.label.clone()}</label>
            <input
                id={id}
                type="text"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                required={props.required}
                {oninput}
            />
            {props.helper.clone().map(|text| html! {
                <p class="field-helper">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
