//! Multi-select with removable tags for Yew forms.
//!
//! # Design
//! - Own the selection internally; `values` only seeds the first render.
//! - Emit the full ordered selection on every change.
//! - Clicking an option toggles it; clicking a tag's close button removes it.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::tokens::{Size, Tone, tone_class};
use crate::selection::{Change, Selection};
use crate::view::{project_options, project_tags};

/// Props for [`MultiSelect`].
#[derive(Properties, PartialEq)]
pub struct MultiSelectProps {
    /// `(value, label)` pairs in display order.
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    /// Initially selected values.
    #[prop_or_default]
    pub values: Vec<AttrValue>,
    /// Disabled first option shown as a prompt.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Element id of the select.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Form field name of the select.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Accessible label of the select.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Optional color tone.
    #[prop_or_default]
    pub tone: Option<Tone>,
    /// Control size.
    #[prop_or(Size::Md)]
    pub size: Size,
    /// Disable the select and the tag close buttons.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes for the wrapper.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the ordered selection after each change.
    #[prop_or_default]
    pub onchange: Callback<Vec<AttrValue>>,
}

/// Multi-value selector rendering selected values as removable tags.
#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    let selection = {
        let initial = props.values.clone();
        use_state(move || initial.iter().map(AttrValue::to_string).collect::<Selection>())
    };
    let select_ref = use_node_ref();

    // `selected` attributes do not reset the live property after user clicks.
    {
        let select_ref = select_ref.clone();
        use_effect_with_deps(
            move |selection: &Selection| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    sync_selected(&select, selection);
                }
                || ()
            },
            (*selection).clone(),
        );
    }

    let onclick = {
        let selection = selection.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(option) = event
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("option").ok().flatten())
            else {
                return;
            };
            if option.has_attribute("disabled") {
                return;
            }
            let value = option.get_attribute("value").unwrap_or_default();
            update(&selection, &onchange, |next| next.toggle(&value));
        })
    };
    let onremove = {
        let selection = selection.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |value: AttrValue| {
            update(&selection, &onchange, |next| next.remove(&value));
        })
    };

    let pairs = || {
        props
            .options
            .iter()
            .map(|(value, label)| (&**value, &**label))
    };
    let options = project_options(pairs(), &selection);
    let tags = project_tags(&selection, pairs());
    let tone = tone_class("select", props.tone);
    let badge_tone = tone_class("badge", props.tone);

    html! {
        <div class={classes!("multi-select", props.class.clone())}>
            <div class="selected-values" aria-live="polite">
                {for tags.into_iter().map(|tag| {
                    let value = AttrValue::from(tag.value.clone());
                    let onclick = onremove.reform(move |_: MouseEvent| value.clone());
                    html! {
                        <div
                            class={classes!("chip", "badge", props.size.with_prefix("badge"), badge_tone.clone())}
                            data-value={tag.value.clone()}
                        >
                            {tag.text().to_string()}
                            <button
                                type="button"
                                class="close"
                                aria-label={tag.remove_label()}
                                disabled={props.disabled}
                                {onclick}
                            >
                                {"\u{00d7}"}
                            </button>
                        </div>
                    }
                })}
            </div>
            <select
                ref={select_ref}
                class={classes!("select", props.size.with_prefix("select"), tone)}
                id={props.id.clone()}
                name={props.name.clone()}
                aria-label={props.aria_label.clone()}
                disabled={props.disabled}
                multiple={true}
                {onclick}
            >
                {props.placeholder.clone().map(|text| html! {
                    <option disabled={true} value="">{text}</option>
                }).unwrap_or_default()}
                {for options.into_iter().map(|option| html! {
                    <option value={option.value} selected={option.selected}>{option.label}</option>
                })}
            </select>
        </div>
    }
}

fn update(
    state: &UseStateHandle<Selection>,
    onchange: &Callback<Vec<AttrValue>>,
    mutate: impl FnOnce(&mut Selection) -> Change,
) {
    let mut next = (**state).clone();
    if mutate(&mut next).is_changed() {
        let values = next
            .iter()
            .map(|value| AttrValue::from(value.to_string()))
            .collect();
        state.set(next);
        onchange.emit(values);
    }
}

fn sync_selected(select: &HtmlSelectElement, selection: &Selection) {
    let Ok(list) = select.query_selector_all("option") else {
        return;
    };
    for idx in 0..list.length() {
        let Some(option) = list
            .item(idx)
            .and_then(|node| node.dyn_into::<HtmlOptionElement>().ok())
        else {
            continue;
        };
        if option.disabled() {
            continue;
        }
        option.set_selected(selection.contains(&option.value()));
    }
}
