//! Demo gallery showing both multi-select surfaces side by side.

use gloo::console;
use web_sys::Element;
use yew::prelude::*;

use crate::components::{MultiSelect, Tone};
use crate::config::WidgetConfig;
use crate::widget::MultiSelectWidget;

const DEMO_OPTIONS: [(&str, &str); 3] = [("a", "a"), ("b", "b"), ("c", "c")];

fn demo_options() -> Vec<(AttrValue, AttrValue)> {
    DEMO_OPTIONS
        .iter()
        .map(|(value, label)| (AttrValue::from(*value), AttrValue::from(*label)))
        .collect()
}

/// Host subtree handed to [`MultiSelectWidget`]; it never re-renders so Yew
/// does not fight the widget over the moved options.
#[function_component(AttachedDemo)]
fn attached_demo() -> Html {
    let host_ref = use_node_ref();
    let widget = use_mut_ref(|| None::<MultiSelectWidget>);
    {
        let host_ref = host_ref.clone();
        let widget = widget.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(host) = host_ref.cast::<Element>() {
                    match MultiSelectWidget::attach(&host, WidgetConfig::default()) {
                        Ok(attached) => {
                            attached.set_on_change(|values| {
                                console::log!("attached multi-select changed", values.join(","));
                            });
                            *widget.borrow_mut() = Some(attached);
                        }
                        Err(err) => console::error!("multi-select attach failed", err.to_string()),
                    }
                }
                move || drop(widget.borrow_mut().take())
            },
            (),
        );
    }

    html! {
        <div ref={host_ref} class="multi-select">
            <select id="letters" name="letters" multiple={true} aria-label="Letters">
                {for DEMO_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value}>{*label}</option>
                })}
            </select>
        </div>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let chosen = use_state(Vec::<AttrValue>::new);
    let onchange = {
        let chosen = chosen.clone();
        Callback::from(move |values: Vec<AttrValue>| chosen.set(values))
    };
    let summary = if chosen.is_empty() {
        "none".to_string()
    } else {
        chosen.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    };

    html! {
        <main class="gallery">
            <section>
                <h2>{"Attached widget"}</h2>
                <AttachedDemo />
            </section>
            <section>
                <h2>{"Yew component"}</h2>
                <MultiSelect
                    options={demo_options()}
                    name="letters-yew"
                    aria_label="Letters"
                    tone={Some(Tone::Primary)}
                    {onchange}
                />
                <p class="description">{format!("Selected: {summary}")}</p>
            </section>
        </main>
    }
}

/// Mount the gallery into `#root`, or `body` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<Gallery>::with_root(root).render();
    } else {
        yew::Renderer::<Gallery>::new().render();
    }
}
