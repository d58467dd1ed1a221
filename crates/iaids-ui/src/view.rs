//! Pure projections from [`Selection`] onto option and tag views.
//!
//! Both the attachable widget and the Yew component render through these
//! helpers, so the "selected iff member" and "one tag per entry" rules live
//! in one place and can be tested without a browser.

use crate::selection::Selection;

/// Attribute that receives the source element's `id`.
pub const REMAPPED_ID_ATTRIBUTE: &str = "data-id";

/// One selectable choice as seen by the renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Submitted value of the option.
    pub value: String,
    /// Display text of the option.
    pub label: String,
    /// Whether the option is currently selected.
    pub selected: bool,
}

/// One rendered tag for a selected value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Selected value the tag stands for.
    pub value: String,
    /// Display text of the matching option, used for the accessible name.
    pub label: String,
}

impl TagDescriptor {
    /// Visible tag text; always the selected value itself.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Accessible name for the tag's removal control.
    #[must_use]
    pub fn remove_label(&self) -> String {
        format!("Remove {}", self.label)
    }
}

/// Mark each `(value, label)` option selected iff its value is in `selection`.
#[must_use]
pub fn project_options<'a, I>(options: I, selection: &Selection) -> Vec<OptionDescriptor>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    options
        .into_iter()
        .map(|(value, label)| OptionDescriptor {
            value: value.to_string(),
            label: label.to_string(),
            selected: selection.contains(value),
        })
        .collect()
}

/// One tag per selected value, in selection order.
///
/// Tags display the value; `label` carries the text of the first option with
/// that value (or the value when none, or only a blank label, matches) and is
/// only used for the removal control's accessible name.
#[must_use]
pub fn project_tags<'a, I>(selection: &Selection, options: I) -> Vec<TagDescriptor>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let options: Vec<(&str, &str)> = options.into_iter().collect();
    selection
        .iter()
        .map(|value| {
            let label = options
                .iter()
                .find(|(option_value, _)| *option_value == value)
                .map(|(_, label)| label.trim())
                .filter(|label| !label.is_empty())
                .unwrap_or(value);
            TagDescriptor {
                value: value.to_string(),
                label: label.to_string(),
            }
        })
        .collect()
}

/// Name an attribute copied from the source select should carry on the control.
#[must_use]
pub fn copied_attribute_name(name: &str) -> &str {
    if name.eq_ignore_ascii_case("id") {
        REMAPPED_ID_ATTRIBUTE
    } else {
        name
    }
}

/// Attributes the control receives from the source select, in source order.
#[must_use]
pub fn copied_attributes<'a, I>(source: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    source
        .into_iter()
        .map(|(name, value)| (copied_attribute_name(name).to_string(), value.to_string()))
        .collect()
}
