//! Markup configuration for the attachable multi-select widget.
//!
//! # Design
//! - Defaults reproduce the design-system stylesheet contract.
//! - Every field is optional in JSON; missing fields fall back to defaults.
//! - Validation happens once at load so rendering never has to.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Class applied to the container holding the selected-value tags.
pub const DEFAULT_TAGS_CLASS: &str = "selected-values";
/// Class applied to each rendered tag.
pub const DEFAULT_TAG_CLASS: &str = "chip";
/// Element used for the tag removal icon.
pub const DEFAULT_REMOVE_ICON_ELEMENT: &str = "gov-icon";
/// Class applied to the tag removal icon.
pub const DEFAULT_REMOVE_ICON_CLASS: &str = "close";
/// Icon key rendered by the removal icon element.
pub const DEFAULT_REMOVE_ICON_KEY: &str = "cross";
/// Element wrapping the moved options.
pub const DEFAULT_CONTROL_ELEMENT: &str = "selectmenu";

/// Names used when building the widget's DOM subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Class of the tag container.
    pub tags_class: String,
    /// Class of each tag.
    pub tag_class: String,
    /// Element name of the removal icon.
    pub remove_icon_element: String,
    /// Class of the removal icon.
    pub remove_icon_class: String,
    /// Value of the removal icon's `key` attribute.
    pub remove_icon_key: String,
    /// Element name of the option control.
    pub control_element: String,
    /// Emit the `slot="button"` trigger element inside the control.
    pub button_slot: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tags_class: DEFAULT_TAGS_CLASS.to_string(),
            tag_class: DEFAULT_TAG_CLASS.to_string(),
            remove_icon_element: DEFAULT_REMOVE_ICON_ELEMENT.to_string(),
            remove_icon_class: DEFAULT_REMOVE_ICON_CLASS.to_string(),
            remove_icon_key: DEFAULT_REMOVE_ICON_KEY.to_string(),
            control_element: DEFAULT_CONTROL_ELEMENT.to_string(),
            button_slot: true,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ConfigParse`] for malformed JSON or unknown
    /// fields, and [`WidgetError::InvalidField`] when validation fails.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(payload).map_err(|source| WidgetError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured name can be used as a class token or tag name.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tags_class", &self.tags_class),
            ("tag_class", &self.tag_class),
            ("remove_icon_class", &self.remove_icon_class),
        ] {
            check_token(field, value)?;
        }
        for (field, value) in [
            ("remove_icon_element", &self.remove_icon_element),
            ("control_element", &self.control_element),
        ] {
            check_element_name(field, value)?;
        }
        Ok(())
    }

    /// CSS selector matching a rendered tag.
    #[must_use]
    pub fn tag_selector(&self) -> String {
        format!(".{}", self.tag_class)
    }

    /// CSS selector matching a tag removal icon.
    #[must_use]
    pub fn remove_icon_selector(&self) -> String {
        format!(".{}", self.remove_icon_class)
    }
}

fn check_token(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, value, "empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field, value, "contains whitespace"));
    }
    Ok(())
}

fn check_element_name(field: &'static str, value: &str) -> Result<()> {
    check_token(field, value)?;
    let mut chars = value.chars();
    let starts_alpha = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
    if !starts_alpha || !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
        return Err(invalid(field, value, "not a valid element name"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> WidgetError {
    WidgetError::InvalidField {
        field,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_object_yields_defaults() -> Result<()> {
        let config = WidgetConfig::from_json("{}")?;
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.tag_selector(), ".chip");
        assert_eq!(config.remove_icon_selector(), ".close");
        Ok(())
    }

    #[test]
    fn partial_payload_overrides_named_fields() -> Result<()> {
        let config = WidgetConfig::from_json(r#"{"tag_class":"pill","button_slot":false}"#)?;
        assert_eq!(config.tag_class, "pill");
        assert!(!config.button_slot);
        assert_eq!(config.control_element, DEFAULT_CONTROL_ELEMENT);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = WidgetConfig::from_json(r#"{"tag_klass":"pill"}"#);
        assert!(matches!(err, Err(WidgetError::ConfigParse { .. })));
    }

    #[rstest]
    #[case::empty_class(r#"{"tag_class":""}"#, "tag_class", "empty")]
    #[case::spaced_class(r#"{"tags_class":"a b"}"#, "tags_class", "contains whitespace")]
    #[case::numeric_element(r#"{"control_element":"1menu"}"#, "control_element", "not a valid element name")]
    #[case::symbol_element(r#"{"remove_icon_element":"gov_icon"}"#, "remove_icon_element", "not a valid element name")]
    fn invalid_fields_are_named(
        #[case] payload: &str,
        #[case] expected_field: &str,
        #[case] expected_reason: &str,
    ) {
        match WidgetConfig::from_json(payload) {
            Err(WidgetError::InvalidField { field, reason, .. }) => {
                assert_eq!(field, expected_field);
                assert_eq!(reason, expected_reason);
            }
            other => panic!("expected invalid field error, got {other:?}"),
        }
    }

    #[test]
    fn config_round_trips_through_json() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = WidgetConfig {
            remove_icon_key: "close-small".to_string(),
            ..WidgetConfig::default()
        };
        let payload = serde_json::to_string(&config)?;
        assert_eq!(WidgetConfig::from_json(&payload)?, config);
        Ok(())
    }
}
