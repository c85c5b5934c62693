//! Per-instance accordion configuration.

use serde::Deserialize;

/// Configuration for one accordion instance.
///
/// Every field has a sensible default, so instances can be configured from a
/// partial JSON object (or built in code with struct-update syntax).
///
/// # Example
///
/// ```
/// use accordion::AccordionConfig;
///
/// let config = AccordionConfig {
///     multiselectable: true,
///     default_expanded: vec![true, false, false],
///     ..Default::default()
/// };
/// assert_eq!(config.trigger_selector, "[data-role=trigger]");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Selector for trigger nodes under the container.
    pub trigger_selector: String,
    /// Selector for panel nodes under the container.
    pub panel_selector: String,
    /// Whether more than one panel may be open at the same time.
    pub multiselectable: bool,
    /// Initial expanded flag per item, in item order. Shorter lists are padded
    /// with `false`; a length mismatch is logged as a warning at mount.
    pub default_expanded: Vec<bool>,
    /// Viewport names on which items auto-open at mount. Requires a viewport
    /// probe; configured names with no probe are a logged warning.
    pub auto_open_viewports: Vec<String>,
    /// CSS class names written alongside the ARIA attributes.
    pub classes: ClassNames,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            trigger_selector: "[data-role=trigger]".into(),
            panel_selector: "[data-role=panel]".into(),
            multiselectable: false,
            default_expanded: Vec::new(),
            auto_open_viewports: Vec::new(),
            classes: ClassNames::default(),
        }
    }
}

/// Marker class names applied by the renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Applied to the currently selected trigger.
    pub active: String,
    /// Applied to the trigger and panel of an expanded item.
    pub open: String,
    /// Applied to the trigger and panel of a collapsed item.
    pub closed: String,
    /// Applied to the container while heights are being re-measured.
    pub calculating: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            active: "is-active".into(),
            open: "is-open".into(),
            closed: "is-closed".into(),
            calculating: "is-calculating".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccordionConfig::default();
        assert_eq!(config.trigger_selector, "[data-role=trigger]");
        assert_eq!(config.panel_selector, "[data-role=panel]");
        assert!(!config.multiselectable);
        assert!(config.default_expanded.is_empty());
        assert_eq!(config.classes.open, "is-open");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: AccordionConfig = serde_json::from_str(
            r#"{
                "multiselectable": true,
                "default_expanded": [true, false],
                "classes": { "open": "faq--open" }
            }"#,
        )
        .unwrap();

        assert!(config.multiselectable);
        assert_eq!(config.default_expanded, vec![true, false]);
        // Unspecified fields fall back to their defaults
        assert_eq!(config.trigger_selector, "[data-role=trigger]");
        assert_eq!(config.classes.open, "faq--open");
        assert_eq!(config.classes.closed, "is-closed");
    }
}
