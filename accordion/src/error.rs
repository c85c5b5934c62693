//! Mount-time error types.
//!
//! Everything that can go wrong after a successful mount is a warning, not an
//! error: the widget logs it and aborts the operation without side effects.

use thiserror::Error;

/// Errors returned when binding an accordion to a DOM subtree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    /// The container node does not exist in the DOM.
    #[error("container node `{0}` does not exist")]
    ContainerNotFound(String),

    /// The trigger selector matched nothing under the container.
    #[error("no trigger nodes match `{selector}` under `{container}`")]
    NoTriggers { container: String, selector: String },

    /// Triggers and panels must come in pairs.
    #[error("found {triggers} triggers but {panels} panels under `{container}`")]
    PairMismatch {
        container: String,
        triggers: usize,
        panels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccordionError::PairMismatch {
            container: "faq".into(),
            triggers: 3,
            panels: 2,
        };
        let display = format!("{}", err);
        assert!(display.contains("faq"));
        assert!(display.contains('3'));
        assert!(display.contains('2'));
    }
}
