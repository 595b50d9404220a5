use linked_hash_map::LinkedHashMap;
use thiserror::Error;

/// Field name to reason, in the order the fields are declared.
pub type Reasons = LinkedHashMap<&'static str, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("{message}")]
    BoundsViolation { message: String, reasons: Reasons },
    #[error("Must be a CSS hex color in the form #RRGGBB, not {0:?}")]
    FormatViolation(String),
    #[error("Unrecognized color notation {0:?}")]
    UnrecognizedNotation(String),
}

impl ColorError {
    /// Per-field reasons of a bounds violation. Only failing fields are present.
    pub fn reasons(&self) -> Option<&Reasons> {
        match self {
            ColorError::BoundsViolation { reasons, .. } => Some(reasons),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColorError, Reasons};

    #[test]
    fn bounds_violation_displays_its_message() {
        let mut reasons = Reasons::new();
        reasons.insert("red", "Must be greater than or equal to 0, not -1".to_string());
        let err = ColorError::BoundsViolation {
            message: "Color values must be between 0 and 255, inclusive.".to_string(),
            reasons,
        };

        assert_eq!(
            err.to_string(),
            "Color values must be between 0 and 255, inclusive."
        );
        assert_eq!(err.reasons().map(|r| r.len()), Some(1));
    }

    #[test]
    fn format_violation_has_no_reasons() {
        let err = ColorError::FormatViolation("#12345".to_string());
        assert_eq!(
            err.to_string(),
            "Must be a CSS hex color in the form #RRGGBB, not \"#12345\""
        );
        assert!(err.reasons().is_none());
    }
}
