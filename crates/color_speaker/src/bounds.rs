use crate::error::{ColorError, Reasons};

/// Inclusive range a named integer field must fall in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bound {
    field: &'static str,
    min: i32,
    max: i32,
}

impl Bound {
    pub(crate) const fn new(field: &'static str, min: i32, max: i32) -> Self {
        Bound { field, min, max }
    }

    fn reason(&self, value: i32) -> Option<String> {
        if value < self.min {
            Some(format!(
                "Must be greater than or equal to {}, not {}",
                self.min, value
            ))
        } else if value > self.max {
            Some(format!(
                "Must be lesser than or equal to {}, not {}",
                self.max, value
            ))
        } else {
            None
        }
    }
}

/// Checks every field before failing, so the error names all of the bad ones.
pub(crate) fn check(message: &str, fields: &[(Bound, i32)]) -> Result<(), ColorError> {
    let reasons: Reasons = fields
        .iter()
        .filter_map(|(bound, value)| bound.reason(*value).map(|r| (bound.field, r)))
        .collect();

    if reasons.is_empty() {
        return Ok(());
    }

    log::trace!(
        "rejected {:?}",
        reasons.keys().copied().collect::<Vec<_>>()
    );
    Err(ColorError::BoundsViolation {
        message: message.to_string(),
        reasons,
    })
}
