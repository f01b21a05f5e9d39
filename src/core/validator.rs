use crate::core::BatchRequest;
use crate::utils::error::{CheckError, Result};

/// Structural checks on a decoded request. Identifier checksums are not inspected,
/// and an empty list is a valid (empty) batch.
///
/// Stateless, so one instance is shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the identifiers to look up, or the field-level violations.
    pub fn validate<'a>(&self, request: &'a BatchRequest) -> Result<&'a [String]> {
        match request.inns.as_deref() {
            Some(inns) => Ok(inns),
            None => Err(CheckError::Validation {
                errors: vec![required_field("inns")],
            }),
        }
    }
}

fn required_field(field: &str) -> String {
    format!("field {} is a required field", field)
}
