//! Required-field validation for request payloads.
//!
//! Payload types derive [`validator::Validate`] and tag every required text
//! field with `#[validate(length(min = 1, code = "required"))]`. Because
//! `validator` collects errors in a hash map, each payload also lists its
//! required fields in declaration order through [`RequiredFields`], which
//! keeps the reported message deterministic.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Validator error code that marks a field as missing.
pub const REQUIRED_CODE: &str = "required";

/// Declares the required fields of a payload, in declaration order.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static str];
}

/// Format the client-facing message for a set of missing fields.
///
/// ```
/// use tasker_core::validation::missing_fields_message;
///
/// assert_eq!(
///     missing_fields_message(&["title", "status"]),
///     "Missing required fields: title, status"
/// );
/// ```
pub fn missing_fields_message<S: AsRef<str>>(fields: &[S]) -> String {
    let names: Vec<String> = fields.iter().map(|f| f.as_ref().to_lowercase()).collect();
    format!("Missing required fields: {}", names.join(", "))
}

/// Validate `payload`, reporting every missing required field at once.
pub fn check_required<T>(payload: &T) -> Result<(), CoreError>
where
    T: Validate + RequiredFields,
{
    let Err(errors) = payload.validate() else {
        return Ok(());
    };

    let missing = missing_fields::<T>(&errors);
    if missing.is_empty() {
        return Err(CoreError::Validation(errors.to_string()));
    }
    Err(CoreError::Validation(missing_fields_message(&missing)))
}

/// Required fields of `T` that failed with the `required` code, in
/// declaration order.
fn missing_fields<T: RequiredFields>(errors: &ValidationErrors) -> Vec<&'static str> {
    let field_errors = errors.field_errors();
    T::REQUIRED
        .iter()
        .copied()
        .filter(|field| {
            field_errors.iter().any(|(name, errs)| {
                &**name == *field && errs.iter().any(|e| e.code == REQUIRED_CODE)
            })
        })
        .collect()
}
