//! Bridge between `validator` derive output and [`CoreError`].

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validation rules for `input`.
///
/// All field failures are flattened into a single [`CoreError::Validation`]
/// message so the HTTP layer can report them in one response.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
