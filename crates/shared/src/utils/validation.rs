use crate::errors::ClientError;
use validator::{Validate, ValidationErrors};

pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("is invalid ({})", e.code));
                format!("{field}: {message}")
            })
        })
        .collect();

    messages.sort();
    messages
}

/// Runs the form's rules before anything goes over the wire.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ClientError> {
    request
        .validate()
        .map_err(|errors| ClientError::Validation(format_validation_errors(&errors)))
}
