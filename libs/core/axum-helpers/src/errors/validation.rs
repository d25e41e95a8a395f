//! Human-readable rendering of `validator` errors.

use validator::{ValidationError, ValidationErrors};

/// Render every field error as `[field is required, field must be ...]`.
///
/// Fields are sorted so the message is stable across runs.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |err| describe(field, err)))
        .collect();

    format!("[{}]", messages.join(", "))
}

fn describe(field: &str, err: &ValidationError) -> String {
    if err.code == "required" {
        return format!("{field} is required");
    }

    let param = |name: &str| err.params.get(name).and_then(|v| v.as_u64());
    let value_len = err
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map(|s| s.chars().count() as u64);

    if err.code == "length" {
        match (value_len, param("min"), param("max")) {
            (Some(0), _, _) => return format!("{field} is required"),
            (Some(len), Some(min), _) if len < min => {
                return format!("{field} must be at least {min} characters long");
            }
            (Some(len), _, Some(max)) if len > max => {
                return format!("{field} must not be longer than {max} characters");
            }
            _ => {}
        }
    }

    format!("{field} is not valid")
}
