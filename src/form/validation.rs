use crate::form::field::{Field, FormFields};
use crate::form::validators::{self, Validator};

pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Ordered rule chain for one field. The first failing rule's message wins.
pub fn rules_for(field: Field) -> Vec<Validator> {
    match field {
        Field::Name => vec![
            validators::required("Name is required"),
            validators::min_chars(2, "Name must be at least 2 characters"),
            validators::pattern(r"^[A-Za-z\s]+$", "Name can only contain letters"),
        ],
        Field::Email => vec![
            validators::required("Email is required"),
            validators::pattern(
                r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
                "Please enter a valid email address",
            ),
        ],
        Field::Message => vec![
            validators::required("Message is required"),
            validators::min_chars(10, "Message must be at least 10 characters"),
            validators::max_chars(
                MESSAGE_MAX_CHARS,
                "Message must not exceed 1000 characters",
            ),
        ],
    }
}

/// Runs the field's rule chain against a raw value. Values are trimmed
/// before the chain runs, matching what users see as "their input".
pub fn check(field: Field, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    for validator in rules_for(field) {
        validator(trimmed)?;
    }
    Ok(())
}

/// Validates one field, updating its visible error annotation either way.
pub fn validate_field(fields: &mut FormFields, field: Field) -> bool {
    match check(field, fields.get(field).value()) {
        Ok(()) => {
            fields.get_mut(field).clear_error();
            true
        }
        Err(message) => {
            fields.get_mut(field).show_error(message);
            false
        }
    }
}

/// Validates every field unconditionally so each error annotation is
/// refreshed, then reports whether the whole form is valid.
pub fn validate_form(fields: &mut FormFields) -> bool {
    let mut all_valid = true;
    for field in Field::ALL {
        all_valid &= validate_field(fields, field);
    }
    all_valid
}
