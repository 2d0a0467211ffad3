use super::fields::{FieldSource, IndexedFields};
use crate::models::ConnectFormData;

const NAME: usize = 0;
const EMAIL: usize = 1;
const PURPOSE: usize = 2;
const MESSAGE: usize = 3;

/// Reads the connect form by element position: name, email, purpose,
/// message. Depends on markup order; prefer [`format_connect_data_named`].
pub fn format_connect_data<F: IndexedFields + ?Sized>(fields: &F) -> ConnectFormData {
    ConnectFormData {
        name: fields.value_at_or_empty(NAME),
        email: fields.value_at_or_empty(EMAIL),
        purpose: fields.value_at_or_empty(PURPOSE),
        message: fields.value_at_or_empty(MESSAGE),
    }
}

pub fn format_connect_data_named<F: FieldSource + ?Sized>(fields: &F) -> ConnectFormData {
    ConnectFormData {
        name: fields.value_or_empty("name"),
        email: fields.value_or_empty("email"),
        purpose: fields.value_or_empty("purpose"),
        message: fields.value_or_empty("message"),
    }
}
