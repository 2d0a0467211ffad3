use tracing::debug;

use super::fields::{FieldSource, FileSource};
use crate::models::PitchFormData;

/// Element id of the pitch form's file-selection control.
pub const FILE_UPLOAD_CONTROL: &str = "file-upload";

/// Reads the pitch form. Absent fields become `""`; the attachment is the
/// first file selected in [`FILE_UPLOAD_CONTROL`], if any.
pub fn format_pitch_data<F, S>(fields: &F, files: &S) -> PitchFormData
where
    F: FieldSource + ?Sized,
    S: FileSource + ?Sized,
{
    let file = files
        .selected_files(FILE_UPLOAD_CONTROL)
        .and_then(|selected| selected.into_iter().next());

    if let Some(file) = &file {
        debug!(file_name = %file.file_name, size = file.size(), "pitch attachment selected");
    }

    PitchFormData {
        name: fields.value_or_empty("name"),
        company: fields.value_or_empty("company"),
        sector: fields.value_or_empty("sector"),
        investment: fields.value_or_empty("investment"),
        email: fields.value_or_empty("email"),
        phone: fields.value_or_empty("phone"),
        pitch_summary: fields.value_or_empty("pitchSummary"),
        file,
    }
}
