//! Pitch form record

use validator::Validate;

use super::Attachment;

/// Multipart part name of the optional attachment.
pub const PROPOSAL_FILE_PART: &str = "proposal_file";

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct PitchFormData {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub company: String,
    pub sector: String,
    /// Free-form amount, e.g. "$250k".
    pub investment: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub phone: String,
    pub pitch_summary: String,
    pub file: Option<Attachment>,
}

impl PitchFormData {
    /// Text parts in the order and under the names the backend expects.
    pub fn text_parts(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("company_name", self.company.as_str()),
            ("sector", self.sector.as_str()),
            ("investment_required", self.investment.as_str()),
            ("email", self.email.as_str()),
            ("contact_number", self.phone.as_str()),
            ("pitch_summary", self.pitch_summary.as_str()),
        ]
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.file_name.as_str())
    }
}
