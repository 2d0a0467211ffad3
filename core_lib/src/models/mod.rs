pub mod attachment;
pub mod connect;
pub mod pitch;
pub mod result;

pub use attachment::Attachment;
pub use connect::ConnectFormData;
pub use pitch::PitchFormData;
pub use result::SubmissionResult;
