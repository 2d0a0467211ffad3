//! Form-data extractors: turn whatever the UI layer holds into form records

pub mod connect;
pub mod fields;
pub mod pitch;

pub use connect::{format_connect_data, format_connect_data_named};
pub use fields::{FieldSource, FileSource, IndexedFields};
pub use pitch::{format_pitch_data, FILE_UPLOAD_CONTROL};
