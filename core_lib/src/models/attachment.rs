//! Binary attachment carried by the pitch form

use std::fmt;
use std::path::Path;

use crate::error::Result;

#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Content type is guessed from the file name.
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            file_name,
            content_type,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: &mime::Mime) -> Self {
        self.content_type = content_type.essence_str().to_string();
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, data))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn mime(&self) -> mime::Mime {
        self.content_type
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM)
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.data.len())
            .finish()
    }
}
