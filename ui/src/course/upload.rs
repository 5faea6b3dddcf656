//! Files picked for upload.

/// A file read from the picker, not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Slides must be PDFs; judged by extension, case-insensitively.
    pub fn is_pdf(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }
}

/// Hands the picked files to one upload and leaves the selection empty,
/// so the same batch cannot be sent twice.
pub fn take_batch(picked: &mut Vec<UploadFile>) -> Vec<UploadFile> {
    std::mem::take(picked)
}
