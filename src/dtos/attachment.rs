use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AttachmentResponse {
    /// Store-relative reference to put on the order payload.
    pub path: String,
    pub size: usize,
}
