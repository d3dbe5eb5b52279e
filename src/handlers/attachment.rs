//! Attachment upload and retrieval.
//!
//! Customers upload receipt/pinpoint screenshots here first and reference
//! the returned path in their order submission; intake refuses a submission
//! whose required reference never made it into the store.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use tracing::info;

use crate::dtos::attachment::AttachmentResponse;
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;
use crate::storage::Purpose;

pub async fn upload_attachment(
    State(AppState { storage, .. }): State<AppState>,
    Path(purpose): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AttachmentResponse>), AppError> {
    let purpose = Purpose::parse(&purpose)
        .ok_or_else(|| AppError::validation("purpose", "Unknown attachment purpose"))?;

    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation("file", format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = field.file_name().map(|s| s.to_string());
            field_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation("file", format!("Multipart error: {e}")))?
                    .to_vec(),
            );
            break;
        }
    }

    let data = field_data
        .ok_or_else(|| AppError::validation("file", "No 'file' field found. Field name must be 'file'"))?;
    let filename = original_filename
        .ok_or_else(|| AppError::validation("file", "No filename provided in file field"))?;

    let stored = storage.store(purpose, &filename, &data)?;

    info!(
        purpose = purpose.as_str(),
        path = %stored.path,
        size = stored.size,
        "Attachment stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(AttachmentResponse {
            path: stored.path,
            size: stored.size,
        }),
    ))
}

pub async fn download_attachment(
    State(AppState { storage, .. }): State<AppState>,
    Extension(_auth): Extension<AuthContext>,
    Path((purpose, filename)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let purpose = Purpose::parse(&purpose)
        .ok_or_else(|| AppError::not_found("Attachment not found"))?;

    let (data, content_type) = storage.read(purpose, &filename)?;

    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}
