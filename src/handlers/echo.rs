use crate::AppState;
use crate::error::AppError;
use crate::services::storage::file_suffix;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};

/// POST /img-echo/ — persist an uploaded file under a fresh UUID name and
/// serve the stored bytes back with the caller's declared content type.
///
/// Gated by the `echo_active` setting; when disabled the request is
/// rejected before any byte touches the filesystem.
pub async fn image_echo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    if !state.settings.echo_active {
        return Err(AppError::BadRequest("Invalid endpoint".to_string()));
    }

    let mut stored = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await?;
        let dest = state.store.save(&file_suffix(&filename), &data).await?;

        tracing::info!("Stored {} byte upload at {}", data.len(), dest.display());
        stored = Some((dest, content_type));
    }

    let (dest, content_type) = stored
        .ok_or_else(|| AppError::Internal("No file field in multipart payload".to_string()))?;

    // Echo what actually landed on disk, not the in-memory copy.
    let body = state.store.read(&dest).await?;

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}
