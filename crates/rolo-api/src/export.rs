//! Handler for `GET /contacts/export.csv`.

use std::sync::Arc;

use axum::{
  extract::State,
  http::{StatusCode, header},
  response::IntoResponse,
};
use rolo_core::store::ContactStore;

use crate::error::ApiError;

/// `GET /contacts/export.csv` — the full contact set as a CSV attachment.
pub async fn csv<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let body = rolo_export::render_csv(&contacts);

  Ok((
    StatusCode::OK,
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"contacts.csv\"",
      ),
    ],
    body,
  ))
}
