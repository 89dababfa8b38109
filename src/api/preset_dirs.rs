//! Preset Directory Requests

use serde::Deserialize;

use super::endpoints;
use super::{send, send_json, Method};
use crate::dialog::DirSubmission;
use crate::error::ApiError;

#[derive(Deserialize)]
struct NameResponse {
    name: String,
}

/// Current name of the directory at `item_url`
pub async fn fetch_preset_dir_name(item_url: &str) -> Result<String, ApiError> {
    let response: NameResponse = send_json(Method::Get, &endpoints::name_query_url(item_url), None).await?;
    Ok(response.name)
}

/// Create or rename, as prepared by the directory dialog
pub async fn submit_preset_dir(submission: &DirSubmission) -> Result<(), ApiError> {
    send(submission.method, &submission.url, Some(&submission.body)).await?;
    Ok(())
}

pub async fn remove_preset_dir(item_url: &str) -> Result<(), ApiError> {
    send(Method::Delete, item_url, None).await?;
    Ok(())
}
