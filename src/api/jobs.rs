//! Job and Decision Requests
//!
//! Removal, download permission and report comparison calls.

use serde::Deserialize;

use super::endpoints::{self, ids_json};
use super::{send, send_json, FormBody, Method};
use crate::error::ApiError;
use crate::models::PageUrls;

#[derive(Deserialize)]
struct ComparisonResponse {
    url: String,
}

pub async fn remove_decision(id: u32) -> Result<(), ApiError> {
    send(Method::Delete, &endpoints::decision_remove_url(id), None).await?;
    Ok(())
}

/// Remove a job; the server also drops its decisions
pub async fn remove_job(id: u32) -> Result<(), ApiError> {
    send(Method::Delete, &endpoints::job_remove_url(id), None).await?;
    Ok(())
}

/// Ask the server whether the selection may be downloaded.
///
/// Returns the download URL to navigate to once the check passes.
pub async fn check_download(urls: &PageUrls, jobs: &[u32], decisions: &[u32]) -> Result<String, ApiError> {
    let jobs_json = ids_json(jobs);
    let decisions_json = ids_json(decisions);
    let body = FormBody::new()
        .field("jobs", jobs_json.clone())
        .field("decisions", decisions_json.clone());
    send(Method::Post, &urls.can_download, Some(&body)).await?;
    Ok(endpoints::download_url(&urls.download_jobs, &jobs_json, &decisions_json))
}

/// Prepare the reports comparison; returns the page showing it
pub async fn fill_comparison(first: u32, second: u32) -> Result<String, ApiError> {
    let url = endpoints::fill_comparison_url(first, second);
    let response: ComparisonResponse = send_json(Method::Post, &url, Some(&FormBody::new())).await?;
    Ok(response.url)
}
