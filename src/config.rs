//! Page Configuration
//!
//! The server renders a `<script id="jobtree-data" type="application/json">`
//! element holding [`PageData`]. It is read once at startup.

use crate::error::ApiError;
use crate::models::PageData;

/// Id of the script element carrying the page data
pub const PAGE_DATA_ELEMENT_ID: &str = "jobtree-data";

/// Parse page data from its JSON text
pub fn parse_page_data(text: &str) -> Result<PageData, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(format!("page data: {}", e)))
}

/// Read and parse the page data element
pub fn load_page_data() -> Result<PageData, ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("no document".to_string()))?;
    let element = document
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .ok_or_else(|| ApiError::Browser(format!("missing #{} element", PAGE_DATA_ELEMENT_ID)))?;
    let text = element.text_content().unwrap_or_default();
    parse_page_data(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Messages;

    #[test]
    fn test_parse_full_page_data() {
        let text = r#"{
            "urls": {
                "can_download": "/jobs/api/can-download/",
                "download_jobs": "/jobs/downloadjobs/",
                "create_preset_dir": "/jobs/api/api-preset-job-dir/"
            },
            "messages": {"no_objs_to_delete": "Nothing to delete"},
            "preset_dirs": [{"id": 1, "name": "Linux", "parent": null}],
            "jobs": [{"id": 4, "name": "Job 4", "preset_dir": 1}],
            "decisions": [{"id": 9, "title": "Run 9", "job": 4, "status": "finished"}],
            "log_level": "debug"
        }"#;
        let data = parse_page_data(text).unwrap();

        assert_eq!(data.urls.can_download, "/jobs/api/can-download/");
        assert_eq!(data.messages.no_objs_to_delete, "Nothing to delete");
        // Missing messages keep their defaults
        assert_eq!(data.messages.no_jobs_to_download, Messages::default().no_jobs_to_download);
        assert!(data.preset_dirs[0].editable);
        assert_eq!(data.preset_dirs[0].item_url(), "/jobs/api/api-preset-job-dir/1/");
        assert_eq!(data.decisions[0].job, 4);
        assert_eq!(data.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_object() {
        let data = parse_page_data("{}").unwrap();
        assert!(data.jobs.is_empty());
        assert_eq!(data.messages, Messages::default());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_page_data("{not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
