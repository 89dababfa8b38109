//! API Endpoints
//!
//! Fixed server paths and URL builders.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

pub fn decision_remove_url(id: u32) -> String {
    format!("/jobs/api/decision/{}/remove/", id)
}

pub fn job_remove_url(id: u32) -> String {
    format!("/jobs/api/{}/remove/", id)
}

pub fn preset_dir_url(id: u32) -> String {
    format!("/jobs/api/api-preset-job-dir/{}/", id)
}

pub fn fill_comparison_url(first: u32, second: u32) -> String {
    format!("/reports/api/fill-comparison/{}/{}/", first, second)
}

/// Files comparison page; reached by navigation only
pub fn comparison_url(first: u32, second: u32) -> String {
    format!("/jobs/comparison/{}/{}/", first, second)
}

/// Item URL restricted to the `name` field
pub fn name_query_url(item_url: &str) -> String {
    format!("{}?fields=name", item_url)
}

/// JSON array text of ids, as sent to the download endpoints
pub fn ids_json(ids: &[u32]) -> String {
    serde_json::Value::from(ids.to_vec()).to_string()
}

pub fn download_url(base: &str, jobs_json: &str, decisions_json: &str) -> String {
    format!(
        "{}?jobs={}&decisions={}",
        base,
        encode_component(jobs_json),
        encode_component(decisions_json)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_urls() {
        assert_eq!(decision_remove_url(3), "/jobs/api/decision/3/remove/");
        assert_eq!(job_remove_url(1), "/jobs/api/1/remove/");
        assert_eq!(preset_dir_url(7), "/jobs/api/api-preset-job-dir/7/");
    }

    #[test]
    fn test_comparison_urls() {
        assert_eq!(comparison_url(5, 9), "/jobs/comparison/5/9/");
        assert_eq!(fill_comparison_url(5, 9), "/reports/api/fill-comparison/5/9/");
    }

    #[test]
    fn test_name_query_url() {
        assert_eq!(
            name_query_url("/jobs/api/api-preset-job-dir/7/"),
            "/jobs/api/api-preset-job-dir/7/?fields=name"
        );
    }

    #[test]
    fn test_ids_json() {
        assert_eq!(ids_json(&[]), "[]");
        assert_eq!(ids_json(&[1, 2, 30]), "[1,2,30]");
    }

    #[test]
    fn test_download_url_encodes_json() {
        let url = download_url("/jobs/downloadjobs/", "[1,2]", "[]");
        assert_eq!(url, "/jobs/downloadjobs/?jobs=%5B1%2C2%5D&decisions=%5B%5D");
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
    }
}
