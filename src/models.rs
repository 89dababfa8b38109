//! Frontend Models
//!
//! Data structures embedded by the server in the job tree page.

use serde::{Deserialize, Serialize};

use crate::api::endpoints;

/// Preset directory (tree grouping node)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDir {
    pub id: u32,
    pub name: String,
    pub parent: Option<u32>,
    /// Item API URL, when the page renders one explicitly
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_true")]
    pub editable: bool,
}

impl PresetDir {
    /// URL used for rename and delete requests
    pub fn item_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| endpoints::preset_dir_url(self.id))
    }
}

/// Job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub preset_dir: Option<u32>,
}

/// Decision (one run of a job)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: u32,
    pub title: String,
    pub job: u32,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_true() -> bool {
    true
}

/// URLs the page configures for actions that are not fixed API paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageUrls {
    pub can_download: String,
    pub download_jobs: String,
    pub create_preset_dir: String,
}

/// Localized validation messages rendered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub no_objs_to_delete: String,
    pub no_jobs_to_download: String,
    pub no_decisions_to_compare: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_objs_to_delete: "Please select jobs, decisions or preset directories you want to delete".to_string(),
            no_jobs_to_download: "Please select jobs or decisions you want to download".to_string(),
            no_decisions_to_compare: "Please select exactly two decisions to compare".to_string(),
        }
    }
}

/// Everything the page hands to the frontend at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub urls: PageUrls,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub preset_dirs: Vec<PresetDir>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub decisions: Vec<Decision>,
    #[serde(default)]
    pub log_level: Option<String>,
}
