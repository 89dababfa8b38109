//! Preset Directory Dialogs
//!
//! State behind the create/rename dialog and the delete dialog. The
//! components own the signals; this module decides what gets sent.

use crate::api::{FormBody, Method};
use crate::models::PageUrls;

/// What the create/rename dialog will do on confirm
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirDialogMode {
    /// New directory under `parent`
    Create { parent: Option<u32> },
    /// Rename the directory at `url`
    Rename { url: String },
}

/// A prepared create or rename request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirSubmission {
    pub method: Method,
    pub url: String,
    pub body: FormBody,
}

impl DirDialogMode {
    /// Build the request for `name`. Names go to the server as typed.
    pub fn submission(&self, urls: &PageUrls, name: &str) -> DirSubmission {
        match self {
            DirDialogMode::Create { parent } => DirSubmission {
                method: Method::Post,
                url: urls.create_preset_dir.clone(),
                body: FormBody::new().optional_id("parent", *parent).field("name", name),
            },
            DirDialogMode::Rename { url } => DirSubmission {
                method: Method::Patch,
                url: url.clone(),
                body: FormBody::new().optional_id("parent", None).field("name", name),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DirDialogMode::Create { .. } => "Create preset directory",
            DirDialogMode::Rename { .. } => "Rename preset directory",
        }
    }
}

/// Open state of the create/rename dialog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirDialog {
    pub mode: Option<DirDialogMode>,
    pub name: String,
}

impl DirDialog {
    /// Open for creation with an empty name
    pub fn create(parent: Option<u32>) -> Self {
        Self {
            mode: Some(DirDialogMode::Create { parent }),
            name: String::new(),
        }
    }

    /// Open for renaming, pre-filled with the fetched name
    pub fn rename(url: String, current_name: String) -> Self {
        Self {
            mode: Some(DirDialogMode::Rename { url }),
            name: current_name,
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn submission(&self, urls: &PageUrls) -> Option<DirSubmission> {
        self.mode.as_ref().map(|mode| mode.submission(urls, &self.name))
    }
}
