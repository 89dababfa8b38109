//! UI Components
//!
//! Reusable Leptos components.

mod action_menu;
mod job_tree_view;
mod modal;
mod notice_area;
mod page_dimmer;
mod preset_dir_modal;
mod remove_selected_modal;
mod tree_row;

pub use action_menu::ActionMenu;
pub use job_tree_view::JobTreeView;
pub use modal::Modal;
pub use notice_area::NoticeArea;
pub use page_dimmer::PageDimmer;
pub use preset_dir_modal::{PresetDirModal, RemovePresetDirModal};
pub use remove_selected_modal::RemoveSelectedModal;
pub use tree_row::TreeRow;
