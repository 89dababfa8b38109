//! Job Tree App
//!
//! Page component: action menu, job tree and the dialogs they open.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActionMenu, JobTreeView, NoticeArea, PageDimmer, PresetDirModal, RemovePresetDirModal, RemoveSelectedModal,
};
use crate::context::{AppContext, Notice};
use crate::dialog::DirDialog;
use crate::models::PageData;
use crate::selection::Selection;
use crate::store::PageState;

#[component]
pub fn App(page: PageData) -> impl IntoView {
    // State
    let (busy, set_busy) = signal(false);
    let (notices, set_notices) = signal(Vec::<Notice>::new());
    let (pending_removal, set_pending_removal) = signal::<Option<Selection>>(None);
    let (dir_dialog, set_dir_dialog) = signal(DirDialog::default());
    let (removing_dir, set_removing_dir) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(Store::new(PageState::from_page(&page)));
    provide_context(AppContext::new(
        (busy, set_busy),
        (notices, set_notices),
        page.urls.clone(),
        page.messages.clone(),
    ));

    log::info!(
        "[APP] Job tree with {} preset dirs, {} jobs, {} decisions",
        page.preset_dirs.len(),
        page.jobs.len(),
        page.decisions.len()
    );

    view! {
        <div class="jobtree-page">
            <NoticeArea />

            <ActionMenu set_pending_removal=set_pending_removal />

            <JobTreeView
                set_dir_dialog=set_dir_dialog
                set_removing_dir=set_removing_dir
            />

            <RemoveSelectedModal pending=pending_removal set_pending=set_pending_removal />
            <PresetDirModal dialog=dir_dialog set_dialog=set_dir_dialog />
            <RemovePresetDirModal url=removing_dir set_url=set_removing_dir />

            <PageDimmer />
        </div>
    }
}
