//! Action Menu Component
//!
//! Download, remove and compare controls for the checked tree rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, endpoints};
use crate::context::AppContext;
use crate::error::ValidationError;
use crate::navigation::Navigation;
use crate::selection::{ActionControls, Selection};
use crate::store::{store_selection, use_page_store};

/// Menu entry that was clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuCommand {
    Remove,
    Download,
    CompareReports,
    CompareFiles,
}

/// What a click leads to once the selection is valid
#[derive(Clone, Debug, PartialEq, Eq)]
enum MenuAction {
    /// Show the removal confirmation for this captured selection
    ConfirmRemoval(Selection),
    /// POST the permission check, then download
    CheckDownload { jobs: Vec<u32>, decisions: Vec<u32> },
    /// POST the fill-comparison request
    FillComparison(u32, u32),
    /// Navigate without a request
    Open(String),
}

/// Validate the selection for `command`; nothing is sent on `Err`
fn menu_action(command: MenuCommand, selection: Selection) -> Result<MenuAction, ValidationError> {
    match command {
        MenuCommand::Remove => {
            selection.require_removable()?;
            Ok(MenuAction::ConfirmRemoval(selection))
        }
        MenuCommand::Download => {
            selection.require_downloadable()?;
            Ok(MenuAction::CheckDownload {
                jobs: selection.jobs,
                decisions: selection.decisions,
            })
        }
        MenuCommand::CompareReports => {
            let (first, second) = selection.comparison_pair()?;
            Ok(MenuAction::FillComparison(first, second))
        }
        MenuCommand::CompareFiles => {
            let (first, second) = selection.comparison_pair()?;
            Ok(MenuAction::Open(endpoints::comparison_url(first, second)))
        }
    }
}

/// Menu of bulk actions
#[component]
pub fn ActionMenu(set_pending_removal: WriteSignal<Option<Selection>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_page_store();

    let controls = Memo::new(move |_| ActionControls::for_selection(&store_selection(&store)));

    let perform = move |action: MenuAction| match action {
        // Selection captured now, confirmed later
        MenuAction::ConfirmRemoval(selection) => set_pending_removal.set(Some(selection)),
        MenuAction::CheckDownload { jobs, decisions } => {
            let urls = ctx.urls();
            spawn_local(async move {
                match api::check_download(&urls, &jobs, &decisions).await {
                    Ok(url) => ctx.navigate(Navigation::Assign(url)),
                    Err(e) => {
                        log::warn!("[DOWNLOAD] Permission check failed: {}", e);
                        ctx.notify_error(format!("Download is not possible: {}", e));
                    }
                }
            });
        }
        MenuAction::FillComparison(first, second) => {
            ctx.set_busy(true);
            spawn_local(async move {
                let result = api::fill_comparison(first, second).await;
                ctx.set_busy(false);
                match result {
                    Ok(url) => ctx.navigate(Navigation::Assign(url)),
                    Err(e) => {
                        log::warn!("[COMPARE] Filling comparison {}/{} failed: {}", first, second, e);
                        ctx.notify_error(format!("Could not compare reports: {}", e));
                    }
                }
            });
        }
        MenuAction::Open(url) => ctx.navigate(Navigation::Assign(url)),
    };

    let run = move |command: MenuCommand| match menu_action(command, store_selection(&store)) {
        Ok(action) => perform(action),
        Err(e) => ctx.notify_validation(e),
    };

    let item_class = |enabled: bool| if enabled { "item" } else { "item disabled" };

    view! {
        <div id="jobs_actions_menu" class="ui compact menu">
            <a
                id="download_selected_jobs"
                href="#"
                class=move || item_class(controls.get().download)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    run(MenuCommand::Download);
                }
            >
                <i class="download icon"></i>
                "Download selected"
            </a>
            <a
                id="show_remove_selected_modal"
                class=move || item_class(controls.get().remove)
                on:click=move |_| run(MenuCommand::Remove)
            >
                <i class="trash icon"></i>
                "Remove selected"
            </a>
            <a
                id="compare_reports_btn"
                class=move || item_class(controls.get().compare_reports)
                on:click=move |_| run(MenuCommand::CompareReports)
            >
                <i class="exchange icon"></i>
                "Compare reports"
            </a>
            <a
                id="compare_files_btn"
                class=move || item_class(controls.get().compare_files)
                on:click=move |_| run(MenuCommand::CompareFiles)
            >
                <i class="copy outline icon"></i>
                "Compare files"
            </a>
        </div>
    }
}
