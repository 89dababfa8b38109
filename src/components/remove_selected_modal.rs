//! Remove Selected Modal
//!
//! Confirms and runs bulk removal of the checked decisions, jobs and preset
//! directories.

use leptos::prelude::*;

use crate::bulk::{dispatch_removals, removal_plan};
use crate::components::Modal;
use crate::context::AppContext;
use crate::navigation::Navigation;
use crate::selection::Selection;

fn summary(selection: &Selection) -> String {
    format!(
        "{} decision(s), {} job(s) and {} preset directory(ies) will be removed.",
        selection.decisions.len(),
        selection.jobs.len(),
        selection.preset_dirs.len()
    )
}

/// Bulk removal confirmation.
///
/// `pending` holds the selection captured when the dialog was opened.
#[component]
pub fn RemoveSelectedModal(
    pending: ReadSignal<Option<Selection>>,
    set_pending: WriteSignal<Option<Selection>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let confirm = Callback::new(move |_: ()| {
        let Some(selection) = pending.get_untracked() else {
            return;
        };
        set_pending.set(None);
        ctx.set_busy(true);

        dispatch_removals(removal_plan(&selection), move |outcome| {
            ctx.set_busy(false);
            match outcome.failure_message() {
                None => ctx.navigate(Navigation::Reload),
                Some(message) => {
                    log::warn!("[REMOVE] {}", message);
                    ctx.notify_error(message);
                }
            }
        });
    });

    view! {
        <Modal
            id="remove_selected_modal"
            header=Signal::derive(|| "Remove selected objects?".to_string())
            open=Signal::derive(move || pending.with(Option::is_some))
            busy=ctx.busy
            on_confirm=confirm
            on_cancel=Callback::new(move |_: ()| set_pending.set(None))
        >
            <p>{move || pending.with(|p| p.as_ref().map(summary).unwrap_or_default())}</p>
            <p>"Decisions of removed jobs are removed too. This cannot be undone."</p>
        </Modal>
    }
}
