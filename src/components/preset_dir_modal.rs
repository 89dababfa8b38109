//! Preset Directory Modals
//!
//! Create/rename dialog and delete dialog for a single preset directory.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Modal;
use crate::context::AppContext;
use crate::dialog::DirDialog;
use crate::navigation::Navigation;

/// Create or rename dialog; open when `dialog` has a mode
#[component]
pub fn PresetDirModal(
    dialog: ReadSignal<DirDialog>,
    set_dialog: WriteSignal<DirDialog>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (submitting, set_submitting) = signal(false);

    let confirm = Callback::new(move |_: ()| {
        let Some(submission) = dialog.with_untracked(|d| d.submission(&ctx.urls())) else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_preset_dir(&submission).await {
                Ok(()) => ctx.navigate(Navigation::Reload),
                Err(e) => {
                    set_submitting.set(false);
                    log::warn!("[PRESET] {} {} failed: {}", submission.method.as_str(), submission.url, e);
                    ctx.notify_error(format!("Could not save preset directory: {}", e));
                }
            }
        });
    });

    view! {
        <Modal
            id="new_preset_dir_modal"
            header=Signal::derive(move || dialog.with(|d| d.mode.as_ref().map(|m| m.title()).unwrap_or_default().to_string()))
            open=Signal::derive(move || dialog.with(DirDialog::is_open))
            busy=submitting
            on_confirm=confirm
            on_cancel=Callback::new(move |_: ()| set_dialog.set(DirDialog::default()))
        >
            <div class="ui form">
                <div class="field">
                    <label for="new_preset_dir_name">"Name"</label>
                    <input
                        id="new_preset_dir_name"
                        type="text"
                        prop:value=move || dialog.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_dialog.update(|d| d.name = value);
                        }
                    />
                </div>
            </div>
        </Modal>
    }
}

/// Delete confirmation; `url` is the directory's item URL while open
#[component]
pub fn RemovePresetDirModal(
    url: ReadSignal<Option<String>>,
    set_url: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (submitting, set_submitting) = signal(false);

    let confirm = Callback::new(move |_: ()| {
        let Some(target) = url.get_untracked() else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::remove_preset_dir(&target).await {
                Ok(()) => ctx.navigate(Navigation::Reload),
                Err(e) => {
                    set_submitting.set(false);
                    log::warn!("[PRESET] DELETE {} failed: {}", target, e);
                    ctx.notify_error(format!("Could not remove preset directory: {}", e));
                }
            }
        });
    });

    view! {
        <Modal
            id="remove_presetdir_modal"
            header=Signal::derive(|| "Remove preset directory?".to_string())
            open=Signal::derive(move || url.with(Option::is_some))
            busy=submitting
            on_confirm=confirm
            on_cancel=Callback::new(move |_: ()| set_url.set(None))
        >
            <p>"The directory and everything in it will be removed."</p>
        </Modal>
    }
}
