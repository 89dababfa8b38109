//! Modal Component
//!
//! Confirmation dialog frame with cancel/confirm actions. The backdrop does
//! not close it; only the action buttons do.

use leptos::prelude::*;

/// Modal dialog
///
/// # Arguments
/// * `id` - Element id of the dialog (e.g. "remove_selected_modal")
/// * `header` - Dialog title
/// * `open` - Whether the dialog is shown
/// * `busy` - Disables the confirm button while a request is running
/// * `on_confirm` / `on_cancel` - Action button callbacks
#[component]
pub fn Modal(
    #[prop(into)] id: String,
    #[prop(into)] header: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="ui dimmer modals page visible active">
                <div id=id.clone() class="ui small modal visible active">
                    <div class="header">{move || header.get()}</div>
                    <div class="content">{children()}</div>
                    <div class="actions">
                        <button
                            class="ui red button modal-cancel"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class="ui green button modal-confirm"
                            disabled=move || busy.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
