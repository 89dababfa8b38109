//! Tree Row Component
//!
//! Individual preset directory, job or decision row in the job tree.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dialog::DirDialog;
use crate::selection::NodeKey;
use crate::store::{store_is_checked, store_is_collapsed, store_set_checked, store_toggle_collapsed, use_page_store};
use crate::tree::TreeNode;

/// Checkbox class per object kind
fn checkbox_class(key: NodeKey) -> &'static str {
    match key {
        NodeKey::PresetDir(_) => "presetdir-checkbox",
        NodeKey::Job(_) => "job-checkbox",
        NodeKey::Decision(_) => "decision-checkbox",
    }
}

fn checkbox_value(key: NodeKey) -> u32 {
    match key {
        NodeKey::PresetDir(id) | NodeKey::Job(id) | NodeKey::Decision(id) => id,
    }
}

/// A single row in the tree
#[component]
pub fn TreeRow(
    node: TreeNode,
    set_dir_dialog: WriteSignal<DirDialog>,
    set_removing_dir: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_page_store();

    let key = node.key;
    let indent = node.depth * 24;
    let has_children = node.has_children;
    let is_dir = matches!(key, NodeKey::PresetDir(_));

    let toggle = move |_| store_toggle_collapsed(&store, key);
    let is_collapsed = move || store_is_collapsed(&store, key);
    let toggle_icon = move || match (is_dir, is_collapsed()) {
        (true, false) => "folder open link violet icon",
        (true, true) => "folder link violet icon",
        (false, false) => "caret down link icon",
        (false, true) => "caret right link icon",
    };

    // Directory edit links, only for editable preset dirs
    let dir_links = match (key, node.item_url.clone()) {
        (NodeKey::PresetDir(id), Some(url)) if node.editable => {
            let rename_url = url.clone();
            let open_rename = move |_| {
                let url = rename_url.clone();
                spawn_local(async move {
                    match api::fetch_preset_dir_name(&url).await {
                        Ok(name) => set_dir_dialog.set(DirDialog::rename(url, name)),
                        Err(e) => {
                            log::warn!("[PRESET] Loading name from {} failed: {}", url, e);
                            ctx.notify_error(format!("Could not load preset directory: {}", e));
                        }
                    }
                });
            };
            let open_remove = move |_| set_removing_dir.set(Some(url.clone()));
            Some(view! {
                <span class="preset-dir-links">
                    <a class="add-preset-dir-link" title="Add sub-directory" on:click=move |_| set_dir_dialog.set(DirDialog::create(Some(id)))>
                        <i class="plus link icon"></i>
                    </a>
                    <a class="change-preset-dir-link" title="Rename" on:click=open_rename>
                        <i class="edit link icon"></i>
                    </a>
                    <a class="remove-preset-dir-link" title="Remove" on:click=open_remove>
                        <i class="remove link red icon"></i>
                    </a>
                </span>
            })
        }
        _ => None,
    };

    view! {
        <div class="tree-row" style=format!("margin-left: {}px;", indent)>
            // Collapse toggle
            {if has_children {
                view! { <i class=toggle_icon on:click=toggle></i> }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            // Selection checkbox
            <div class="ui checkbox">
                <input
                    type="checkbox"
                    class=checkbox_class(key)
                    value=checkbox_value(key).to_string()
                    prop:checked=move || store_is_checked(&store, key)
                    on:change=move |ev| store_set_checked(&store, key, event_target_checked(&ev))
                />
                <label>{node.label.clone()}</label>
            </div>

            {node.status.clone().map(|status| view! { <span class="ui tiny label">{status}</span> })}

            {dir_links}
        </div>
    }
}
