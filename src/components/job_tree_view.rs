//! Job Tree View Component
//!
//! Displays preset directories, jobs and decisions as a collapsible tree.

use leptos::prelude::*;

use crate::components::TreeRow;
use crate::dialog::DirDialog;
use crate::store::{store_visible_nodes, use_page_store};

/// Job tree with a root-level "add directory" link
#[component]
pub fn JobTreeView(
    set_dir_dialog: WriteSignal<DirDialog>,
    set_removing_dir: WriteSignal<Option<String>>,
) -> impl IntoView {
    let store = use_page_store();

    let tree_nodes = move || store_visible_nodes(&store);

    view! {
        <div class="tree">
            <For
                each=tree_nodes
                key=|node| node.key
                children=move |node| {
                    view! {
                        <TreeRow
                            node=node
                            set_dir_dialog=set_dir_dialog
                            set_removing_dir=set_removing_dir
                        />
                    }
                }
            />

            {move || tree_nodes().is_empty().then(|| view! {
                <div class="ui message">"No jobs yet"</div>
            })}

            <a class="add-preset-dir-link" on:click=move |_| set_dir_dialog.set(DirDialog::create(None))>
                <i class="plus icon"></i>
                "New preset directory"
            </a>
        </div>
    }
}
