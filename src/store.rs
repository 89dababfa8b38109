//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::PageData;
use crate::selection::{NodeKey, Selection};
use crate::tree::{self, TreeNode};

/// Job tree state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// All rows in display order, including collapsed ones
    pub nodes: Vec<TreeNode>,
    /// Checked rows
    pub checked: HashSet<NodeKey>,
    /// Rows whose children are hidden
    pub collapsed: HashSet<NodeKey>,
}

impl PageState {
    pub fn from_page(data: &PageData) -> Self {
        let nodes = tree::build_tree(data);
        let collapsed = tree::initially_collapsed(&nodes, tree::INITIAL_OPEN_DEPTH);
        Self {
            nodes,
            checked: HashSet::new(),
            collapsed,
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_checked(store: &PageStore, key: NodeKey, checked: bool) {
    let field = store.checked();
    let mut set = field.write();
    if checked {
        set.insert(key);
    } else {
        set.remove(&key);
    }
}

pub fn store_is_checked(store: &PageStore, key: NodeKey) -> bool {
    store.checked().with(|set| set.contains(&key))
}

pub fn store_toggle_collapsed(store: &PageStore, key: NodeKey) {
    let field = store.collapsed();
    let mut set = field.write();
    if !set.remove(&key) {
        set.insert(key);
    }
}

pub fn store_is_collapsed(store: &PageStore, key: NodeKey) -> bool {
    store.collapsed().with(|set| set.contains(&key))
}

/// Current selection, in display order
pub fn store_selection(store: &PageStore) -> Selection {
    let nodes_field = store.nodes();
    let checked_field = store.checked();
    let nodes = nodes_field.read();
    let checked = checked_field.read();
    Selection::collect(nodes.iter().map(|n| n.key), &checked)
}

/// Rows to render given the collapsed set
pub fn store_visible_nodes(store: &PageStore) -> Vec<TreeNode> {
    let nodes_field = store.nodes();
    let collapsed_field = store.collapsed();
    let nodes = nodes_field.read();
    let collapsed = collapsed_field.read();
    tree::visible_nodes(&nodes, &collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decision, Job, PresetDir};

    fn page() -> PageData {
        PageData {
            preset_dirs: vec![PresetDir { id: 1, name: "Linux".to_string(), parent: None, url: None, editable: true }],
            jobs: vec![Job { id: 2, name: "Job 2".to_string(), preset_dir: Some(1) }],
            decisions: vec![
                Decision { id: 3, title: "Run 3".to_string(), job: 2, status: None },
                Decision { id: 4, title: "Run 4".to_string(), job: 2, status: None },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_checkbox_changes_update_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(PageState::from_page(&page()));

            store_set_checked(&store, NodeKey::Decision(4), true);
            store_set_checked(&store, NodeKey::Job(2), true);
            store_set_checked(&store, NodeKey::Decision(3), true);
            assert!(store_is_checked(&store, NodeKey::Decision(4)));

            let selection = store_selection(&store);
            assert_eq!(selection.jobs, vec![2]);
            assert_eq!(selection.decisions, vec![3, 4]);

            store_set_checked(&store, NodeKey::Job(2), false);
            assert!(!store_is_checked(&store, NodeKey::Job(2)));
            assert!(store_selection(&store).jobs.is_empty());
        });
    }

    #[test]
    fn test_toggle_collapsed_hides_children() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(PageState::from_page(&page()));
            assert_eq!(store_visible_nodes(&store).len(), 4);

            store_toggle_collapsed(&store, NodeKey::PresetDir(1));
            assert!(store_is_collapsed(&store, NodeKey::PresetDir(1)));
            assert_eq!(store_visible_nodes(&store).len(), 1);

            store_toggle_collapsed(&store, NodeKey::PresetDir(1));
            assert!(!store_is_collapsed(&store, NodeKey::PresetDir(1)));
            assert_eq!(store_visible_nodes(&store).len(), 4);
        });
    }
}
