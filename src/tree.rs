//! Tree Utilities
//!
//! Helper functions for job tree rendering.

use std::collections::{HashMap, HashSet};

use crate::models::{Decision, Job, PageData, PresetDir};
use crate::selection::NodeKey;

/// Levels shown expanded when the page opens
pub const INITIAL_OPEN_DEPTH: usize = 2;

/// One row of the job tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub key: NodeKey,
    pub label: String,
    pub depth: usize,
    pub has_children: bool,
    /// Item URL of a preset directory row
    pub item_url: Option<String>,
    pub editable: bool,
    /// Decision status, if the page provided one
    pub status: Option<String>,
}

/// Parent of each directory as displayed: unknown parents become `None`,
/// and a parent cycle is cut at its first member in input order.
fn effective_parents(dirs: &[PresetDir]) -> HashMap<u32, Option<u32>> {
    let known_dirs: HashSet<u32> = dirs.iter().map(|d| d.id).collect();
    let mut parents: HashMap<u32, Option<u32>> = dirs
        .iter()
        .map(|d| (d.id, d.parent.filter(|p| known_dirs.contains(p))))
        .collect();

    for dir in dirs {
        let mut seen = HashSet::new();
        let mut current = parents.get(&dir.id).copied().flatten();
        while let Some(ancestor) = current {
            if ancestor == dir.id {
                log::warn!("[TREE] Preset directory {} is its own ancestor, shown as root", dir.id);
                parents.insert(dir.id, None);
                break;
            }
            // Cycle further up, cut when its own first member comes up
            if !seen.insert(ancestor) {
                break;
            }
            current = parents.get(&ancestor).copied().flatten();
        }
    }
    parents
}

/// Flatten directories, jobs and decisions in display order.
///
/// Each directory is followed by its sub-directories and then its jobs; each
/// job by its decisions. Jobs outside any known directory come after the root
/// directories, and decisions of unknown jobs are dropped.
pub fn build_tree(data: &PageData) -> Vec<TreeNode> {
    let parents = effective_parents(&data.preset_dirs);
    let known_parent = |id: Option<u32>| id.filter(|p| parents.contains_key(p));

    let mut dirs_map: HashMap<Option<u32>, Vec<&PresetDir>> = HashMap::new();
    for dir in &data.preset_dirs {
        dirs_map.entry(parents[&dir.id]).or_default().push(dir);
    }
    let mut jobs_map: HashMap<Option<u32>, Vec<&Job>> = HashMap::new();
    for job in &data.jobs {
        jobs_map.entry(known_parent(job.preset_dir)).or_default().push(job);
    }
    let mut decisions_map: HashMap<u32, Vec<&Decision>> = HashMap::new();
    for decision in &data.decisions {
        decisions_map.entry(decision.job).or_default().push(decision);
    }

    struct Maps<'a> {
        dirs: HashMap<Option<u32>, Vec<&'a PresetDir>>,
        jobs: HashMap<Option<u32>, Vec<&'a Job>>,
        decisions: HashMap<u32, Vec<&'a Decision>>,
    }

    fn collect_jobs(parent: Option<u32>, depth: usize, maps: &Maps, result: &mut Vec<TreeNode>) {
        for job in maps.jobs.get(&parent).into_iter().flatten() {
            let decisions = maps.decisions.get(&job.id);
            result.push(TreeNode {
                key: NodeKey::Job(job.id),
                label: job.name.clone(),
                depth,
                has_children: decisions.map_or(false, |d| !d.is_empty()),
                item_url: None,
                editable: false,
                status: None,
            });
            for decision in decisions.into_iter().flatten() {
                result.push(TreeNode {
                    key: NodeKey::Decision(decision.id),
                    label: decision.title.clone(),
                    depth: depth + 1,
                    has_children: false,
                    item_url: None,
                    editable: false,
                    status: decision.status.clone(),
                });
            }
        }
    }

    fn collect_dirs(parent: Option<u32>, depth: usize, maps: &Maps, result: &mut Vec<TreeNode>) {
        for dir in maps.dirs.get(&parent).into_iter().flatten() {
            let has_children = maps.dirs.contains_key(&Some(dir.id)) || maps.jobs.contains_key(&Some(dir.id));
            result.push(TreeNode {
                key: NodeKey::PresetDir(dir.id),
                label: dir.name.clone(),
                depth,
                has_children,
                item_url: Some(dir.item_url()),
                editable: dir.editable,
                status: None,
            });
            collect_dirs(Some(dir.id), depth + 1, maps, result);
            collect_jobs(Some(dir.id), depth + 1, maps, result);
        }
    }

    let maps = Maps {
        dirs: dirs_map,
        jobs: jobs_map,
        decisions: decisions_map,
    };
    let mut result = Vec::new();
    collect_dirs(None, 0, &maps, &mut result);
    collect_jobs(None, 0, &maps, &mut result);
    result
}

/// Rows not hidden under a collapsed ancestor
pub fn visible_nodes(nodes: &[TreeNode], collapsed: &HashSet<NodeKey>) -> Vec<TreeNode> {
    let mut hidden_below: Option<usize> = None;
    let mut result = Vec::new();
    for node in nodes {
        if let Some(depth) = hidden_below {
            if node.depth > depth {
                continue;
            }
            hidden_below = None;
        }
        if node.has_children && collapsed.contains(&node.key) {
            hidden_below = Some(node.depth);
        }
        result.push(node.clone());
    }
    result
}

/// Nodes collapsed on first render: every parent at `open_depth` or deeper
pub fn initially_collapsed(nodes: &[TreeNode], open_depth: usize) -> HashSet<NodeKey> {
    nodes
        .iter()
        .filter(|n| n.has_children && n.depth >= open_depth)
        .map(|n| n.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(id: u32, parent: Option<u32>) -> PresetDir {
        PresetDir {
            id,
            name: format!("Dir {}", id),
            parent,
            url: None,
            editable: true,
        }
    }

    fn job(id: u32, preset_dir: Option<u32>) -> Job {
        Job {
            id,
            name: format!("Job {}", id),
            preset_dir,
        }
    }

    fn decision(id: u32, job: u32) -> Decision {
        Decision {
            id,
            title: format!("Decision {}", id),
            job,
            status: None,
        }
    }

    fn sample() -> PageData {
        PageData {
            preset_dirs: vec![dir(1, None), dir(2, Some(1))],
            jobs: vec![job(10, Some(1)), job(11, Some(2)), job(12, None)],
            decisions: vec![decision(100, 10), decision(101, 11), decision(102, 11), decision(103, 99)],
            ..Default::default()
        }
    }

    fn keys(nodes: &[TreeNode]) -> Vec<(NodeKey, usize)> {
        nodes.iter().map(|n| (n.key, n.depth)).collect()
    }

    #[test]
    fn test_build_tree() {
        let tree = build_tree(&sample());

        // 1 > (2 > (11 > 101, 102)), (10 > 100); then root job 12
        assert_eq!(
            keys(&tree),
            vec![
                (NodeKey::PresetDir(1), 0),
                (NodeKey::PresetDir(2), 1),
                (NodeKey::Job(11), 2),
                (NodeKey::Decision(101), 3),
                (NodeKey::Decision(102), 3),
                (NodeKey::Job(10), 1),
                (NodeKey::Decision(100), 2),
                (NodeKey::Job(12), 0),
            ]
        );
        assert!(tree[0].has_children);
        assert!(!tree[7].has_children);
        assert_eq!(tree[1].item_url.as_deref(), Some("/jobs/api/api-preset-job-dir/2/"));
    }

    #[test]
    fn test_unknown_parents_become_roots() {
        let data = PageData {
            preset_dirs: vec![dir(5, Some(404))],
            jobs: vec![job(6, Some(405))],
            ..Default::default()
        };
        assert_eq!(
            keys(&build_tree(&data)),
            vec![(NodeKey::PresetDir(5), 0), (NodeKey::Job(6), 0)]
        );
    }

    #[test]
    fn test_parent_cycle_keeps_members_visible() {
        let data = PageData {
            preset_dirs: vec![dir(1, None), dir(2, Some(3)), dir(3, Some(2))],
            jobs: vec![job(7, Some(3))],
            decisions: vec![decision(70, 7)],
            ..Default::default()
        };
        // Cycle 2 <-> 3 is cut at 2, the first member listed
        assert_eq!(
            keys(&build_tree(&data)),
            vec![
                (NodeKey::PresetDir(1), 0),
                (NodeKey::PresetDir(2), 0),
                (NodeKey::PresetDir(3), 1),
                (NodeKey::Job(7), 2),
                (NodeKey::Decision(70), 3),
            ]
        );
    }

    #[test]
    fn test_self_parent_and_cycle_below_root() {
        let data = PageData {
            preset_dirs: vec![dir(4, Some(4)), dir(5, Some(6)), dir(6, Some(5)), dir(8, Some(6))],
            ..Default::default()
        };
        assert_eq!(
            keys(&build_tree(&data)),
            vec![
                (NodeKey::PresetDir(4), 0),
                (NodeKey::PresetDir(5), 0),
                (NodeKey::PresetDir(6), 1),
                (NodeKey::PresetDir(8), 2),
            ]
        );
    }

    #[test]
    fn test_visible_nodes_hide_collapsed_subtree() {
        let tree = build_tree(&sample());
        let collapsed: HashSet<NodeKey> = [NodeKey::PresetDir(2)].into_iter().collect();

        let visible = visible_nodes(&tree, &collapsed);
        assert_eq!(
            keys(&visible),
            vec![
                (NodeKey::PresetDir(1), 0),
                (NodeKey::PresetDir(2), 1),
                (NodeKey::Job(10), 1),
                (NodeKey::Decision(100), 2),
                (NodeKey::Job(12), 0),
            ]
        );
    }

    #[test]
    fn test_initially_collapsed_opens_first_levels() {
        let tree = build_tree(&sample());
        let collapsed = initially_collapsed(&tree, INITIAL_OPEN_DEPTH);
        let expected: HashSet<NodeKey> = [NodeKey::Job(11)].into_iter().collect();
        assert_eq!(collapsed, expected);
    }
}
