//! Selection Tracking
//!
//! Checked rows of the job tree, grouped by object kind, and the action
//! controls whose enabled state follows from them.

use std::collections::HashSet;

use crate::error::ValidationError;

/// Identity of a checkable tree row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    PresetDir(u32),
    Job(u32),
    Decision(u32),
}

/// Selected ids per kind, in display order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub jobs: Vec<u32>,
    pub decisions: Vec<u32>,
    pub preset_dirs: Vec<u32>,
}

impl Selection {
    /// Walk rows in display order and keep the checked ones
    pub fn collect<I>(order: I, checked: &HashSet<NodeKey>) -> Self
    where
        I: IntoIterator<Item = NodeKey>,
    {
        let mut selection = Selection::default();
        for key in order.into_iter().filter(|key| checked.contains(key)) {
            match key {
                NodeKey::PresetDir(id) => selection.preset_dirs.push(id),
                NodeKey::Job(id) => selection.jobs.push(id),
                NodeKey::Decision(id) => selection.decisions.push(id),
            }
        }
        selection
    }

    pub fn total(&self) -> usize {
        self.jobs.len() + self.decisions.len() + self.preset_dirs.len()
    }

    pub fn require_removable(&self) -> Result<(), ValidationError> {
        if self.total() == 0 {
            return Err(ValidationError::NoObjectsToDelete);
        }
        Ok(())
    }

    pub fn require_downloadable(&self) -> Result<(), ValidationError> {
        if self.jobs.is_empty() && self.decisions.is_empty() {
            return Err(ValidationError::NoJobsToDownload);
        }
        Ok(())
    }

    /// The two decisions to compare, in display order
    pub fn comparison_pair(&self) -> Result<(u32, u32), ValidationError> {
        match self.decisions.as_slice() {
            [first, second] => Ok((*first, *second)),
            _ => Err(ValidationError::DecisionPairRequired),
        }
    }
}

/// Enabled state of the job tree action controls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionControls {
    pub download: bool,
    pub remove: bool,
    pub compare_reports: bool,
    pub compare_files: bool,
}

impl ActionControls {
    pub fn for_selection(selection: &Selection) -> Self {
        let compare = selection.decisions.len() == 2;
        Self {
            download: selection.require_downloadable().is_ok(),
            remove: selection.require_removable().is_ok(),
            compare_reports: compare,
            compare_files: compare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_with(jobs: usize, decisions: usize, dirs: usize) -> Selection {
        Selection {
            jobs: (1..=jobs as u32).collect(),
            decisions: (100..100 + decisions as u32).collect(),
            preset_dirs: (200..200 + dirs as u32).collect(),
        }
    }

    #[test]
    fn test_controls_match_rule_table() {
        for jobs in 0..4 {
            for decisions in 0..4 {
                for dirs in 0..4 {
                    let controls = ActionControls::for_selection(&selection_with(jobs, decisions, dirs));
                    assert_eq!(controls.download, jobs + decisions > 0, "download {} {} {}", jobs, decisions, dirs);
                    assert_eq!(controls.remove, jobs + decisions + dirs > 0, "remove {} {} {}", jobs, decisions, dirs);
                    assert_eq!(controls.compare_reports, decisions == 2, "reports {} {} {}", jobs, decisions, dirs);
                    assert_eq!(controls.compare_files, decisions == 2, "files {} {} {}", jobs, decisions, dirs);
                }
            }
        }
    }

    #[test]
    fn test_collect_keeps_display_order() {
        let order = vec![
            NodeKey::PresetDir(1),
            NodeKey::Job(7),
            NodeKey::Decision(9),
            NodeKey::Decision(5),
            NodeKey::Job(2),
        ];
        // Checked in a different order than displayed
        let checked: HashSet<NodeKey> = [NodeKey::Job(2), NodeKey::Decision(5), NodeKey::Decision(9), NodeKey::Job(7)]
            .into_iter()
            .collect();

        let selection = Selection::collect(order, &checked);
        assert_eq!(selection.jobs, vec![7, 2]);
        assert_eq!(selection.decisions, vec![9, 5]);
        assert!(selection.preset_dirs.is_empty());
    }

    #[test]
    fn test_collect_ignores_unknown_keys() {
        let checked: HashSet<NodeKey> = [NodeKey::Job(42)].into_iter().collect();
        let selection = Selection::collect(vec![NodeKey::Job(1)], &checked);
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_empty_selection_cannot_be_removed() {
        assert_eq!(Selection::default().require_removable(), Err(ValidationError::NoObjectsToDelete));
        assert!(selection_with(0, 0, 1).require_removable().is_ok());
    }

    #[test]
    fn test_download_needs_job_or_decision() {
        assert_eq!(selection_with(0, 0, 3).require_downloadable(), Err(ValidationError::NoJobsToDownload));
        assert!(selection_with(0, 1, 0).require_downloadable().is_ok());
        assert!(selection_with(1, 0, 0).require_downloadable().is_ok());
    }

    #[test]
    fn test_comparison_pair() {
        let selection = Selection { decisions: vec![5, 9], ..Default::default() };
        assert_eq!(selection.comparison_pair(), Ok((5, 9)));
        assert_eq!(selection_with(2, 1, 0).comparison_pair(), Err(ValidationError::DecisionPairRequired));
        assert_eq!(selection_with(0, 3, 0).comparison_pair(), Err(ValidationError::DecisionPairRequired));
    }
}
