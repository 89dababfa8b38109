//! Bulk Removal
//!
//! Planning and completion tracking for "remove selected". Every selected
//! object gets its own DELETE; the batch finishes when the last one settles.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::selection::Selection;

/// One object to delete
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalTarget {
    Decision(u32),
    Job(u32),
    PresetDir(u32),
}

impl RemovalTarget {
    pub fn label(&self) -> String {
        match self {
            RemovalTarget::Decision(id) => format!("decision #{}", id),
            RemovalTarget::Job(id) => format!("job #{}", id),
            RemovalTarget::PresetDir(id) => format!("preset directory #{}", id),
        }
    }

    async fn remove(self) -> Result<(), ApiError> {
        match self {
            RemovalTarget::Decision(id) => api::remove_decision(id).await,
            RemovalTarget::Job(id) => api::remove_job(id).await,
            RemovalTarget::PresetDir(id) => api::remove_preset_dir(&api::endpoints::preset_dir_url(id)).await,
        }
    }
}

/// Dispatch order: decisions, then jobs, then preset directories.
///
/// Decisions go first so none of them depends on a job cascade.
pub fn removal_plan(selection: &Selection) -> Vec<RemovalTarget> {
    selection
        .decisions
        .iter()
        .map(|&id| RemovalTarget::Decision(id))
        .chain(selection.jobs.iter().map(|&id| RemovalTarget::Job(id)))
        .chain(selection.preset_dirs.iter().map(|&id| RemovalTarget::PresetDir(id)))
        .collect()
}

/// A removal that the server rejected
#[derive(Clone, Debug, PartialEq)]
pub struct FailedRemoval {
    pub target: RemovalTarget,
    pub error: ApiError,
}

/// Result of a finished batch
#[derive(Clone, Debug, PartialEq)]
pub enum RemovalOutcome {
    AllRemoved,
    Failed(Vec<FailedRemoval>),
}

impl RemovalOutcome {
    /// Notification text listing each failure
    pub fn failure_message(&self) -> Option<String> {
        match self {
            RemovalOutcome::AllRemoved => None,
            RemovalOutcome::Failed(failures) => {
                let details = failures
                    .iter()
                    .map(|f| format!("{}: {}", f.target.label(), f.error))
                    .collect::<Vec<_>>()
                    .join("; ");
                Some(format!("Could not remove {} object(s): {}", failures.len(), details))
            }
        }
    }
}

/// Outstanding-request counter for one batch
#[derive(Debug)]
pub struct RemovalBatch {
    outstanding: usize,
    failed: Vec<FailedRemoval>,
}

impl RemovalBatch {
    pub fn new(total: usize) -> Self {
        Self {
            outstanding: total,
            failed: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Record one settled request. Returns the outcome once the last one
    /// settles, and `None` before that or for extra settles afterwards.
    pub fn settle(&mut self, target: RemovalTarget, result: Result<(), ApiError>) -> Option<RemovalOutcome> {
        if self.outstanding == 0 {
            return None;
        }
        if let Err(error) = result {
            self.failed.push(FailedRemoval { target, error });
        }
        self.outstanding -= 1;
        if self.outstanding > 0 {
            return None;
        }
        if self.failed.is_empty() {
            Some(RemovalOutcome::AllRemoved)
        } else {
            Some(RemovalOutcome::Failed(std::mem::take(&mut self.failed)))
        }
    }
}

/// Future run on the browser event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Fire every removal at once and call `on_done` after the last settles.
///
/// An empty plan completes immediately.
pub fn dispatch_removals<F>(plan: Vec<RemovalTarget>, on_done: F)
where
    F: FnOnce(RemovalOutcome) + 'static,
{
    dispatch_with(plan, RemovalTarget::remove, |task| spawn_local(task), on_done);
}

/// Fan-out core: `remove` starts each request in plan order and `spawn`
/// drives it. Settle order is free; `on_done` runs once, after the last.
pub fn dispatch_with<R, Fut, S, F>(plan: Vec<RemovalTarget>, remove: R, mut spawn: S, on_done: F)
where
    R: Fn(RemovalTarget) -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    S: FnMut(LocalTask),
    F: FnOnce(RemovalOutcome) + 'static,
{
    if plan.is_empty() {
        on_done(RemovalOutcome::AllRemoved);
        return;
    }

    log::info!("[REMOVE] Dispatching {} removals", plan.len());
    let batch = Rc::new(RefCell::new(RemovalBatch::new(plan.len())));
    let on_done: Rc<RefCell<Option<F>>> = Rc::new(RefCell::new(Some(on_done)));

    for target in plan {
        let request = remove(target);
        let batch = Rc::clone(&batch);
        let on_done = Rc::clone(&on_done);
        spawn(Box::pin(async move {
            let result = request.await;
            if let Err(e) = &result {
                log::warn!("[REMOVE] {} failed: {}", target.label(), e);
            }
            let outcome = batch.borrow_mut().settle(target, result);
            if let Some(outcome) = outcome {
                if let Some(done) = on_done.borrow_mut().take() {
                    done(outcome);
                }
            }
        }));
    }
}
