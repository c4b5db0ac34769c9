// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint Engine: dispatch for auto-approval. The poll-and-block and
//! MR-phase-gate responsibilities live in [`crate::orchestrator`], which is
//! the only caller that has the run's on-disk state in hand.

use oj_core::{CheckpointRecord, CheckpointType, Resolution};

/// A single auto-approval rule. `can_handle` selects the handler;
/// `auto_approve` computes the resolution for a matched record.
pub trait CheckpointHandler: Send + Sync {
    fn can_handle(&self, checkpoint_type: &CheckpointType) -> bool;
    fn auto_approve(&self, record: &CheckpointRecord) -> Resolution;
}

struct IssueEnrichmentHandler;

impl CheckpointHandler for IssueEnrichmentHandler {
    fn can_handle(&self, checkpoint_type: &CheckpointType) -> bool {
        *checkpoint_type == CheckpointType::IssueEnrichment
    }

    fn auto_approve(&self, record: &CheckpointRecord) -> Resolution {
        let selected: Vec<serde_json::Value> = record
            .context
            .get("all_issues_with_judgments")
            .and_then(|v| v.as_array())
            .map(|issues| {
                issues
                    .iter()
                    .filter(|issue| {
                        issue
                            .get("llm_judgment")
                            .and_then(|j| j.get("decision"))
                            .and_then(|d| d.as_str())
                            == Some("needs_enrichment")
                    })
                    .filter_map(|issue| issue.get("issue_iid").cloned())
                    .collect()
            })
            .unwrap_or_default();

        Resolution::approve_with_modifications(serde_json::json!({ "selected_issue_iids": selected }))
    }
}

struct RegressionApprovalHandler;

impl CheckpointHandler for RegressionApprovalHandler {
    fn can_handle(&self, checkpoint_type: &CheckpointType) -> bool {
        *checkpoint_type == CheckpointType::RegressionApproval
    }

    fn auto_approve(&self, _record: &CheckpointRecord) -> Resolution {
        Resolution::approve_with_decision("fix_now")
    }
}

struct IssueSelectionHandler;

impl CheckpointHandler for IssueSelectionHandler {
    fn can_handle(&self, checkpoint_type: &CheckpointType) -> bool {
        *checkpoint_type == CheckpointType::IssueSelection
    }

    fn auto_approve(&self, record: &CheckpointRecord) -> Resolution {
        match record.context.get("recommended_issue_iid") {
            Some(iid) => Resolution::approve_with_modifications(
                serde_json::json!({ "selected_issue_iid": iid.clone() }),
            ),
            None => Resolution::approve(),
        }
    }
}

struct DefaultHandler;

impl CheckpointHandler for DefaultHandler {
    fn can_handle(&self, _checkpoint_type: &CheckpointType) -> bool {
        true
    }

    fn auto_approve(&self, _record: &CheckpointRecord) -> Resolution {
        Resolution::approve()
    }
}

/// An ordered list of handlers; the first whose `can_handle` returns true
/// wins. The catch-all [`DefaultHandler`] is always last, so dispatch never
/// fails to produce a resolution.
pub struct CheckpointDispatcher {
    handlers: Vec<Box<dyn CheckpointHandler>>,
}

impl CheckpointDispatcher {
    /// The four built-in handlers from spec, default handler last.
    pub fn with_builtin_handlers() -> Self {
        Self {
            handlers: vec![
                Box::new(IssueEnrichmentHandler),
                Box::new(RegressionApprovalHandler),
                Box::new(IssueSelectionHandler),
                Box::new(DefaultHandler),
            ],
        }
    }

    /// Append a handler ahead of the catch-all, for callers that need a
    /// kind not covered by the built-ins. New kinds never require editing
    /// existing handlers (§4.5 invariant).
    pub fn with_handler(mut self, handler: Box<dyn CheckpointHandler>) -> Self {
        self.handlers.insert(self.handlers.len() - 1, handler);
        self
    }

    pub fn dispatch(&self, record: &CheckpointRecord) -> Resolution {
        self.handlers
            .iter()
            .find(|h| h.can_handle(&record.checkpoint_type))
            .map(|h| h.auto_approve(record))
            .unwrap_or_else(Resolution::approve)
    }
}

impl Default for CheckpointDispatcher {
    fn default() -> Self {
        Self::with_builtin_handlers()
    }
}

#[cfg(test)]
#[path = "checkpoint_tests.rs"]
mod tests;
