// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the workspace.
//!
//! Operations are applied with optimistic concurrency (revision checks) and produce a minimal
//! delta that the UI can use to refresh derived state. A batch is all-or-nothing: it runs against
//! a private clone of the application list and cursor, and the workspace is only updated when
//! every op in the batch succeeds.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Application, Cursor, Document, FileRef, Workspace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    AddApplication {
        name: String,
    },
    RemoveApplication {
        application: usize,
    },
    AddDocument {
        application: usize,
        name: String,
    },
    RemoveDocument {
        application: usize,
        document: usize,
    },
    AttachFile {
        application: usize,
        document: usize,
        file: FileRef,
    },
    DetachFile {
        application: usize,
        document: usize,
    },
    SelectApplication {
        application: usize,
    },
    SelectDocument {
        document: usize,
    },
    Navigate {
        direction: Direction,
    },
}

/// Traversal direction through the flattened (application, document) space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A coarse position marker: an application, or a document within one.
///
/// Positions are as seen at the moment the op applied; a removal shifts later entries, so these
/// are refresh hints for the UI, not stable identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryRef {
    pub application: usize,
    pub document: Option<usize>,
}

impl EntryRef {
    pub fn application(application: usize) -> Self {
        Self { application, document: None }
    }

    pub fn document(application: usize, document: usize) -> Self {
        Self { application, document: Some(document) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing what changed as the result of applying ops.
///
/// This is intentionally coarse: it reports added/removed/updated positions plus whether the
/// selection cursor moved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntryRef>,
    pub removed: Vec<EntryRef>,
    pub updated: Vec<EntryRef>,
    pub cursor_moved: bool,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<EntryRef>,
    removed: HashSet<EntryRef>,
    updated: HashSet<EntryRef>,
    cursor_moved: bool,
}

impl DeltaBuilder {
    fn record_added(&mut self, entry: EntryRef) {
        self.removed.remove(&entry);
        self.updated.remove(&entry);
        self.added.insert(entry);
    }

    fn record_removed(&mut self, entry: EntryRef) {
        self.added.remove(&entry);
        self.updated.remove(&entry);
        self.removed.insert(entry);
    }

    fn record_updated(&mut self, entry: EntryRef) {
        if self.added.contains(&entry) || self.removed.contains(&entry) {
            return;
        }
        self.updated.insert(entry);
    }

    fn record_cursor_moved(&mut self) {
        self.cursor_moved = true;
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort_unstable();
        removed.sort_unstable();
        updated.sort_unstable();

        Delta { added, removed, updated, cursor_moved: self.cursor_moved }
    }
}

/// Applies a batch of ops against the workspace.
///
/// `base_rev` must match the workspace revision the caller derived the ops from; a mismatch
/// rejects the batch. On success the whole batch is swapped in at once and the revision is bumped
/// exactly once.
pub fn apply_ops(
    workspace: &mut Workspace,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = workspace.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: Delta::default() });
    }

    let mut applications = workspace.applications().to_vec();
    let mut cursor = workspace.cursor();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_workspace_op(&mut applications, &mut cursor, op, &mut delta)?;
    }

    workspace.replace(applications, cursor);
    workspace.bump_rev();
    let new_rev = workspace.rev();

    Ok(ApplyResult { new_rev, applied: ops.len(), delta: delta.finish() })
}

/// Index preconditions are the caller's responsibility (the UI only submits positions it is
/// currently rendering); a violation rejects the whole batch and leaves the workspace untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    ApplicationOutOfRange { index: usize, len: usize },
    DocumentOutOfRange { application: usize, index: usize, len: usize },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { base_rev, current_rev } => {
                write!(f, "stale base_rev (base_rev={base_rev}, current_rev={current_rev})")
            }
            Self::ApplicationOutOfRange { index, len } => {
                write!(f, "application index out of range (index={index}, len={len})")
            }
            Self::DocumentOutOfRange { application, index, len } => {
                write!(
                    f,
                    "document index out of range (application={application}, index={index}, len={len})"
                )
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// Extracted op-application implementation for workspace mutations.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
