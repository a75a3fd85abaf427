// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::application::Application;

/// The (application index, document index) pair identifying what the UI displays.
///
/// Positions are meaningful only while the relevant sequence is non-empty; on an empty workspace
/// both stay at 0 and the `query` selectors return `None` instead. Mutated only through ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub application: usize,
    pub document: usize,
}

impl Cursor {
    pub fn new(application: usize, document: usize) -> Self {
        Self { application, document }
    }
}

/// The top-level container the TUI runs against.
///
/// Holds the application list, the selection cursor, and a monotone revision. The revision is the
/// optimistic-concurrency baseline for [`crate::ops::apply_ops`]: a caller submits the revision it
/// derived its ops from, and a mismatch rejects the batch instead of applying it to state the
/// caller never saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    applications: Vec<Application>,
    cursor: Cursor,
    rev: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Swaps in a fully-built replacement state. Used by `apply_ops` after a batch succeeds on a
    /// private clone; renderers holding the previous snapshot never observe partial mutation.
    pub fn replace(&mut self, applications: Vec<Application>, cursor: Cursor) {
        self.applications = applications;
        self.cursor = cursor;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
