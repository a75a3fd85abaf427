// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only selectors over the workspace.
//!
//! Everything here is recomputed from the current snapshot; nothing is cached. The boundary
//! predicates drive the disabled rendering of the footer Back/Next controls.

use crate::model::{Application, Document, Workspace};

/// The application under the cursor, or `None` for an empty workspace.
pub fn current_application(workspace: &Workspace) -> Option<&Application> {
    workspace.applications().get(workspace.cursor().application)
}

/// The document under the cursor, or `None` when there is no current application or it has no
/// documents.
pub fn current_document(workspace: &Workspace) -> Option<&Document> {
    current_application(workspace)?.documents().get(workspace.cursor().document)
}

/// Whether the cursor sits at the first document of the first application.
///
/// True for an empty workspace; backward navigation is a no-op either way.
pub fn at_global_start(workspace: &Workspace) -> bool {
    let cursor = workspace.cursor();
    cursor.application == 0 && cursor.document == 0
}

/// Whether the cursor sits at the last document of the last application (or past the end of an
/// empty document list in the last application). True for an empty workspace.
pub fn at_global_end(workspace: &Workspace) -> bool {
    let cursor = workspace.cursor();
    let applications = workspace.applications();
    if applications.is_empty() {
        return true;
    }

    cursor.application == applications.len() - 1
        && cursor.document >= applications[cursor.application].last_document_index()
}

pub fn document_count(workspace: &Workspace, application: usize) -> usize {
    workspace.applications().get(application).map_or(0, |app| app.documents().len())
}

pub fn total_documents(workspace: &Workspace) -> usize {
    workspace.applications().iter().map(|app| app.documents().len()).sum()
}
