// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Workspace mutation implementation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_workspace_op(
    applications: &mut Vec<Application>,
    cursor: &mut Cursor,
    op: &Op,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        Op::AddApplication { name } => {
            applications.push(Application::new(name.clone()));
            delta.record_added(EntryRef::application(applications.len() - 1));
            Ok(())
        }
        Op::RemoveApplication { application } => {
            check_application(applications, *application)?;
            applications.remove(*application);

            // The original behavior: clamp the application cursor to the shrunken list and reset
            // the document cursor no matter which application was removed.
            cursor.application = cursor.application.min(applications.len().saturating_sub(1));
            cursor.document = 0;
            delta.record_removed(EntryRef::application(*application));
            delta.record_cursor_moved();
            Ok(())
        }
        Op::AddDocument { application, name } => {
            let app = checked_application_mut(applications, *application)?;
            app.documents_mut().push(Document::new(name.clone()));
            let document = app.documents().len() - 1;
            delta.record_added(EntryRef::document(*application, document));
            Ok(())
        }
        Op::RemoveDocument { application, document } => {
            let app = checked_application_mut(applications, *application)?;
            check_document(app, *application, *document)?;
            app.documents_mut().remove(*document);

            // Clamp only when the removal targets the selected application; removals elsewhere
            // must not desynchronize the cursor against an unrelated document list.
            if *application == cursor.application {
                cursor.document = cursor.document.min(app.last_document_index());
                delta.record_cursor_moved();
            }
            delta.record_removed(EntryRef::document(*application, *document));
            Ok(())
        }
        Op::AttachFile { application, document, file } => {
            let doc = checked_document_mut(applications, *application, *document)?;
            doc.set_file(Some(file.clone()));
            delta.record_updated(EntryRef::document(*application, *document));
            Ok(())
        }
        Op::DetachFile { application, document } => {
            let doc = checked_document_mut(applications, *application, *document)?;
            doc.set_file(None);
            delta.record_updated(EntryRef::document(*application, *document));
            Ok(())
        }
        Op::SelectApplication { application } => {
            check_application(applications, *application)?;
            cursor.application = *application;
            cursor.document = 0;
            delta.record_cursor_moved();
            Ok(())
        }
        Op::SelectDocument { document } => {
            let app = checked_application_mut(applications, cursor.application)?;
            check_document(app, cursor.application, *document)?;
            cursor.document = *document;
            delta.record_cursor_moved();
            Ok(())
        }
        Op::Navigate { direction } => {
            if navigate_cursor(applications, cursor, *direction) {
                delta.record_cursor_moved();
            }
            Ok(())
        }
    }
}

/// Moves the cursor one step through documents, crossing application boundaries at the ends of a
/// document list. Returns whether the cursor moved; the global boundaries are no-ops, not errors.
fn navigate_cursor(applications: &[Application], cursor: &mut Cursor, direction: Direction) -> bool {
    match direction {
        Direction::Forward => {
            let has_next_document = applications
                .get(cursor.application)
                .is_some_and(|app| cursor.document + 1 < app.documents().len());
            if has_next_document {
                cursor.document += 1;
                return true;
            }
            if cursor.application + 1 < applications.len() {
                cursor.application += 1;
                cursor.document = 0;
                return true;
            }
            false
        }
        Direction::Backward => {
            if cursor.document > 0 {
                cursor.document -= 1;
                return true;
            }
            if cursor.application > 0 {
                cursor.application -= 1;
                cursor.document = applications[cursor.application].last_document_index();
                return true;
            }
            false
        }
    }
}

fn check_application(applications: &[Application], index: usize) -> Result<(), ApplyError> {
    if index >= applications.len() {
        return Err(ApplyError::ApplicationOutOfRange { index, len: applications.len() });
    }
    Ok(())
}

fn checked_application_mut(
    applications: &mut [Application],
    index: usize,
) -> Result<&mut Application, ApplyError> {
    let len = applications.len();
    applications
        .get_mut(index)
        .ok_or(ApplyError::ApplicationOutOfRange { index, len })
}

fn check_document(app: &Application, application: usize, index: usize) -> Result<(), ApplyError> {
    if index >= app.documents().len() {
        return Err(ApplyError::DocumentOutOfRange {
            application,
            index,
            len: app.documents().len(),
        });
    }
    Ok(())
}

fn checked_document_mut(
    applications: &mut [Application],
    application: usize,
    document: usize,
) -> Result<&mut Document, ApplyError> {
    let app = checked_application_mut(applications, application)?;
    let len = app.documents().len();
    app.documents_mut()
        .get_mut(document)
        .ok_or(ApplyError::DocumentOutOfRange { application, index: document, len })
}
