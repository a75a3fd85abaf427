// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use crate::model::{Cursor, FileRef, Workspace};

use super::{apply_ops, ApplyError, Delta, Direction, EntryRef, Op};

fn add_application(name: &str) -> Op {
    Op::AddApplication { name: name.to_owned() }
}

fn add_document(application: usize, name: &str) -> Op {
    Op::AddDocument { application, name: name.to_owned() }
}

/// Applies one batch at the workspace's current revision, panicking on error.
fn apply(workspace: &mut Workspace, ops: &[Op]) -> Delta {
    let base_rev = workspace.rev();
    apply_ops(workspace, base_rev, ops).expect("apply ops").delta
}

fn two_applications_one_document_each() -> Workspace {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(0, "Resume"),
            add_document(1, "Resume"),
        ],
    );
    workspace
}

#[test]
fn add_application_appends_and_leaves_cursor_untouched() {
    let mut workspace = Workspace::new();

    let delta = apply(&mut workspace, &[add_application("Acme")]);

    assert_eq!(workspace.applications().len(), 1);
    assert_eq!(workspace.applications()[0].name(), "Acme");
    assert!(workspace.applications()[0].documents().is_empty());
    assert_eq!(workspace.cursor(), Cursor::default());
    assert_eq!(delta.added, vec![EntryRef::application(0)]);
    assert!(!delta.cursor_moved);
}

#[test]
fn apply_bumps_rev_once_per_batch() {
    let mut workspace = Workspace::new();

    let result = apply_ops(
        &mut workspace,
        0,
        &[add_application("Acme"), add_document(0, "Resume"), add_document(0, "Cover Letter")],
    )
    .expect("apply");

    assert_eq!(result.new_rev, 1);
    assert_eq!(result.applied, 3);
    assert_eq!(workspace.rev(), 1);
}

#[test]
fn apply_conflicts_on_stale_base_rev() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme")]);

    let err = apply_ops(&mut workspace, 0, &[add_application("Globex")]).unwrap_err();
    assert_eq!(err, ApplyError::Conflict { base_rev: 0, current_rev: 1 });
    assert_eq!(workspace.applications().len(), 1);
}

#[test]
fn empty_batch_is_a_noop_without_rev_bump() {
    let mut workspace = Workspace::new();
    let result = apply_ops(&mut workspace, 0, &[]).expect("apply");
    assert_eq!(result.new_rev, 0);
    assert_eq!(result.applied, 0);
    assert_eq!(result.delta, Delta::default());
}

#[test]
fn net_length_and_survivor_order_after_add_remove_churn() {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_application("Initech"),
            add_application("Umbrella"),
        ],
    );
    apply(&mut workspace, &[Op::RemoveApplication { application: 1 }]);
    apply(&mut workspace, &[Op::RemoveApplication { application: 2 }]);

    let names =
        workspace.applications().iter().map(|app| app.name().to_owned()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Acme", "Initech"]);
}

#[test]
fn remove_application_clamps_cursor_and_resets_document() {
    let mut workspace = two_applications_one_document_each();
    apply(&mut workspace, &[Op::SelectApplication { application: 1 }]);
    apply(&mut workspace, &[Op::SelectDocument { document: 0 }]);

    apply(&mut workspace, &[Op::RemoveApplication { application: 1 }]);

    assert_eq!(workspace.applications().len(), 1);
    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
}

#[test]
fn remove_selected_application_shifts_survivor_to_front() {
    // Two applications with one document each, remove index 0 while it is selected.
    let mut workspace = two_applications_one_document_each();

    apply(&mut workspace, &[Op::RemoveApplication { application: 0 }]);

    assert_eq!(workspace.applications().len(), 1);
    assert_eq!(workspace.applications()[0].name(), "Globex");
    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
}

#[test]
fn remove_last_application_empties_workspace_with_sentinel_cursor() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme")]);

    apply(&mut workspace, &[Op::RemoveApplication { application: 0 }]);

    assert!(workspace.applications().is_empty());
    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
}

#[test]
fn remove_document_in_selected_application_clamps_cursor() {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
            Op::SelectDocument { document: 1 },
        ],
    );

    apply(&mut workspace, &[Op::RemoveDocument { application: 0, document: 1 }]);

    assert_eq!(workspace.applications()[0].documents().len(), 1);
    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
}

#[test]
fn remove_document_in_other_application_leaves_cursor_alone() {
    // Clamping against a non-selected application's document count would desynchronize the
    // cursor; removals elsewhere must leave the selection as it is.
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
            add_document(1, "Resume"),
            Op::SelectDocument { document: 1 },
        ],
    );
    assert_eq!(workspace.cursor(), Cursor::new(0, 1));

    let delta = apply(&mut workspace, &[Op::RemoveDocument { application: 1, document: 0 }]);

    assert_eq!(workspace.cursor(), Cursor::new(0, 1));
    assert!(!delta.cursor_moved);
    assert!(workspace.applications()[1].documents().is_empty());
}

#[test]
fn attach_then_detach_returns_file_to_absent() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme"), add_document(0, "Resume")]);

    apply(
        &mut workspace,
        &[Op::AttachFile {
            application: 0,
            document: 0,
            file: FileRef::new("/tmp/resume.pdf"),
        }],
    );
    assert_eq!(
        workspace.applications()[0].documents()[0].file().map(FileRef::path),
        Some("/tmp/resume.pdf")
    );

    apply(&mut workspace, &[Op::DetachFile { application: 0, document: 0 }]);
    assert!(workspace.applications()[0].documents()[0].file().is_none());
}

#[test]
fn attach_twice_overwrites_rather_than_accumulates() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme"), add_document(0, "Resume")]);

    apply(
        &mut workspace,
        &[
            Op::AttachFile { application: 0, document: 0, file: FileRef::new("/tmp/v1.pdf") },
            Op::AttachFile { application: 0, document: 0, file: FileRef::new("/tmp/v2.pdf") },
        ],
    );

    assert_eq!(
        workspace.applications()[0].documents()[0].file().map(FileRef::path),
        Some("/tmp/v2.pdf")
    );
}

#[test]
fn select_application_resets_document_cursor() {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
            Op::SelectDocument { document: 1 },
        ],
    );

    apply(&mut workspace, &[Op::SelectApplication { application: 1 }]);

    assert_eq!(workspace.cursor(), Cursor::new(1, 0));
}

#[test]
fn navigate_forward_walks_documents_then_crosses_applications() {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
            add_document(1, "Resume"),
        ],
    );

    apply(&mut workspace, &[Op::Navigate { direction: Direction::Forward }]);
    assert_eq!(workspace.cursor(), Cursor::new(0, 1));

    apply(&mut workspace, &[Op::Navigate { direction: Direction::Forward }]);
    assert_eq!(workspace.cursor(), Cursor::new(1, 0));
}

#[test]
fn navigate_forward_is_a_noop_at_the_global_end() {
    // Acme with Resume and Cover Letter; forward from (0, 0) lands on (0, 1) and a second
    // forward is a no-op at the last document of the last application.
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
        ],
    );

    let delta = apply(&mut workspace, &[Op::Navigate { direction: Direction::Forward }]);
    assert_eq!(workspace.cursor(), Cursor::new(0, 1));
    assert!(delta.cursor_moved);

    let delta = apply(&mut workspace, &[Op::Navigate { direction: Direction::Forward }]);
    assert_eq!(workspace.cursor(), Cursor::new(0, 1));
    assert!(!delta.cursor_moved);
}

#[test]
fn navigate_backward_is_a_noop_at_the_global_start() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme"), add_document(0, "Resume")]);

    let delta = apply(&mut workspace, &[Op::Navigate { direction: Direction::Backward }]);
    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
    assert!(!delta.cursor_moved);
}

#[test]
fn navigate_backward_lands_on_last_document_of_previous_application() {
    let mut workspace = two_applications_one_document_each();
    apply(&mut workspace, &[add_document(0, "Cover Letter")]);
    apply(&mut workspace, &[Op::SelectApplication { application: 1 }]);

    apply(&mut workspace, &[Op::Navigate { direction: Direction::Backward }]);

    assert_eq!(workspace.cursor(), Cursor::new(0, 1));
}

#[test]
fn navigate_backward_into_empty_application_clamps_to_zero() {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(1, "Resume"),
            Op::SelectApplication { application: 1 },
        ],
    );

    apply(&mut workspace, &[Op::Navigate { direction: Direction::Backward }]);

    assert_eq!(workspace.cursor(), Cursor::new(0, 0));
}

#[test]
fn navigate_is_a_noop_on_empty_workspace() {
    let mut workspace = Workspace::new();
    let delta = apply(&mut workspace, &[Op::Navigate { direction: Direction::Forward }]);
    assert_eq!(workspace.cursor(), Cursor::default());
    assert!(!delta.cursor_moved);
}

#[rstest]
#[case(Cursor::new(0, 1))]
#[case(Cursor::new(1, 0))]
#[case(Cursor::new(1, 1))]
fn forward_then_backward_returns_to_origin_away_from_boundaries(#[case] origin: Cursor) {
    let mut workspace = Workspace::new();
    apply(
        &mut workspace,
        &[
            add_application("Acme"),
            add_application("Globex"),
            add_document(0, "Resume"),
            add_document(0, "Cover Letter"),
            add_document(1, "Resume"),
            add_document(1, "References"),
            Op::SelectApplication { application: origin.application },
            Op::SelectDocument { document: origin.document },
        ],
    );
    assert_eq!(workspace.cursor(), origin);

    apply(
        &mut workspace,
        &[
            Op::Navigate { direction: Direction::Forward },
            Op::Navigate { direction: Direction::Backward },
        ],
    );

    assert_eq!(workspace.cursor(), origin);
}

#[rstest]
#[case(Op::RemoveApplication { application: 1 })]
#[case(Op::AddDocument { application: 1, name: "Resume".to_owned() })]
#[case(Op::SelectApplication { application: 1 })]
fn application_index_out_of_range_fails_the_batch(#[case] op: Op) {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme")]);
    let before = workspace.clone();

    let base_rev = workspace.rev();
    let err = apply_ops(&mut workspace, base_rev, &[op]).unwrap_err();

    assert_eq!(err, ApplyError::ApplicationOutOfRange { index: 1, len: 1 });
    assert_eq!(workspace, before);
}

#[rstest]
#[case(Op::RemoveDocument { application: 0, document: 1 })]
#[case(Op::AttachFile { application: 0, document: 1, file: FileRef::new("/tmp/x.pdf") })]
#[case(Op::DetachFile { application: 0, document: 1 })]
#[case(Op::SelectDocument { document: 1 })]
fn document_index_out_of_range_fails_the_batch(#[case] op: Op) {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme"), add_document(0, "Resume")]);
    let before = workspace.clone();

    let base_rev = workspace.rev();
    let err = apply_ops(&mut workspace, base_rev, &[op]).unwrap_err();

    assert_eq!(err, ApplyError::DocumentOutOfRange { application: 0, index: 1, len: 1 });
    assert_eq!(workspace, before);
}

#[test]
fn failing_op_mid_batch_leaves_earlier_ops_unapplied() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme")]);

    let base_rev = workspace.rev();
    let err = apply_ops(
        &mut workspace,
        base_rev,
        &[add_document(0, "Resume"), Op::RemoveDocument { application: 0, document: 5 }],
    )
    .unwrap_err();

    assert!(matches!(err, ApplyError::DocumentOutOfRange { .. }));
    assert!(workspace.applications()[0].documents().is_empty());
    assert_eq!(workspace.rev(), 1);
}

#[test]
fn delta_coalesces_add_and_update_of_the_same_document() {
    let mut workspace = Workspace::new();
    apply(&mut workspace, &[add_application("Acme")]);

    let delta = apply(
        &mut workspace,
        &[
            add_document(0, "Resume"),
            Op::AttachFile { application: 0, document: 0, file: FileRef::new("/tmp/r.pdf") },
        ],
    );

    assert_eq!(delta.added, vec![EntryRef::document(0, 0)]);
    assert!(delta.updated.is_empty());
}
