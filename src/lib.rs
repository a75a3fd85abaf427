// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dossier is a terminal-first tracker for applications and their document checklists.
//!
//! The crate is layered the same way the UI consumes it:
//!
//! - [`model`] holds the plain data: applications, documents, file attachments, and the
//!   selection cursor, all wrapped in a revisioned [`model::Workspace`].
//! - [`ops`] is the only way to mutate a workspace. Batches apply all-or-nothing against a
//!   revision check and report a coarse delta.
//! - [`query`] derives the current application/document and the navigation boundary predicates
//!   from a workspace snapshot.
//! - [`tui`] renders the interactive terminal frontend on top of the other three.

pub mod model;
pub mod ops;
pub mod query;
pub mod tui;
