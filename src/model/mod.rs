// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A workspace contains applications; each application owns an ordered list of documents that may
//! carry one attached file reference.

pub mod application;
pub mod workspace;

pub use application::{Application, Document, FileRef};
pub use workspace::{Cursor, Workspace};
