// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A named applicant folder owning an ordered list of documents.
///
/// The name is fixed at creation; everything else about an application changes only through the
/// documents it owns. Document order is insertion order and drives tab/list order and
/// forward/backward traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: String,
    documents: Vec<Document>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), documents: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Vec<Document> {
        &mut self.documents
    }

    /// Index of the last document, clamped to 0 for an empty list.
    pub fn last_document_index(&self) -> usize {
        self.documents.len().saturating_sub(1)
    }
}

/// A named slot within an application that may hold one attached file reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    file: Option<FileRef>,
}

impl Document {
    /// Documents always start without a file; attach/detach happen through ops.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), file: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> Option<&FileRef> {
        self.file.as_ref()
    }

    pub fn set_file(&mut self, file: Option<FileRef>) {
        self.file = file;
    }
}

/// Opaque reference to a picked file.
///
/// The store never opens, parses, or validates the target; the path is carried verbatim for
/// display and for whatever an external collaborator wants to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    path: String,
}

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path component, shown in the detail pane and side panel.
    pub fn display_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }
}
