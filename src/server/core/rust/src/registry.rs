/* src/server/core/rust/src/registry.rs */

//! Storage collaborators and their in-memory implementations.

use std::collections::{BTreeMap, HashMap};

use h5p_engine::{ContentRecord, LibraryIdentifier, LibraryLookup, LibraryRecord};

/// Library registry: identifier lookup plus record reads by id.
pub trait LibraryRegistry: LibraryLookup {
  fn load(&self, library_id: u32) -> Option<LibraryRecord>;
}

pub trait ContentStore: Send + Sync {
  fn load(&self, content_id: u32) -> Option<ContentRecord>;
}

#[derive(Debug, Default)]
pub struct InMemoryLibraries {
  by_id: BTreeMap<u32, LibraryRecord>,
  by_identifier: HashMap<LibraryIdentifier, u32>,
}

impl InMemoryLibraries {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces any library with the same id or identifier.
  pub fn insert(&mut self, record: LibraryRecord) {
    if let Some(old) = self.by_id.remove(&record.library_id) {
      self.by_identifier.remove(&old.identifier);
    }
    if let Some(old_id) = self.by_identifier.insert(record.identifier.clone(), record.library_id) {
      self.by_id.remove(&old_id);
    }
    self.by_id.insert(record.library_id, record);
  }

  pub fn with(mut self, record: LibraryRecord) -> Self {
    self.insert(record);
    self
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }
}

impl LibraryLookup for InMemoryLibraries {
  fn library_id(&self, identifier: &LibraryIdentifier) -> Option<u32> {
    self.by_identifier.get(identifier).copied()
  }
}

impl LibraryRegistry for InMemoryLibraries {
  fn load(&self, library_id: u32) -> Option<LibraryRecord> {
    self.by_id.get(&library_id).cloned()
  }
}

#[derive(Debug, Default)]
pub struct InMemoryContents {
  by_id: BTreeMap<u32, ContentRecord>,
}

impl InMemoryContents {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, record: ContentRecord) {
    self.by_id.insert(record.id, record);
  }

  pub fn with(mut self, record: ContentRecord) -> Self {
    self.insert(record);
    self
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }
}

impl ContentStore for InMemoryContents {
  fn load(&self, content_id: u32) -> Option<ContentRecord> {
    self.by_id.get(&content_id).cloned()
  }
}
