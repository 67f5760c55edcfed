/* src/server/engine/rust/src/library.rs */

//! Library identifier parsing and resolution.
//!
//! A library string looks like `H5P.MultiChoice 1.9`: everything before the
//! last space is the machine name, the final token is `<major>.<minor>`.
//! The match is greedy on the name, so `Foo 1.2 3.4` parses as machine name
//! `Foo 1.2` at version 3.4. Names that end in a version-shaped token cannot
//! be told apart from the version suffix.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{EngineError, Result};

fn identifier_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^(.+)\s(\d+)\.(\d+)$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryIdentifier {
  pub machine_name: String,
  pub major_version: u32,
  pub minor_version: u32,
}

impl LibraryIdentifier {
  pub fn new(machine_name: impl Into<String>, major_version: u32, minor_version: u32) -> Self {
    Self { machine_name: machine_name.into(), major_version, minor_version }
  }

  /// Parse `"<machineName> <major>.<minor>"` without touching the registry.
  pub fn parse(input: &str) -> Result<Self> {
    let malformed = || EngineError::MalformedIdentifier(input.to_string());
    let caps = identifier_re().captures(input).ok_or_else(malformed)?;
    let machine_name = caps[1].to_string();
    // Digit runs too long for u32 are rejected rather than truncated
    let major_version = caps[2].parse().map_err(|_| malformed())?;
    let minor_version = caps[3].parse().map_err(|_| malformed())?;
    Ok(Self { machine_name, major_version, minor_version })
  }

  /// Folder name used for library assets on disk, e.g. `H5P.MultiChoice-1.9`.
  pub fn folder_name(&self) -> String {
    format!("{}-{}.{}", self.machine_name, self.major_version, self.minor_version)
  }
}

impl fmt::Display for LibraryIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}.{}", self.machine_name, self.major_version, self.minor_version)
  }
}

/// Read-only lookup into the persisted library registry.
pub trait LibraryLookup: Send + Sync {
  /// Numeric id of the library, or `None` when it is not installed.
  fn library_id(&self, identifier: &LibraryIdentifier) -> Option<u32>;
}

/// Parsed identifier plus the outcome of the registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLibrary {
  #[serde(flatten)]
  pub identifier: LibraryIdentifier,
  pub library_id: Option<u32>,
}

impl ResolvedLibrary {
  pub fn is_found(&self) -> bool {
    self.library_id.is_some()
  }
}

/// Parse a library string and look up its numeric id.
/// A missing library is reported as `library_id: None`, not as an error.
pub fn resolve<L: LibraryLookup + ?Sized>(input: &str, lookup: &L) -> Result<ResolvedLibrary> {
  let identifier = LibraryIdentifier::parse(input)?;
  let library_id = lookup.library_id(&identifier);
  Ok(ResolvedLibrary { identifier, library_id })
}

/// Shortcut for callers that only need the id.
pub fn resolve_id<L: LibraryLookup + ?Sized>(input: &str, lookup: &L) -> Result<Option<u32>> {
  resolve(input, lookup).map(|r| r.library_id)
}

/// A stored library as read from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRecord {
  pub library_id: u32,
  pub identifier: LibraryIdentifier,
  pub embed_types: BTreeSet<String>,
  pub supports_fullscreen: bool,
  /// Preloaded scripts, relative to the library folder.
  pub scripts: Vec<String>,
  /// Preloaded styles, relative to the library folder.
  pub styles: Vec<String>,
}

impl LibraryRecord {
  /// Registries store embed types as `"div, iframe"`.
  pub fn parse_embed_types(raw: &str) -> BTreeSet<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
  }

  /// Content can be rendered inline in a `<div>` unless the library demands an iframe.
  pub fn is_div_embeddable(&self) -> bool {
    !self.embed_types.contains("iframe")
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  struct MapLookup(HashMap<LibraryIdentifier, u32>);

  impl LibraryLookup for MapLookup {
    fn library_id(&self, identifier: &LibraryIdentifier) -> Option<u32> {
      self.0.get(identifier).copied()
    }
  }

  fn lookup() -> MapLookup {
    let mut map = HashMap::new();
    map.insert(LibraryIdentifier::new("H5P.MultiChoice", 1, 9), 12);
    MapLookup(map)
  }

  fn record(embed_types: &str) -> LibraryRecord {
    LibraryRecord {
      library_id: 1,
      identifier: LibraryIdentifier::new("H5P.Foo", 1, 0),
      embed_types: LibraryRecord::parse_embed_types(embed_types),
      supports_fullscreen: false,
      scripts: vec![],
      styles: vec![],
    }
  }

  #[test]
  fn parse_reproduces_fields() {
    let id = LibraryIdentifier::parse("H5P.MultiChoice 1.9").unwrap();
    assert_eq!(id.machine_name, "H5P.MultiChoice");
    assert_eq!(id.major_version, 1);
    assert_eq!(id.minor_version, 9);
  }

  #[test]
  fn parse_keeps_internal_whitespace() {
    let id = LibraryIdentifier::parse("My Fancy Lib 10.0").unwrap();
    assert_eq!(id.machine_name, "My Fancy Lib");
    assert_eq!(id.major_version, 10);
    assert_eq!(id.minor_version, 0);
  }

  #[test]
  fn parse_greedy_on_version_shaped_name() {
    let id = LibraryIdentifier::parse("Foo 1.2 3.4").unwrap();
    assert_eq!(id.machine_name, "Foo 1.2");
    assert_eq!((id.major_version, id.minor_version), (3, 4));
  }

  #[test]
  fn parse_rejects_malformed() {
    for input in ["", "H5P.Foo", "H5P.Foo 1", "H5P.Foo 1.", "H5P.Foo 1.2 ", " 1.2", "H5P.Foo v1.2"] {
      let err = LibraryIdentifier::parse(input).unwrap_err();
      assert!(matches!(err, EngineError::MalformedIdentifier(_)), "input {input:?}");
    }
  }

  #[test]
  fn parse_rejects_overflowing_version() {
    let err = LibraryIdentifier::parse("H5P.Foo 99999999999.1").unwrap_err();
    assert!(matches!(err, EngineError::MalformedIdentifier(_)));
  }

  #[test]
  fn display_and_folder_name() {
    let id = LibraryIdentifier::new("H5P.Blanks", 1, 12);
    assert_eq!(id.to_string(), "H5P.Blanks 1.12");
    assert_eq!(id.folder_name(), "H5P.Blanks-1.12");
  }

  #[test]
  fn resolve_found() {
    let resolved = resolve("H5P.MultiChoice 1.9", &lookup()).unwrap();
    assert!(resolved.is_found());
    assert_eq!(resolved.library_id, Some(12));
    assert_eq!(resolve_id("H5P.MultiChoice 1.9", &lookup()).unwrap(), Some(12));
  }

  #[test]
  fn resolve_not_found_is_not_an_error() {
    let resolved = resolve("H5P.MultiChoice 2.0", &lookup()).unwrap();
    assert!(!resolved.is_found());
    assert_eq!(resolved.identifier.major_version, 2);
  }

  #[test]
  fn resolve_malformed_skips_lookup() {
    assert!(resolve("H5P.MultiChoice", &lookup()).is_err());
  }

  #[test]
  fn resolved_serializes_flat() {
    let resolved = resolve("H5P.MultiChoice 1.9", &lookup()).unwrap();
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "machineName": "H5P.MultiChoice",
        "majorVersion": 1,
        "minorVersion": 9,
        "libraryId": 12
      })
    );
  }

  #[test]
  fn embed_types_parsing() {
    let types = LibraryRecord::parse_embed_types("div, iframe,,");
    assert_eq!(types.len(), 2);
    assert!(types.contains("div"));
    assert!(types.contains("iframe"));
  }

  #[test]
  fn div_embeddable() {
    assert!(!record("iframe").is_div_embeddable());
    assert!(!record("div, iframe").is_div_embeddable());
    assert!(record("div").is_div_embeddable());
    assert!(record("").is_div_embeddable());
  }
}
