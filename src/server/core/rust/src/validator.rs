/* src/server/core/rust/src/validator.rs */

//! Default content validator and display-option decoder.

use h5p_engine::{
  ContentRecord, ContentValidator, DisplayOptions, DisplayOptionsProvider, EngineError,
  LibraryRecord,
};

/// Disabled-feature bits stored on content records.
pub const DISABLE_FRAME: u16 = 1;
pub const DISABLE_DOWNLOAD: u16 = 2;
pub const DISABLE_EMBED: u16 = 4;
pub const DISABLE_COPYRIGHT: u16 = 8;
pub const DISABLE_ABOUT: u16 = 16;

/// Checks that parameters are well-formed JSON and re-serializes them compactly.
/// Semantic filtering against library schemas is left to richer validators.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonContentValidator;

impl ContentValidator for JsonContentValidator {
  fn filter_parameters(
    &self,
    content: &ContentRecord,
    library: &LibraryRecord,
  ) -> h5p_engine::Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(&content.parameters).map_err(|e| {
      EngineError::Filter(format!("content {} ({}): {e}", content.id, library.identifier))
    })?;
    if !parsed.is_object() {
      return Err(EngineError::Filter(format!(
        "content {} parameters must be a JSON object",
        content.id
      )));
    }
    Ok(serde_json::to_string(&parsed)?)
  }

  fn copyright_semantics(&self) -> serde_json::Value {
    copyright_semantics()
  }
}

/// Field group the editor renders for per-asset copyright information.
pub fn copyright_semantics() -> serde_json::Value {
  serde_json::json!({
    "name": "copyright",
    "type": "group",
    "label": "Copyright information",
    "fields": [
      { "name": "title", "type": "text", "label": "Title", "placeholder": "La Gioconda", "optional": true },
      { "name": "author", "type": "text", "label": "Author", "placeholder": "Leonardo da Vinci", "optional": true },
      { "name": "year", "type": "text", "label": "Year(s)", "placeholder": "1503 - 1517", "optional": true },
      { "name": "source", "type": "text", "label": "Source", "placeholder": "http://en.wikipedia.org/wiki/Mona_Lisa", "optional": true, "regexp": { "pattern": "^http[s]?://.+", "modifiers": "i" } },
      {
        "name": "license",
        "type": "select",
        "label": "License",
        "default": "U",
        "options": [
          { "value": "U", "label": "Undisclosed" },
          { "value": "CC BY", "label": "Attribution" },
          { "value": "CC BY-SA", "label": "Attribution-ShareAlike" },
          { "value": "CC BY-ND", "label": "Attribution-NoDerivs" },
          { "value": "CC BY-NC", "label": "Attribution-NonCommercial" },
          { "value": "CC BY-NC-SA", "label": "Attribution-NonCommercial-ShareAlike" },
          { "value": "CC BY-NC-ND", "label": "Attribution-NonCommercial-NoDerivs" },
          { "value": "GNU GPL", "label": "General Public License" },
          { "value": "PD", "label": "Public Domain" },
          { "value": "ODC PDDL", "label": "Public Domain Dedication and Licence" },
          { "value": "CC PDM", "label": "Public Domain Mark" },
          { "value": "C", "label": "Copyright" }
        ]
      }
    ]
  })
}

/// Maps each disabled bit to a hidden frame element.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmaskDisplayOptions;

impl DisplayOptionsProvider for BitmaskDisplayOptions {
  fn display_options_for_edit(&self, disabled_features: u16) -> DisplayOptions {
    let shown = |bit: u16| disabled_features & bit == 0;
    DisplayOptions {
      frame: shown(DISABLE_FRAME),
      export: shown(DISABLE_DOWNLOAD),
      embed: shown(DISABLE_EMBED),
      copyright: shown(DISABLE_COPYRIGHT),
      icon: shown(DISABLE_ABOUT),
    }
  }
}

#[cfg(test)]
mod tests {
  use h5p_engine::LibraryIdentifier;

  use super::*;

  fn library() -> LibraryRecord {
    LibraryRecord {
      library_id: 1,
      identifier: LibraryIdentifier::new("H5P.Text", 1, 1),
      embed_types: Default::default(),
      supports_fullscreen: false,
      scripts: vec![],
      styles: vec![],
    }
  }

  fn content(params: &str) -> ContentRecord {
    ContentRecord { id: 8, parameters: params.into(), ..Default::default() }
  }

  #[test]
  fn filter_compacts_json() {
    let out = JsonContentValidator.filter_parameters(&content("{ \"text\" : \"hi\" }"), &library());
    assert_eq!(out.unwrap(), r#"{"text":"hi"}"#);
  }

  #[test]
  fn filter_rejects_invalid_json() {
    let err = JsonContentValidator.filter_parameters(&content("{oops"), &library()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("content 8"), "{msg}");
    assert!(msg.contains("H5P.Text 1.1"), "{msg}");
  }

  #[test]
  fn filter_rejects_non_object() {
    let err = JsonContentValidator.filter_parameters(&content("[1,2]"), &library()).unwrap_err();
    assert!(matches!(err, EngineError::Filter(_)));
  }

  #[test]
  fn copyright_semantics_shape() {
    let semantics = JsonContentValidator.copyright_semantics();
    assert_eq!(semantics["name"], "copyright");
    assert_eq!(semantics["fields"].as_array().map(Vec::len), Some(5));
  }

  #[test]
  fn nothing_disabled_shows_everything() {
    let opts = BitmaskDisplayOptions.display_options_for_edit(0);
    assert_eq!(
      opts,
      DisplayOptions { frame: true, export: true, embed: true, copyright: true, icon: true }
    );
  }

  #[test]
  fn disabled_bits_hide_matching_options() {
    let opts = BitmaskDisplayOptions.display_options_for_edit(DISABLE_DOWNLOAD | DISABLE_ABOUT);
    assert!(opts.frame);
    assert!(!opts.export);
    assert!(opts.embed);
    assert!(opts.copyright);
    assert!(!opts.icon);
  }
}
