/* src/server/engine/rust/src/error.rs */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
  /// Library string does not end in `<space><major>.<minor>`.
  #[error("malformed library identifier: {0:?}")]
  MalformedIdentifier(String),

  /// The content validator rejected or failed to filter the parameters.
  #[error("parameter filtering failed: {0}")]
  Filter(String),

  #[error("payload serialization failed: {0}")]
  Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn malformed_identifier_message_quotes_input() {
    let err = EngineError::MalformedIdentifier("H5P.Foo".into());
    assert_eq!(err.to_string(), r#"malformed library identifier: "H5P.Foo""#);
  }

  #[test]
  fn filter_message() {
    let err = EngineError::Filter("bad semantics".into());
    assert_eq!(err.to_string(), "parameter filtering failed: bad semantics");
  }
}
