/* src/server/core/rust/src/config/tests/validation.rs */

use super::*;

#[test]
fn rejects_empty_site_url() {
  let err = parse_config("[site]\nurl = \"\"\n").unwrap_err();
  assert!(format!("{err:#}").contains("site.url must not be empty"));
}

#[test]
fn rejects_relative_base_path() {
  let err = parse_config("[site]\nbase_path = \"drupal\"\n").unwrap_err();
  assert!(format!("{err:#}").contains("must start with '/'"));
}

#[test]
fn rejects_empty_h5p_path() {
  let err = parse_config("[files]\nh5p_path = \" \"\n").unwrap_err();
  assert!(format!("{err:#}").contains("files.h5p_path"));
}

#[test]
fn rejects_malformed_toml() {
  let err = parse_config("[site\nurl = 1").unwrap_err();
  assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn whitespace_cache_buster_is_ignored() {
  let config = parse_config("[assets]\ncache_buster = \"  \"\n").unwrap();
  assert_eq!(config.cache_buster().suffix(), "");
}
