/* src/server/core/rust/src/token.rs */

// Time-bucketed action tokens for editor AJAX calls.

use std::time::{SystemTime, UNIX_EPOCH};

use h5p_engine::TokenGenerator;
use sha2::{Digest, Sha256};

/// Tokens rotate every 12 hours.
const BUCKET_SECS: u64 = 43_200;
const TOKEN_HEX_LEN: usize = 10;

pub struct HashedTokenGenerator {
  secret: String,
}

impl HashedTokenGenerator {
  pub fn new(secret: impl Into<String>) -> Self {
    Self { secret: secret.into() }
  }

  fn now_secs() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
  }

  fn token_for_bucket(&self, action: &str, content_id: u32, bucket: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(self.secret.as_bytes());
    hasher.update(b"\0");
    hasher.update(action.as_bytes());
    hasher.update(b"\0");
    hasher.update(content_id.to_be_bytes());
    hasher.update(bucket.to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..TOKEN_HEX_LEN].to_string()
  }

  pub fn generate_at(&self, action: &str, content_id: u32, unix_secs: u64) -> String {
    self.token_for_bucket(action, content_id, unix_secs / BUCKET_SECS)
  }
}

impl TokenGenerator for HashedTokenGenerator {
  fn generate(&self, action: &str, content_id: u32) -> String {
    self.generate_at(action, content_id, Self::now_secs())
  }
}
