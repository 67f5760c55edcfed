/* src/server/core/rust/src/config/tests/mod.rs */

use super::*;

mod validation;
