/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod errors;
pub mod integration;
pub mod registry;
pub mod static_files;
pub mod token;
pub mod validator;

// Re-exports for ergonomic use
pub use config::{IntegrationConfig, load_config, parse_config};
pub use errors::H5pError;
pub use h5p_engine;
pub use integration::H5pIntegration;
pub use registry::{ContentStore, InMemoryContents, InMemoryLibraries, LibraryRegistry};
pub use static_files::FsAssetStore;
pub use token::HashedTokenGenerator;
pub use validator::{BitmaskDisplayOptions, JsonContentValidator, copyright_semantics};
