//! Storage and credential adapters used by the CLI frontend.

mod credential_files;
mod sqlite;

pub use credential_files::{CredentialFileSource, credentials_file_name};
pub use sqlite::SqliteStore;
