//! Page-session concerns outside the cursor.
//!
//! - `version`: one-time reload when a new build is deployed

pub mod version;

pub use version::{check_version, with_version_param, KeyValueStore, VersionCheck, VERSION_KEY};
