//! DNS Preferences Core Library
//!
//! Provides the state-synchronization core behind a sectioned DNS
//! preferences list, including:
//! - Preferences data model (blocking flags + custom DNS server list)
//! - List projection engine (Preferences Service)
//! - IP address input validation
//!
//! This library is designed to be platform-independent: it never constructs
//! UI widgets, performs no I/O and resolves no DNS. Presentation layers
//! consume the query surface and receive structural change descriptions
//! through injected sink traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod validator;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{PrefsError, PrefsResult};
pub use services::PreferencesService;
pub use traits::{PreferencesDelegate, StructuralChangeSink};
pub use types::{
    DnsSettings, EditAffordance, IndexPath, Item, PreferencesModel, Section, StructuralChange,
};
