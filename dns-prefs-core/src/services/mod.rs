//! Business logic service layer

mod preferences_service;

pub use preferences_service::PreferencesService;
