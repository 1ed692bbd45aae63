//! Type definitions module

mod model;
mod section;
mod settings;

pub use model::PreferencesModel;
pub use section::{EditAffordance, IndexPath, Item, Section, StructuralChange};
pub use settings::DnsSettings;
