//! Model layer: application state

mod app;
mod effects;

pub use app::App;
pub use effects::ViewEffects;
