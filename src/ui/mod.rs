//! World-space HUD components (drawn at entity positions, shaken with the
//! world). Screen-space overlays live in `gui`.

mod health_bar;

pub use health_bar::{HealthBar, HealthBarStyle};
