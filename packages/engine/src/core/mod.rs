//! Core utilities shared by the domain and simulation layers

// Logging macros must be declared before any module that uses them.
#[macro_use]
pub mod logging;
pub mod random;
pub mod vec2;

pub use vec2::Vec2;
