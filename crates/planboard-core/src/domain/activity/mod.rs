//! Project activity domain module
//!
//! Milestones and iterations, with a builder for each flavor.

pub mod builder;
pub mod entity;
pub mod validator;

pub use builder::ProjectActivityBuilder;
pub use entity::*;
pub use validator::*;
