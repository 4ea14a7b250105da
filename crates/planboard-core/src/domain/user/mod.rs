//! User domain module
//!
//! Identity entity and its property validator.

pub mod entity;
pub mod validator;

pub use entity::*;
pub use validator::*;
