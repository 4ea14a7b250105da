//! Organization domain module

pub mod entity;
pub mod validator;

pub use entity::*;
pub use validator::*;
