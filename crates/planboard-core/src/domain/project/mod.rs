//! Project domain module
//!
//! Projects carry the scheduling fields and index the work items and
//! activities created inside them.

pub mod entity;
pub mod validator;

pub use entity::*;
pub use validator::*;
