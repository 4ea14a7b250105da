//! Resource domain module
//!
//! Resources are links or attachments held by an organization, workspace or
//! project. The owner is recorded as a [`ResourceOwnerRef`] and the holding
//! aggregates implement [`ResourceOwner`].

pub mod entity;
pub mod owner;
pub mod validator;

pub use entity::*;
pub use owner::ResourceOwner;
pub use validator::*;
