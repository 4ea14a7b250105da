//! Domain layer
//!
//! Entities, their validators and the rules shared between them. Nothing
//! in here performs I/O; callers load entities, call into this layer and
//! persist the result.
//!
//! Entities derive `Deserialize` only to rehydrate state this layer
//! serialized earlier. Deserialization trusts its input and skips the
//! validators; new entities are built through their `create` factories.

pub mod activity;
pub mod audit;
pub mod ids;
pub mod organization;
pub mod project;
pub mod resource;
pub(crate) mod rules;
pub mod shared;
pub mod user;
pub mod work_item;
pub mod workspace;

pub use rules::MAX_DESCRIPTION_LEN;
