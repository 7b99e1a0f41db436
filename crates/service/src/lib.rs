//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (defaults, existence and uniqueness checks)
//!   from data access.
//! - One validation boundary: inbound payloads validate into drafts before
//!   any repository call.
//! - Provides clear error types and documented interfaces.

pub mod crud;
pub mod errors;
pub mod patch;

pub mod property;
pub mod realtor;
pub mod user;
