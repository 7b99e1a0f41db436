//! SeaORM entity definitions for the three persisted kinds, plus the
//! database connection helper. Business rules and wire shapes live in the
//! `service` crate; this crate only knows the storage schema.

pub mod db;
pub mod property;
pub mod realtor;
pub mod user;
