//! `petcode-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no UI, no storage):
//! the error model, identifiers, entity/identity traits, prices and the unique
//! list that every entity collection is built on.

pub mod entity;
pub mod error;
pub mod id;
pub mod price;
pub mod unique_list;
pub mod value_object;

pub use entity::{Entity, Identity};
pub use error::{DomainError, DomainResult};
pub use id::UniqueId;
pub use price::Price;
pub use unique_list::{ListChange, ListView, UniqueList};
pub use value_object::{ValueObject, require_non_blank};
