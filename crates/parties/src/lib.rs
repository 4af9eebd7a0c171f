//! People domain module: buyers, suppliers and deliverers.
//!
//! Every category shares [`PersonDetails`]; category-specific data (a buyer's
//! order ids, a supplier's pet ids) lives only on the matching variant.

pub mod person;
pub mod values;

pub use person::{Buyer, Deliverer, Person, PersonCategory, PersonDetails, Supplier};
pub use values::{Address, Email, Location, Name, Phone, Tag};
