//! Predicate composition engine used by find and filter commands.

pub mod keyword;
pub mod predicate;

pub use keyword::KeywordSet;
pub use predicate::{CategoryPredicates, Matches, OrderPredicate, PersonPredicate, PetPredicate};
