//! Orders domain module.
//!
//! Orders are immutable values with a forward-only status lifecycle. They
//! reference their buyer by id and may own the pet being sold.

pub mod order;
pub mod price;

pub use order::{AdditionalRequests, NewOrder, Order, OrderStatus, Request};
pub use price::{Price, PriceRange};
