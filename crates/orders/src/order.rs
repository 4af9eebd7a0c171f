use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use petcode_core::{
    DomainError, DomainResult, Entity, Identity, UniqueId, ValueObject, require_non_blank,
    text_value_object,
};
use petcode_pets::Pet;

use crate::price::{Price, PriceRange};

/// Order status lifecycle.
///
/// Variants are declared in lifecycle order, so `Ord` compares progress.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Negotiating,
    Delivering,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Negotiating,
        OrderStatus::Delivering,
        OrderStatus::Completed,
    ];

    /// The following state, `None` once completed.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Negotiating),
            OrderStatus::Negotiating => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    /// Only forward moves are allowed; skipping states is fine.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        target > self
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Negotiating => "Negotiating",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "order status must be one of pending, negotiating, delivering, completed; got {wanted:?}"
                ))
            })
    }
}

fn validate_request(value: &str) -> DomainResult<()> {
    require_non_blank("request", value)
}

text_value_object!(
    /// What the buyer is asking for, in their own words.
    Request,
    validate_request
);

/// Extra wishes attached to an order, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AdditionalRequests(Vec<String>);

impl AdditionalRequests {
    /// Every entry is trimmed and must be non-blank.
    pub fn new<I, S>(requests: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for request in requests {
            let request = request.as_ref().trim();
            require_non_blank("additional request", request)?;
            out.push(request.to_string());
        }
        Ok(Self(out))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Every whitespace-separated word across all entries.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|r| r.split_whitespace())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for AdditionalRequests {}

impl TryFrom<Vec<String>> for AdditionalRequests {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdditionalRequests> for Vec<String> {
    fn from(value: AdditionalRequests) -> Self {
        value.0
    }
}

impl core::fmt::Display for AdditionalRequests {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, request) in self.0.iter().enumerate() {
            write!(f, "{}. {}", i + 1, request)?;
            if i + 1 < self.0.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Input for [`Order::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Weak reference to the buyer placing the order.
    pub buyer: UniqueId,
    pub pet: Option<Pet>,
    pub requested_price_range: PriceRange,
    pub request: Request,
    pub additional_requests: AdditionalRequests,
    pub by_date: NaiveDate,
    pub settled_price: Option<Price>,
    /// Defaults to `Pending`.
    pub status: Option<OrderStatus>,
}

/// An order placed by a buyer.
///
/// Orders are immutable values: every change produces a new `Order` that
/// keeps the id (so buyers' references still resolve) and copies every field
/// but the changed one.
///
/// Identity for uniqueness is the full tuple of buyer, requested price range,
/// request, additional requests, by-date, settled price and status. The id and
/// the attached pet are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: UniqueId,
    buyer: UniqueId,
    pet: Option<Pet>,
    requested_price_range: PriceRange,
    request: Request,
    additional_requests: AdditionalRequests,
    by_date: NaiveDate,
    settled_price: Option<Price>,
    status: OrderStatus,
}

impl Order {
    /// Any status is accepted here; only later transitions are checked.
    pub fn new(input: NewOrder) -> Self {
        Self {
            id: UniqueId::new(),
            buyer: input.buyer,
            pet: input.pet,
            requested_price_range: input.requested_price_range,
            request: input.request,
            additional_requests: input.additional_requests,
            by_date: input.by_date,
            settled_price: input.settled_price,
            status: input.status.unwrap_or_default(),
        }
    }

    pub fn buyer(&self) -> &UniqueId {
        &self.buyer
    }

    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    pub fn requested_price_range(&self) -> &PriceRange {
        &self.requested_price_range
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn additional_requests(&self) -> &AdditionalRequests {
        &self.additional_requests
    }

    pub fn by_date(&self) -> NaiveDate {
        self.by_date
    }

    pub fn settled_price(&self) -> Option<Price> {
        self.settled_price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Copy with a later status.
    pub fn with_status(&self, status: OrderStatus) -> DomainResult<Order> {
        if !self.status.can_transition_to(status) {
            return Err(DomainError::invalid_argument(format!(
                "order status cannot move from {} to {}",
                self.status, status
            )));
        }
        Ok(Order {
            status,
            ..self.clone()
        })
    }

    /// Copy moved to the next status.
    pub fn advance(&self) -> DomainResult<Order> {
        let next = self
            .status
            .next()
            .ok_or_else(|| DomainError::invalid_argument("completed orders cannot advance"))?;
        self.with_status(next)
    }

    pub fn with_pet(&self, pet: Pet) -> Order {
        Order {
            pet: Some(pet),
            ..self.clone()
        }
    }

    pub fn with_requested_price_range(&self, range: PriceRange) -> Order {
        Order {
            requested_price_range: range,
            ..self.clone()
        }
    }

    pub fn with_settled_price(&self, price: Price) -> Order {
        Order {
            settled_price: Some(price),
            ..self.clone()
        }
    }

    pub fn with_id(mut self, id: UniqueId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Order {
    type Id = UniqueId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Identity for Order {
    const KIND: &'static str = "order";

    fn is_same(&self, other: &Self) -> bool {
        self.buyer == other.buyer
            && self.requested_price_range == other.requested_price_range
            && self.request == other.request
            && self.additional_requests == other.additional_requests
            && self.by_date == other.by_date
            && self.settled_price == other.settled_price
            && self.status == other.status
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Requested price range: {}", self.requested_price_range)?;
        writeln!(f, "Process order by: {}", self.by_date.format("%Y-%m-%d"))?;
        writeln!(f, "=== Request ===")?;
        writeln!(f, "{}", self.request)?;
        writeln!(f, "=== Additional Requests ===")?;
        writeln!(f, "{}", self.additional_requests)?;
        match self.settled_price {
            Some(price) => writeln!(f, "Settled price: {price}")?,
            None => writeln!(f, "Settled price: not settled")?,
        }
        write!(f, "Status: {}", self.status)
    }
}
