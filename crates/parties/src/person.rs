use core::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use petcode_core::{DomainError, DomainResult, Entity, Identity, UniqueId};

use crate::values::{Address, Email, Location, Name, Phone, Tag};

/// Person category: the three kinds of contact the book tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonCategory {
    Buyer,
    Supplier,
    Deliverer,
}

impl core::fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            PersonCategory::Buyer => "Buyer",
            PersonCategory::Supplier => "Supplier",
            PersonCategory::Deliverer => "Deliverer",
        };
        f.write_str(label)
    }
}

impl core::str::FromStr for PersonCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buyer" => Ok(PersonCategory::Buyer),
            "supplier" => Ok(PersonCategory::Supplier),
            "deliverer" => Ok(PersonCategory::Deliverer),
            other => Err(DomainError::invalid_argument(format!(
                "person category must be buyer, supplier or deliverer, got {other:?}"
            ))),
        }
    }
}

/// Attributes common to every person category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    id: UniqueId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    location: Location,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl PersonDetails {
    /// Builds the details of a new person, minting a fresh id.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        location: Location,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            id: UniqueId::new(),
            name,
            phone,
            email,
            address,
            location,
            tags: tags.into_iter().collect(),
        }
    }

    /// Same details under an explicit id (restoring, or editing in place).
    pub fn with_id(mut self, id: UniqueId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &UniqueId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Duplicate detection: same name, phone and email.
    pub fn is_same_person(&self, other: &PersonDetails) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}

impl core::fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Location: {}",
            self.name, self.phone, self.email, self.address, self.location
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

/// Shared interface over the person categories.
pub trait Person {
    const CATEGORY: PersonCategory;

    fn details(&self) -> &PersonDetails;

    fn category(&self) -> PersonCategory {
        Self::CATEGORY
    }

    fn name(&self) -> &Name {
        self.details().name()
    }

    fn phone(&self) -> &Phone {
        self.details().phone()
    }

    fn email(&self) -> &Email {
        self.details().email()
    }

    fn address(&self) -> &Address {
        self.details().address()
    }

    fn location(&self) -> &Location {
        self.details().location()
    }

    fn tags(&self) -> &BTreeSet<Tag> {
        self.details().tags()
    }
}

macro_rules! impl_person {
    ($t:ty, $category:expr, $kind:literal) => {
        impl Person for $t {
            const CATEGORY: PersonCategory = $category;

            fn details(&self) -> &PersonDetails {
                &self.details
            }
        }

        impl Entity for $t {
            type Id = UniqueId;

            fn id(&self) -> &Self::Id {
                self.details.id()
            }
        }

        impl Identity for $t {
            const KIND: &'static str = $kind;

            fn is_same(&self, other: &Self) -> bool {
                self.details.is_same_person(&other.details)
            }
        }
    };
}

/// Adds `id` to `ids` unless present.
fn push_unique(ids: &mut Vec<UniqueId>, id: UniqueId, kind: &'static str) -> DomainResult<()> {
    if ids.contains(&id) {
        return Err(DomainError::duplicate(kind));
    }
    ids.push(id);
    Ok(())
}

fn remove_id(ids: &mut Vec<UniqueId>, id: &UniqueId, kind: &'static str) -> DomainResult<()> {
    let index = ids
        .iter()
        .position(|held| held == id)
        .ok_or(DomainError::not_found(kind))?;
    ids.remove(index);
    Ok(())
}

fn dedup_ids(ids: impl IntoIterator<Item = UniqueId>) -> Vec<UniqueId> {
    let mut out = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// A person who requests pets through orders.
///
/// Holds the ids of its orders as weak references; the orders themselves are
/// owned by the address book's order list and may have been removed since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BuyerRecord")]
pub struct Buyer {
    details: PersonDetails,
    order_ids: Vec<UniqueId>,
}

/// Stored form of a [`Buyer`]; loading goes through [`Buyer::new`].
#[derive(Deserialize)]
struct BuyerRecord {
    details: PersonDetails,
    #[serde(default)]
    order_ids: Vec<UniqueId>,
}

impl From<BuyerRecord> for Buyer {
    fn from(record: BuyerRecord) -> Self {
        Buyer::new(record.details, record.order_ids)
    }
}

impl Buyer {
    /// Repeated ids are kept once, at their first position.
    pub fn new(details: PersonDetails, order_ids: impl IntoIterator<Item = UniqueId>) -> Self {
        Self {
            details,
            order_ids: dedup_ids(order_ids),
        }
    }

    pub fn order_ids(&self) -> &[UniqueId] {
        &self.order_ids
    }

    pub fn order_count(&self) -> usize {
        self.order_ids.len()
    }

    pub fn has_order(&self, order_id: &UniqueId) -> bool {
        self.order_ids.contains(order_id)
    }

    pub fn add_order(&mut self, order_id: UniqueId) -> DomainResult<()> {
        push_unique(&mut self.order_ids, order_id, "order reference")
    }

    /// Adds every id not already held; returns how many were added.
    pub fn add_orders(&mut self, order_ids: impl IntoIterator<Item = UniqueId>) -> usize {
        order_ids
            .into_iter()
            .filter(|id| push_unique(&mut self.order_ids, *id, "order reference").is_ok())
            .count()
    }

    pub fn remove_order(&mut self, order_id: &UniqueId) -> DomainResult<()> {
        remove_id(&mut self.order_ids, order_id, "order reference")
    }

    /// Order load comparison: fewer orders sort first.
    pub fn cmp_by_order_count(&self, other: &Buyer) -> Ordering {
        self.order_ids.len().cmp(&other.order_ids.len())
    }

    pub fn with_details(mut self, details: PersonDetails) -> Self {
        self.details = details;
        self
    }
}

impl_person!(Buyer, PersonCategory::Buyer, "buyer");

impl core::fmt::Display for Buyer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}; Orders: {}", self.details, self.order_ids.len())
    }
}

/// A person who sells pets. Holds weak references to the pets on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SupplierRecord")]
pub struct Supplier {
    details: PersonDetails,
    pet_ids: Vec<UniqueId>,
}

#[derive(Deserialize)]
struct SupplierRecord {
    details: PersonDetails,
    #[serde(default)]
    pet_ids: Vec<UniqueId>,
}

impl From<SupplierRecord> for Supplier {
    fn from(record: SupplierRecord) -> Self {
        Supplier::new(record.details, record.pet_ids)
    }
}

impl Supplier {
    pub fn new(details: PersonDetails, pet_ids: impl IntoIterator<Item = UniqueId>) -> Self {
        Self {
            details,
            pet_ids: dedup_ids(pet_ids),
        }
    }

    pub fn pet_ids(&self) -> &[UniqueId] {
        &self.pet_ids
    }

    pub fn has_pet(&self, pet_id: &UniqueId) -> bool {
        self.pet_ids.contains(pet_id)
    }

    pub fn add_pet(&mut self, pet_id: UniqueId) -> DomainResult<()> {
        push_unique(&mut self.pet_ids, pet_id, "pet reference")
    }

    pub fn add_pets(&mut self, pet_ids: impl IntoIterator<Item = UniqueId>) -> usize {
        pet_ids
            .into_iter()
            .filter(|id| push_unique(&mut self.pet_ids, *id, "pet reference").is_ok())
            .count()
    }

    pub fn remove_pet(&mut self, pet_id: &UniqueId) -> DomainResult<()> {
        remove_id(&mut self.pet_ids, pet_id, "pet reference")
    }

    pub fn with_details(mut self, details: PersonDetails) -> Self {
        self.details = details;
        self
    }
}

impl_person!(Supplier, PersonCategory::Supplier, "supplier");

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}; Pets: {}", self.details, self.pet_ids.len())
    }
}

/// A person who delivers pets to buyers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverer {
    details: PersonDetails,
}

impl Deliverer {
    pub fn new(details: PersonDetails) -> Self {
        Self { details }
    }

    pub fn with_details(mut self, details: PersonDetails) -> Self {
        self.details = details;
        self
    }
}

impl_person!(Deliverer, PersonCategory::Deliverer, "deliverer");

impl core::fmt::Display for Deliverer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.details, f)
    }
}
