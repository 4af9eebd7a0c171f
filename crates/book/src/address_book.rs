//! The address book aggregate: one unique list per entity type, plus the
//! weak-reference plumbing between them.
//!
//! Cross-references are ids resolved by lookup. Nothing cascades: removing an
//! order leaves its id on the buyer, removing a buyer leaves its orders in
//! place. Resolution skips ids that no longer resolve.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use petcode_core::{DomainError, DomainResult, Entity, ListView, UniqueList};
use petcode_orders::Order;
use petcode_parties::{Buyer, Deliverer, Supplier};
use petcode_pets::Pet;

/// Plain-data copy of every list, for the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookSnapshot {
    #[serde(default)]
    pub buyers: Vec<Buyer>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub deliverers: Vec<Deliverer>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    buyers: UniqueList<Buyer>,
    suppliers: UniqueList<Supplier>,
    deliverers: UniqueList<Deliverer>,
    pets: UniqueList<Pet>,
    orders: UniqueList<Order>,
}

macro_rules! list_ops {
    (
        $field:ident: $t:ty,
        has: $has:ident,
        add: $add:ident,
        set: $set:ident,
        remove: $remove:ident,
        replace_all: $replace_all:ident,
        view: $view:ident
    ) => {
        pub fn $has(&self, item: &$t) -> bool {
            self.$field.contains(item)
        }

        pub fn $add(&mut self, item: $t) -> DomainResult<()> {
            self.$field.add(item)
        }

        pub fn $set(&mut self, target: &$t, edited: $t) -> DomainResult<()> {
            self.$field.set_one(target, edited)
        }

        pub fn $remove(&mut self, item: &$t) -> DomainResult<$t> {
            self.$field.remove(item)
        }

        pub fn $replace_all(&mut self, items: Vec<$t>) -> DomainResult<()> {
            self.$field.set_all(items)
        }

        pub fn $view(&self) -> ListView<$t> {
            self.$field.as_view()
        }
    };
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    list_ops!(buyers: Buyer,
        has: has_buyer, add: add_buyer, set: set_buyer, remove: remove_buyer,
        replace_all: set_buyers, view: buyers);

    list_ops!(suppliers: Supplier,
        has: has_supplier, add: add_supplier, set: set_supplier, remove: remove_supplier,
        replace_all: set_suppliers, view: suppliers);

    list_ops!(deliverers: Deliverer,
        has: has_deliverer, add: add_deliverer, set: set_deliverer, remove: remove_deliverer,
        replace_all: set_deliverers, view: deliverers);

    list_ops!(pets: Pet,
        has: has_pet, add: add_pet, set: set_pet, remove: remove_pet,
        replace_all: set_pets, view: pets);

    list_ops!(orders: Order,
        has: has_order, add: add_order, set: set_order, remove: remove_order,
        replace_all: set_orders, view: orders);

    /// Replaces this book's contents with a copy of `other`'s.
    ///
    /// Each list keeps its storage, so views and observers handed out
    /// earlier see the new contents.
    pub fn reset_data(&mut self, other: &AddressBook) -> DomainResult<()> {
        self.buyers.set_all_from(&other.buyers)?;
        self.suppliers.set_all_from(&other.suppliers)?;
        self.deliverers.set_all_from(&other.deliverers)?;
        self.pets.set_all_from(&other.pets)?;
        self.orders.set_all_from(&other.orders)
    }

    /// Adds `order` and registers its id on the buyer it names.
    ///
    /// The two steps are not atomic: if registration fails the order stays
    /// in the order list without a back-reference. A buyer that still holds
    /// the id (the order was removed and is attached again) is left as is.
    pub fn attach_order(&mut self, order: Order) -> DomainResult<()> {
        let buyer = self
            .buyers
            .get_by_id(order.buyer())
            .ok_or(DomainError::not_found("buyer"))?;

        let order_id = *order.id();
        self.orders.add(order)?;

        if buyer.has_order(&order_id) {
            debug!(%order_id, "buyer already references order");
            return Ok(());
        }
        let mut edited = buyer.clone();
        if let Err(err) = edited.add_order(order_id) {
            warn!(%order_id, error = %err, "order added but not registered on buyer");
            return Err(err);
        }
        self.buyers.set_one(&buyer, edited)
    }

    /// Adds `pet` and registers its id on its supplier, if it names one.
    ///
    /// Same non-atomic contract as [`attach_order`](Self::attach_order).
    pub fn attach_pet(&mut self, pet: Pet) -> DomainResult<()> {
        let supplier = match pet.supplier() {
            Some(id) => Some(
                self.suppliers
                    .get_by_id(id)
                    .ok_or(DomainError::not_found("supplier"))?,
            ),
            None => None,
        };

        let pet_id = *pet.id();
        self.pets.add(pet)?;

        if let Some(supplier) = supplier.filter(|s| !s.has_pet(&pet_id)) {
            let mut edited = supplier.clone();
            if let Err(err) = edited.add_pet(pet_id) {
                warn!(%pet_id, error = %err, "pet added but not registered on supplier");
                return Err(err);
            }
            self.suppliers.set_one(&supplier, edited)?;
        }
        Ok(())
    }

    /// The buyer's orders that still exist, in the buyer's order.
    pub fn orders_of(&self, buyer: &Buyer) -> Vec<Order> {
        buyer
            .order_ids()
            .iter()
            .filter_map(|id| {
                let order = self.orders.get_by_id(id);
                if order.is_none() {
                    warn!(order_id = %id, buyer_id = %buyer.id(), "dangling order reference");
                }
                order
            })
            .collect()
    }

    /// The supplier's pets that still exist.
    pub fn pets_of(&self, supplier: &Supplier) -> Vec<Pet> {
        supplier
            .pet_ids()
            .iter()
            .filter_map(|id| {
                let pet = self.pets.get_by_id(id);
                if pet.is_none() {
                    warn!(pet_id = %id, supplier_id = %supplier.id(), "dangling pet reference");
                }
                pet
            })
            .collect()
    }

    pub fn buyer_of(&self, order: &Order) -> Option<Buyer> {
        self.buyers.get_by_id(order.buyer())
    }

    pub fn supplier_of(&self, pet: &Pet) -> Option<Supplier> {
        pet.supplier().and_then(|id| self.suppliers.get_by_id(id))
    }

    /// Reorders buyers by order count, fewest first. Ties keep their order.
    pub fn sort_buyers_by_order_count(&mut self) {
        self.buyers.sort_by(|a, b| a.cmp_by_order_count(b));
    }

    pub fn snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot {
            buyers: self.buyers.to_vec(),
            suppliers: self.suppliers.to_vec(),
            deliverers: self.deliverers.to_vec(),
            pets: self.pets.to_vec(),
            orders: self.orders.to_vec(),
        }
    }

    /// Rebuilds a book from a snapshot, re-checking uniqueness of every list.
    pub fn restore(snapshot: AddressBookSnapshot) -> DomainResult<Self> {
        let mut book = Self::new();
        book.buyers.set_all(snapshot.buyers)?;
        book.suppliers.set_all(snapshot.suppliers)?;
        book.deliverers.set_all(snapshot.deliverers)?;
        book.pets.set_all(snapshot.pets)?;
        book.orders.set_all(snapshot.orders)?;

        debug!(
            buyers = book.buyers.len(),
            suppliers = book.suppliers.len(),
            deliverers = book.deliverers.len(),
            pets = book.pets.len(),
            orders = book.orders.len(),
            "address book restored"
        );
        Ok(book)
    }
}
