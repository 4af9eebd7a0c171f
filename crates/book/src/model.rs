use petcode_orders::Order;
use petcode_parties::{Buyer, Deliverer, PersonCategory, Supplier};
use petcode_pets::Pet;
use petcode_search::{CategoryPredicates, Matches, OrderPredicate, PetPredicate};

use crate::AddressBook;

/// An address book plus the filters the display layer currently applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    book: AddressBook,
    person_filters: CategoryPredicates,
    pet_filter: PetPredicate,
    order_filter: OrderPredicate,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model {
    /// Starts unfiltered.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            person_filters: CategoryPredicates::match_all(),
            pet_filter: PetPredicate::MatchAll,
            order_filter: OrderPredicate::MatchAll,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn person_filters(&self) -> &CategoryPredicates {
        &self.person_filters
    }

    pub fn pet_filter(&self) -> &PetPredicate {
        &self.pet_filter
    }

    pub fn order_filter(&self) -> &OrderPredicate {
        &self.order_filter
    }

    pub fn update_filtered_persons(&mut self, filters: CategoryPredicates) {
        self.person_filters = filters;
    }

    pub fn update_filtered_pets(&mut self, filter: PetPredicate) {
        self.pet_filter = filter;
    }

    pub fn update_filtered_orders(&mut self, filter: OrderPredicate) {
        self.order_filter = filter;
    }

    /// Drops every filter.
    pub fn show_all(&mut self) {
        self.person_filters = CategoryPredicates::match_all();
        self.pet_filter = PetPredicate::MatchAll;
        self.order_filter = OrderPredicate::MatchAll;
    }

    pub fn filtered_buyers(&self) -> Vec<Buyer> {
        let filter = self.person_filters.for_category(PersonCategory::Buyer);
        self.book
            .buyers()
            .with_items(|items| items.iter().filter(|b| filter.test(*b)).cloned().collect())
    }

    pub fn filtered_suppliers(&self) -> Vec<Supplier> {
        let filter = self.person_filters.for_category(PersonCategory::Supplier);
        self.book
            .suppliers()
            .with_items(|items| items.iter().filter(|s| filter.test(*s)).cloned().collect())
    }

    pub fn filtered_deliverers(&self) -> Vec<Deliverer> {
        let filter = self.person_filters.for_category(PersonCategory::Deliverer);
        self.book
            .deliverers()
            .with_items(|items| items.iter().filter(|d| filter.test(*d)).cloned().collect())
    }

    pub fn filtered_pets(&self) -> Vec<Pet> {
        self.book.pets().with_items(|items| {
            items
                .iter()
                .filter(|p| self.pet_filter.test(*p))
                .cloned()
                .collect()
        })
    }

    pub fn filtered_orders(&self) -> Vec<Order> {
        self.book.orders().with_items(|items| {
            items
                .iter()
                .filter(|o| self.order_filter.test(*o))
                .cloned()
                .collect()
        })
    }

    /// Number of persons passing the current filters, across all categories.
    pub fn filtered_person_count(&self) -> usize {
        self.filtered_buyers().len()
            + self.filtered_suppliers().len()
            + self.filtered_deliverers().len()
    }
}
