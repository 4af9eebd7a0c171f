//! Predicates as plain tagged values.
//!
//! Every predicate is data (a constant or a keyword match over one field), so
//! two commands carrying predicates compare structurally with `==`. Testing
//! an entity goes through [`Matches`] and never mutates it.

use std::collections::BTreeSet;

use petcode_orders::{Order, OrderStatus, PriceRange};
use petcode_parties::{Person, PersonCategory};
use petcode_pets::Pet;

use crate::keyword::KeywordSet;

/// A boolean test over one entity type.
pub trait Matches<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

/// Predicate over any person category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonPredicate {
    /// Constant true.
    MatchAll,
    /// Constant false.
    MatchNone,
    /// A word of the name equals a keyword.
    Name(KeywordSet),
    Phone(KeywordSet),
    Email(KeywordSet),
    /// A word of the address equals a keyword.
    Address(KeywordSet),
    /// The whole location equals a keyword.
    Location(KeywordSet),
    /// Some tag equals a keyword.
    Tag(KeywordSet),
    /// Conjunction; empty means true.
    All(Vec<PersonPredicate>),
}

impl<P: Person> Matches<P> for PersonPredicate {
    fn test(&self, person: &P) -> bool {
        match self {
            PersonPredicate::MatchAll => true,
            PersonPredicate::MatchNone => false,
            PersonPredicate::Name(k) => k.matches_any_word(person.name().words()),
            PersonPredicate::Phone(k) => k.matches_exact(person.phone().as_str()),
            PersonPredicate::Email(k) => k.matches_exact(person.email().as_str()),
            PersonPredicate::Address(k) => {
                k.matches_any_word(person.address().as_str().split_whitespace())
            }
            PersonPredicate::Location(k) => k.matches_exact(person.location().as_str()),
            PersonPredicate::Tag(k) => person.tags().iter().any(|t| k.matches_exact(t.as_str())),
            PersonPredicate::All(parts) => parts.iter().all(|p| p.test(person)),
        }
    }
}

/// Predicate over pets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetPredicate {
    MatchAll,
    MatchNone,
    Name(KeywordSet),
    /// The species' words intersect the keywords.
    Species(KeywordSet),
    Color(KeywordSet),
    ColorPattern(KeywordSet),
    Vaccinated(bool),
    /// The asking price lies inside the given bounds. Unpriced pets fail.
    Price(PriceRange),
    All(Vec<PetPredicate>),
}

impl Matches<Pet> for PetPredicate {
    fn test(&self, pet: &Pet) -> bool {
        match self {
            PetPredicate::MatchAll => true,
            PetPredicate::MatchNone => false,
            PetPredicate::Name(k) => k.matches_any_word(pet.name().words()),
            PetPredicate::Species(k) => k.matches_any_word(pet.species().words()),
            PetPredicate::Color(k) => k.matches_exact(pet.color().as_str()),
            PetPredicate::ColorPattern(k) => k.matches_exact(pet.color_pattern().as_str()),
            PetPredicate::Vaccinated(wanted) => pet.is_vaccinated() == *wanted,
            PetPredicate::Price(bounds) => pet.price().is_some_and(|p| bounds.contains(p)),
            PetPredicate::All(parts) => parts.iter().all(|p| p.test(pet)),
        }
    }
}

/// Predicate over orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderPredicate {
    MatchAll,
    MatchNone,
    /// Status is one of the listed states.
    Status(BTreeSet<OrderStatus>),
    /// A word of the additional requests equals a keyword.
    AdditionalRequest(KeywordSet),
    /// The requested range lies inside the given bounds.
    PriceRange(PriceRange),
    All(Vec<OrderPredicate>),
}

impl Matches<Order> for OrderPredicate {
    fn test(&self, order: &Order) -> bool {
        match self {
            OrderPredicate::MatchAll => true,
            OrderPredicate::MatchNone => false,
            OrderPredicate::Status(states) => states.contains(&order.status()),
            OrderPredicate::AdditionalRequest(k) => {
                k.matches_any_word(order.additional_requests().words())
            }
            OrderPredicate::PriceRange(bounds) => order.requested_price_range().is_within(bounds),
            OrderPredicate::All(parts) => parts.iter().all(|p| p.test(order)),
        }
    }
}

/// The buyer/supplier/deliverer predicate triad carried by find and filter
/// commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPredicates {
    pub buyer: PersonPredicate,
    pub supplier: PersonPredicate,
    pub deliverer: PersonPredicate,
}

impl CategoryPredicates {
    fn uniform(predicate: PersonPredicate) -> Self {
        Self {
            buyer: predicate.clone(),
            supplier: predicate.clone(),
            deliverer: predicate,
        }
    }

    /// Everything passes.
    pub fn match_all() -> Self {
        Self::uniform(PersonPredicate::MatchAll)
    }

    /// Find semantics: only `category` can produce results, the other two
    /// categories are forced to constant false.
    pub fn find(category: PersonCategory, predicate: PersonPredicate) -> Self {
        Self::uniform(PersonPredicate::MatchNone).with(category, predicate)
    }

    /// Filter semantics: `category` is narrowed, the other two pass through
    /// unchanged (constant true).
    pub fn filter(category: PersonCategory, predicate: PersonPredicate) -> Self {
        Self::uniform(PersonPredicate::MatchAll).with(category, predicate)
    }

    fn with(mut self, category: PersonCategory, predicate: PersonPredicate) -> Self {
        match category {
            PersonCategory::Buyer => self.buyer = predicate,
            PersonCategory::Supplier => self.supplier = predicate,
            PersonCategory::Deliverer => self.deliverer = predicate,
        }
        self
    }

    pub fn for_category(&self, category: PersonCategory) -> &PersonPredicate {
        match category {
            PersonCategory::Buyer => &self.buyer,
            PersonCategory::Supplier => &self.supplier,
            PersonCategory::Deliverer => &self.deliverer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use petcode_core::UniqueId;
    use petcode_orders::{AdditionalRequests, NewOrder, Price, Request};
    use petcode_parties::{
        Address, Buyer, Deliverer, Email, Location, Name, PersonDetails, Phone, Supplier, Tag,
    };
    use petcode_pets::{Age, Birth, Color, ColorPattern, NewPet, Species};

    fn details(name: &str, location: &str, tags: &[&str]) -> PersonDetails {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        PersonDetails::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new(email).unwrap(),
            Address::new("311, Clementi Ave 2, #02-25").unwrap(),
            Location::new(location).unwrap(),
            tags.iter().map(|t| Tag::new(t).unwrap()),
        )
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        KeywordSet::new(words).unwrap()
    }

    fn pet(species: &str, color: &str, vaccinated: bool) -> Pet {
        Pet::new(NewPet {
            name: Name::new("Page").unwrap(),
            supplier: None,
            birth: Birth::FixedAge(Age::new(2)),
            species: Species::new(species).unwrap(),
            color: Color::new(color).unwrap(),
            color_pattern: ColorPattern::new("plain").unwrap(),
            vaccinated,
            price: None,
            certificates: BTreeSet::new(),
        })
    }

    fn order(upper: u64, lower: u64, requests: &[&str], status: OrderStatus) -> Order {
        Order::new(NewOrder {
            buyer: UniqueId::new(),
            pet: None,
            requested_price_range: PriceRange::new(Price::from_cents(upper), Price::from_cents(lower)),
            request: Request::new("a cat").unwrap(),
            additional_requests: AdditionalRequests::new(requests).unwrap(),
            by_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            settled_price: None,
            status: Some(status),
        })
    }

    #[test]
    fn name_matches_whole_words_ignoring_case() {
        let carl = Deliverer::new(details("Carl Kurz", "Singapore", &[]));
        assert!(PersonPredicate::Name(keywords(&["carl"])).test(&carl));
        assert!(PersonPredicate::Name(keywords(&["KURZ", "nobody"])).test(&carl));
        assert!(!PersonPredicate::Name(keywords(&["Car"])).test(&carl));
    }

    #[test]
    fn location_is_exact_not_substring() {
        let buyer = Buyer::new(details("Alice Pauline", "Singapore", &[]), []);
        assert!(PersonPredicate::Location(keywords(&["singapore"])).test(&buyer));
        assert!(!PersonPredicate::Location(keywords(&["Singa"])).test(&buyer));
    }

    #[test]
    fn tag_phone_email_address() {
        let supplier = Supplier::new(details("Benson Meier", "Malaysia", &["friends"]), []);
        assert!(PersonPredicate::Tag(keywords(&["FRIENDS"])).test(&supplier));
        assert!(PersonPredicate::Phone(keywords(&["94351253"])).test(&supplier));
        assert!(PersonPredicate::Email(keywords(&["benson.meier@example.com"])).test(&supplier));
        assert!(PersonPredicate::Address(keywords(&["clementi"])).test(&supplier));
        assert!(!PersonPredicate::Address(keywords(&["clem"])).test(&supplier));
    }

    #[test]
    fn conjunction() {
        let buyer = Buyer::new(details("Alice Pauline", "Singapore", &["vip"]), []);
        let both = PersonPredicate::All(vec![
            PersonPredicate::Name(keywords(&["alice"])),
            PersonPredicate::Tag(keywords(&["vip"])),
        ]);
        assert!(both.test(&buyer));
        let clash = PersonPredicate::All(vec![
            PersonPredicate::Name(keywords(&["alice"])),
            PersonPredicate::Location(keywords(&["japan"])),
        ]);
        assert!(!clash.test(&buyer));
        assert!(PersonPredicate::All(vec![]).test(&buyer));
    }

    #[test]
    fn species_intersects_keyword_list() {
        let cat = pet("Persian cat", "white", true);
        assert!(PetPredicate::Species(keywords(&["dog", "CAT"])).test(&cat));
        assert!(!PetPredicate::Species(keywords(&["pokemon"])).test(&cat));
        assert!(PetPredicate::Color(keywords(&["White"])).test(&cat));
        assert!(PetPredicate::Vaccinated(true).test(&cat));
        assert!(!PetPredicate::Vaccinated(false).test(&cat));
    }

    #[test]
    fn pet_asking_price_within_bounds() {
        let bounds = PriceRange::new(Price::from_cents(50_000), Price::from_cents(10_000));
        let unpriced = pet("Persian cat", "white", true);
        assert!(!PetPredicate::Price(bounds).test(&unpriced));
        assert!(PetPredicate::Price(bounds).test(&unpriced.clone().with_price(Price::from_cents(10_000))));
        assert!(!PetPredicate::Price(bounds).test(&unpriced.with_price(Price::from_cents(50_001))));
    }

    #[test]
    fn order_predicates() {
        let o = order(8_000, 2_000, &["good with kids"], OrderStatus::Negotiating);
        let states: BTreeSet<_> = [OrderStatus::Pending, OrderStatus::Negotiating].into();
        assert!(OrderPredicate::Status(states).test(&o));
        assert!(!OrderPredicate::Status([OrderStatus::Completed].into()).test(&o));
        assert!(OrderPredicate::AdditionalRequest(keywords(&["kids"])).test(&o));
        let bounds = PriceRange::new(Price::from_cents(10_000), Price::from_cents(1_000));
        assert!(OrderPredicate::PriceRange(bounds).test(&o));
        let tight = PriceRange::new(Price::from_cents(5_000), Price::from_cents(1_000));
        assert!(!OrderPredicate::PriceRange(tight).test(&o));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            PetPredicate::Species(keywords(&["pokemon"])),
            PetPredicate::Species(KeywordSet::from_words("Pokemon").unwrap())
        );
        assert_ne!(
            PetPredicate::Species(keywords(&["pokemon"])),
            PetPredicate::Color(keywords(&["pokemon"]))
        );
        assert_ne!(PersonPredicate::MatchAll, PersonPredicate::MatchNone);
        assert_eq!(
            CategoryPredicates::find(PersonCategory::Deliverer, PersonPredicate::Name(keywords(&["carl"]))),
            CategoryPredicates::find(PersonCategory::Deliverer, PersonPredicate::Name(keywords(&["Carl"]))),
        );
    }

    #[test]
    fn find_and_filter_constants() {
        let p = PersonPredicate::Name(keywords(&["carl"]));

        let find = CategoryPredicates::find(PersonCategory::Deliverer, p.clone());
        assert_eq!(find.buyer, PersonPredicate::MatchNone);
        assert_eq!(find.supplier, PersonPredicate::MatchNone);
        assert_eq!(find.for_category(PersonCategory::Deliverer), &p);

        let filter = CategoryPredicates::filter(PersonCategory::Buyer, p.clone());
        assert_eq!(filter.buyer, p);
        assert_eq!(filter.supplier, PersonPredicate::MatchAll);
        assert_eq!(filter.deliverer, PersonPredicate::MatchAll);
    }

    #[test]
    fn find_deliverer_returns_only_matching_deliverers() {
        let buyers = [Buyer::new(details("Alice", "Singapore", &[]), [])];
        let suppliers = [Supplier::new(details("Bob", "Singapore", &[]), [])];
        let deliverers = [
            Deliverer::new(details("Carl", "Singapore", &[])),
            Deliverer::new(details("Dana", "Singapore", &[])),
        ];

        let predicates = CategoryPredicates::find(
            PersonCategory::Deliverer,
            PersonPredicate::Name(keywords(&["Carl"])),
        );

        let names: Vec<&str> = buyers
            .iter()
            .filter(|b| predicates.buyer.test(*b))
            .map(|b| b.name().as_str())
            .chain(
                suppliers
                    .iter()
                    .filter(|s| predicates.supplier.test(*s))
                    .map(|s| s.name().as_str()),
            )
            .chain(
                deliverers
                    .iter()
                    .filter(|d| predicates.deliverer.test(*d))
                    .map(|d| d.name().as_str()),
            )
            .collect();

        assert_eq!(names, vec!["Carl"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a find over one category never lets the other two through.
            #[test]
            fn find_excludes_other_categories(
                name in "[A-Za-z]{1,10}( [A-Za-z]{1,10})?",
                location in "[A-Za-z]{1,12}",
            ) {
                let buyer = Buyer::new(details(&name, &location, &[]), []);
                let supplier = Supplier::new(details(&name, &location, &[]), []);
                let everything = PersonPredicate::Name(KeywordSet::from_words(&name).unwrap());

                let find = CategoryPredicates::find(PersonCategory::Deliverer, everything.clone());
                prop_assert!(!find.buyer.test(&buyer));
                prop_assert!(!find.supplier.test(&supplier));

                let filter = CategoryPredicates::filter(PersonCategory::Deliverer, everything);
                prop_assert!(filter.buyer.test(&buyer));
                prop_assert!(filter.supplier.test(&supplier));
            }
        }
    }
}
