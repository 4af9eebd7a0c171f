//! Typical entities shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use chrono::NaiveDate;

use petcode_book::AddressBook;
use petcode_core::UniqueId;
use petcode_orders::{AdditionalRequests, NewOrder, Order, OrderStatus, Price, PriceRange, Request};
use petcode_parties::{
    Address, Buyer, Deliverer, Email, Location, Name, Person, PersonDetails, Phone, Supplier, Tag,
};
use petcode_pets::{Age, Birth, Color, ColorPattern, DateOfBirth, NewPet, Pet, Species};

pub fn init_logging() {
    petcode_observability::init_with(&petcode_observability::ObservabilityConfig {
        filter: "debug".to_string(),
        format: petcode_observability::LogFormat::Pretty,
    });
}

pub fn details(name: &str, phone: &str, location: &str, tags: &[&str]) -> PersonDetails {
    PersonDetails::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(format!("{}@example.com", name.split_whitespace().next().unwrap().to_lowercase()))
            .unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        Location::new(location).unwrap(),
        tags.iter().map(|t| Tag::new(*t).unwrap()),
    )
}

pub fn alice() -> Buyer {
    Buyer::new(details("Alice Pauline", "94351253", "Singapore", &["friends"]), [])
}

pub fn bob() -> Buyer {
    Buyer::new(details("Bob Choo", "98765432", "Singapore", &[]), [])
}

pub fn carl() -> Supplier {
    Supplier::new(details("Carl Kurz", "95352563", "Malaysia", &[]), [])
}

pub fn dana() -> Deliverer {
    Deliverer::new(details("Dana Meier", "87652533", "Singapore", &["owesMoney"]))
}

pub fn range(upper: u64, lower: u64) -> PriceRange {
    PriceRange::new(Price::from_cents(upper * 100), Price::from_cents(lower * 100))
}

pub fn order_for(buyer: &Buyer, request: &str, status: OrderStatus) -> Order {
    Order::new(NewOrder {
        buyer: *buyer.details().id(),
        pet: None,
        requested_price_range: range(100, 20),
        request: Request::new(request).unwrap(),
        additional_requests: AdditionalRequests::new(["vaccinated", "good with kids"]).unwrap(),
        by_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        settled_price: None,
        status: Some(status),
    })
}

pub fn pet(name: &str, species: &str, supplier: Option<UniqueId>, vaccinated: bool) -> Pet {
    Pet::new(NewPet {
        name: Name::new(name).unwrap(),
        supplier,
        birth: Birth::Born(DateOfBirth::parse("2020-05-17").unwrap()),
        species: Species::new(species).unwrap(),
        color: Color::new("white").unwrap(),
        color_pattern: ColorPattern::new("plain").unwrap(),
        vaccinated,
        price: None,
        certificates: BTreeSet::new(),
    })
}

pub fn aged_pet(name: &str, years: u32) -> Pet {
    Pet::new(NewPet {
        name: Name::new(name).unwrap(),
        supplier: None,
        birth: Birth::FixedAge(Age::new(years)),
        species: Species::new("golden retriever").unwrap(),
        color: Color::new("gold").unwrap(),
        color_pattern: ColorPattern::new("plain").unwrap(),
        vaccinated: false,
        price: None,
        certificates: BTreeSet::new(),
    })
}

/// Alice, Bob, Carl and Dana, with no pets or orders.
pub fn typical_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_buyer(alice()).unwrap();
    book.add_buyer(bob()).unwrap();
    book.add_supplier(carl()).unwrap();
    book.add_deliverer(dana()).unwrap();
    book
}
