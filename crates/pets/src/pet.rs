use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use petcode_core::{
    DomainError, DomainResult, Entity, Identity, Price, UniqueId, ValueObject, require_non_blank,
    text_value_object,
};
use petcode_parties::{Name, Tag};

fn validate_species(value: &str) -> DomainResult<()> {
    require_non_blank("species", value)
}

fn validate_color(value: &str) -> DomainResult<()> {
    require_non_blank("color", value)
}

fn validate_color_pattern(value: &str) -> DomainResult<()> {
    require_non_blank("color pattern", value)
}

text_value_object!(
    /// Species description, e.g. "persian cat". Matched word by word.
    Species,
    validate_species
);

text_value_object!(Color, validate_color);

text_value_object!(ColorPattern, validate_color_pattern);

impl Species {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Date of birth, written as `yyyy-mm-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(text: &str) -> DomainResult<Self> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| {
                DomainError::invalid_argument(format!("date of birth must be yyyy-mm-dd: {e}"))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for DateOfBirth {}

impl core::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    pub fn new(years: u32) -> Self {
        Self(years)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Completed years between `born` and `today`. Zero for future dates.
    pub fn between(born: NaiveDate, today: NaiveDate) -> Self {
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        Self(u32::try_from(years).unwrap_or(0))
    }

    /// The pet's age as of today (local time).
    pub fn generate(pet: &Pet) -> Self {
        pet.age_on(Local::now().date_naive())
    }
}

impl ValueObject for Age {}

impl core::fmt::Display for Age {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Age: {}", self.0)
    }
}

/// Where a pet's age comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Birth {
    /// Age derived from the date of birth.
    Born(DateOfBirth),
    /// Age recorded as-is (date of birth unknown).
    FixedAge(Age),
}

/// Input for [`Pet::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: Name,
    pub supplier: Option<UniqueId>,
    pub birth: Birth,
    pub species: Species,
    pub color: Color,
    pub color_pattern: ColorPattern,
    pub vaccinated: bool,
    /// Asking price, if the supplier has named one.
    pub price: Option<Price>,
    pub certificates: BTreeSet<Tag>,
}

/// A pet, optionally owned by one order.
///
/// Two pets are the same pet when name, species and birth agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    id: UniqueId,
    name: Name,
    supplier: Option<UniqueId>,
    birth: Birth,
    species: Species,
    color: Color,
    color_pattern: ColorPattern,
    vaccinated: bool,
    #[serde(default)]
    price: Option<Price>,
    #[serde(default)]
    certificates: BTreeSet<Tag>,
}

impl Pet {
    pub fn new(input: NewPet) -> Self {
        Self {
            id: UniqueId::new(),
            name: input.name,
            supplier: input.supplier,
            birth: input.birth,
            species: input.species,
            color: input.color,
            color_pattern: input.color_pattern,
            vaccinated: input.vaccinated,
            price: input.price,
            certificates: input.certificates,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Weak reference to the supplier selling this pet.
    pub fn supplier(&self) -> Option<&UniqueId> {
        self.supplier.as_ref()
    }

    pub fn birth(&self) -> Birth {
        self.birth
    }

    pub fn date_of_birth(&self) -> Option<DateOfBirth> {
        match self.birth {
            Birth::Born(dob) => Some(dob),
            Birth::FixedAge(_) => None,
        }
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn color_pattern(&self) -> &ColorPattern {
        &self.color_pattern
    }

    pub fn is_vaccinated(&self) -> bool {
        self.vaccinated
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn certificates(&self) -> &BTreeSet<Tag> {
        &self.certificates
    }

    pub fn age_on(&self, today: NaiveDate) -> Age {
        match self.birth {
            Birth::Born(dob) => Age::between(dob.date(), today),
            Birth::FixedAge(age) => age,
        }
    }

    /// Same pet with a new asking price. Not part of identity.
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_supplier(mut self, supplier: UniqueId) -> Self {
        self.supplier = Some(supplier);
        self
    }

    pub fn with_id(mut self, id: UniqueId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Pet {
    type Id = UniqueId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Identity for Pet {
    const KIND: &'static str = "pet";

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && self.species == other.species && self.birth == other.birth
    }
}

impl core::fmt::Display for Pet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}); Color: {} {}; Vaccinated: {}",
            self.name,
            self.species,
            self.color,
            self.color_pattern,
            if self.vaccinated { "yes" } else { "no" }
        )?;
        match self.birth {
            Birth::Born(dob) => write!(f, "; Born: {dob}")?,
            Birth::FixedAge(age) => write!(f, "; {age}")?,
        }
        if let Some(price) = self.price {
            write!(f, "; Price: {price}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn plum(birth: Birth) -> Pet {
        Pet::new(NewPet {
            name: Name::new("Plum").unwrap(),
            supplier: None,
            birth,
            species: Species::new("Persian cat").unwrap(),
            color: Color::new("white").unwrap(),
            color_pattern: ColorPattern::new("stripes").unwrap(),
            vaccinated: true,
            price: None,
            certificates: BTreeSet::new(),
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_from_date_of_birth_eight_years_ago() {
        let today = Local::now().date_naive();
        let born = today.checked_sub_months(Months::new(8 * 12)).unwrap();
        let pet = plum(Birth::Born(DateOfBirth::new(born)));
        assert_eq!(Age::generate(&pet).value(), 8);
    }

    #[test]
    fn age_counts_completed_years_only() {
        let born = date(2015, 6, 15);
        assert_eq!(Age::between(born, date(2023, 6, 14)).value(), 7);
        assert_eq!(Age::between(born, date(2023, 6, 15)).value(), 8);
        assert_eq!(Age::between(born, date(2014, 1, 1)).value(), 0);
    }

    #[test]
    fn fixed_age_is_returned_unchanged() {
        let pet = plum(Birth::FixedAge(Age::new(10)));
        assert_eq!(Age::generate(&pet), Age::new(10));
        assert_eq!(pet.date_of_birth(), None);
    }

    #[test]
    fn age_equality_and_display() {
        assert_eq!(Age::new(10), Age::new(10));
        assert_ne!(Age::new(1), Age::new(10));
        assert_eq!(Age::new(8).to_string(), "Age: 8");
    }

    #[test]
    fn date_of_birth_parsing() {
        assert_eq!(
            DateOfBirth::parse("2019-02-28").unwrap().date(),
            date(2019, 2, 28)
        );
        assert!(matches!(
            DateOfBirth::parse("28/02/2019"),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn identity_ignores_color_and_id() {
        let born = Birth::Born(DateOfBirth::new(date(2020, 1, 1)));
        let a = plum(born);
        let mut b = plum(born);
        b.color = Color::new("black").unwrap();
        assert!(a.is_same(&b));
        assert_ne!(a.id(), b.id());

        let c = plum(Birth::FixedAge(Age::new(3)));
        assert!(!a.is_same(&c));
    }

    #[test]
    fn asking_price_is_optional_and_outside_identity() {
        let pet = plum(Birth::FixedAge(Age::new(1)));
        assert_eq!(pet.price(), None);

        let priced = pet.clone().with_price(Price::from_cents(45_000));
        assert_eq!(priced.price(), Some(Price::from_cents(45_000)));
        assert!(priced.is_same(&pet));
        assert!(priced.to_string().ends_with("; Price: 450.00"));
    }

    #[test]
    fn missing_price_loads_as_none() {
        let pet = plum(Birth::FixedAge(Age::new(1))).with_price(Price::from_cents(100));
        let mut value = serde_json::to_value(&pet).unwrap();
        value.as_object_mut().unwrap().remove("price");
        let back: Pet = serde_json::from_value(value).unwrap();
        assert_eq!(back.price(), None);
        assert_eq!(back.with_price(Price::from_cents(100)), pet);
    }

    #[test]
    fn species_words() {
        let pet = plum(Birth::FixedAge(Age::new(1)));
        assert_eq!(pet.species().words().collect::<Vec<_>>(), vec!["Persian", "cat"]);
    }
}
