use tracing::debug;

use petcode_core::DomainResult;
use petcode_parties::PersonCategory;
use petcode_search::{CategoryPredicates, OrderPredicate, PersonPredicate, PetPredicate};

use crate::Model;

/// A query command run against the [`Model`].
///
/// Commands carry only plain predicate data, so two commands built from the
/// same input compare equal with `==`. Executing one swaps the model's
/// filters and reports how many entities are now shown. Nothing in the
/// address book itself changes.
pub trait Command: Clone + core::fmt::Debug + PartialEq {
    fn execute(&self, model: &mut Model) -> DomainResult<CommandResult>;
}

/// Feedback shown to the user after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

impl core::fmt::Display for CommandResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.feedback)
    }
}

/// Finds persons of one category. The other two categories are hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub predicates: CategoryPredicates,
}

impl FindCommand {
    pub fn new(category: PersonCategory, predicate: PersonPredicate) -> Self {
        Self {
            predicates: CategoryPredicates::find(category, predicate),
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> DomainResult<CommandResult> {
        debug!(command = "find", predicates = ?self.predicates, "executing command");
        model.update_filtered_persons(self.predicates.clone());
        Ok(CommandResult::new(format!(
            "{} persons listed!",
            model.filtered_person_count()
        )))
    }
}

/// Filters pets. Persons of every category stay visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPetCommand {
    pub persons: CategoryPredicates,
    pub pet: PetPredicate,
}

impl FilterPetCommand {
    pub fn new(pet: PetPredicate) -> Self {
        Self {
            persons: CategoryPredicates::match_all(),
            pet,
        }
    }
}

impl Command for FilterPetCommand {
    fn execute(&self, model: &mut Model) -> DomainResult<CommandResult> {
        debug!(command = "filter-pet", pet = ?self.pet, "executing command");
        model.update_filtered_persons(self.persons.clone());
        model.update_filtered_pets(self.pet.clone());
        Ok(CommandResult::new(format!(
            "{} pets listed!",
            model.filtered_pets().len()
        )))
    }
}

/// Filters orders by status, additional requests or price range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOrderCommand {
    pub order: OrderPredicate,
}

impl FilterOrderCommand {
    pub fn new(order: OrderPredicate) -> Self {
        Self { order }
    }
}

impl Command for FilterOrderCommand {
    fn execute(&self, model: &mut Model) -> DomainResult<CommandResult> {
        debug!(command = "filter-order", order = ?self.order, "executing command");
        model.update_filtered_orders(self.order.clone());
        Ok(CommandResult::new(format!(
            "{} orders listed!",
            model.filtered_orders().len()
        )))
    }
}

/// Clears every filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> DomainResult<CommandResult> {
        debug!(command = "list", "executing command");
        model.show_all();
        Ok(CommandResult::new("Listed all contacts"))
    }
}
