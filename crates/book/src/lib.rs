//! The address book: every entity list, the references between them, and the
//! query commands that filter what is shown.

pub mod address_book;
pub mod command;
pub mod model;

pub use address_book::{AddressBook, AddressBookSnapshot};
pub use command::{
    Command, CommandResult, FilterOrderCommand, FilterPetCommand, FindCommand, ListCommand,
};
pub use model::Model;
