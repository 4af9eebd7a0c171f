//! Pets domain module.

pub mod pet;

pub use pet::{Age, Birth, Color, ColorPattern, DateOfBirth, NewPet, Pet, Species};
