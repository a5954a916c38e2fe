//! Testing infrastructure for pokedex tests.
//!
//! - `fixtures`: PokéAPI-shaped payloads
//! - `server`: a local HTTP stub standing in for the catalog

pub mod fixtures;
pub mod server;

pub use server::{StubResponse, StubServer};
