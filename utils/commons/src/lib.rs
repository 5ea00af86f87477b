//! Shared types, errors and collaborator bindings for the minter contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{
    authority::*, collaborators::*, constants::*, errors::*, structs::*, types::*,
};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(feature = "mocks")]
pub mod test;

mod authority;
mod collaborators;
mod constants;
mod errors;
mod structs;
mod types;
