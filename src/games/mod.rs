//! Game implementations.

pub mod flags;
