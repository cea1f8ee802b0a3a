//! Backend services for the activity directory.
//!
//! This module provides the service layer abstraction over the directory of
//! activities and their rosters, an in-memory implementation of it, and the
//! seed data the directory starts from.

pub mod activities;
pub mod seed;

pub use activities::*;
