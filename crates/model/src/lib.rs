#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]
#![allow(
    clippy::manual_range_contains,
)]

//! Data types for the Valentine profile form.

pub mod profile;

pub use profile::*;
