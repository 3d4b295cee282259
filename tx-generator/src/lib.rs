#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Synthesizes sample personal-finance transactions and writes them as CSV.

pub mod catalog;
pub mod error;
pub mod money;
pub mod pattern;
pub mod transaction;
pub mod writer;
pub mod year;
