//! CombCalc-rs library: application logic for the combinatorics calculator.

pub mod app;
pub mod config;
pub mod errors;
