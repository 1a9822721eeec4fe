#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod navigator;

pub use error::Error;
pub use navigator::{Destination, NextStep, Step, TrailNavigator, VisitOutcome};
