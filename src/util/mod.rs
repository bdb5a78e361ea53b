//! Helper functions

mod binomial;

pub use binomial::{binomial, selections_after};
