//! Core types for the kata exercise set
//!
//! This crate defines the foundational types the other crates build on:
//! - Stack: generic LIFO container with checked `pop`/`peek`
//! - Value: dynamically typed input handed to validators
//! - Outcome: tagged success/invalid result carrying the rejection reason
//! - Clock: injectable current-time capability (SystemClock, FixedClock)
//! - Error: error type for genuinely exceptional states

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod outcome;
pub mod stack;
pub mod value;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use stack::Stack;
pub use value::Value;
