//! Cross-crate behavior through the `kata` facade
//!
//! - stack_invariants: LIFO order and size accounting, plus proptest properties
//! - discount_properties: catalog lookups and price arithmetic
//! - validation_scenarios: end-to-end sign-up, username and driving checks
//! - schedule_scenarios: clock-gated rules with a fixed clock

mod discount_properties;
mod schedule_scenarios;
mod stack_invariants;
mod validation_scenarios;
