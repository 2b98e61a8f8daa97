//! # periop-risk
//!
//! Pre-operative risk rule engine.
//!
//! - Rules are a tagged table: each [`RiskRule`] pairs a [`RuleCondition`]
//!   with fixed score deltas and an explained [`RiskFactor`](periop_core::RiskFactor)
//! - Evaluation starts from fixed baselines, applies every matching rule in
//!   table order, then clamps to per-category ceilings
//! - [`assess_risk`] runs the built-in table; [`RiskEngine::with_rules`]
//!   accepts a custom one

#![deny(unsafe_code)]

pub mod core_rules;
pub mod engine;
pub mod errors;
pub mod rules;

pub use core_rules::{DEFAULT_RULE_IDS, default_rules};
pub use engine::{RiskEngine, assess_risk, default_engine};
pub use errors::{Result, RuleError};
pub use rules::{RiskRule, RuleBase, RuleCondition};
