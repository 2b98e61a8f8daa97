//! # periop-scheduling
//!
//! Downstream consumers of a [`RiskAssessment`](periop_core::RiskAssessment).
//!
//! - **Resource advisor**: [`derive_required_resources`] maps scores (and BMI)
//!   to preparation steps such as an ICU bed or a blood bank notification
//! - **Slot recommender**: [`recommend_slots`] annotates every catalog slot
//!   with a recommendation flag and a reason
//! - **Duration**: [`estimate_duration`] gives the informational time range
//! - **Plan**: [`plan_schedule`] bundles all of the above
//!
//! Everything here is a pure function of its arguments.

#![deny(unsafe_code)]

pub mod duration;
pub mod plan;
pub mod resources;
pub mod slots;

pub use duration::{DurationEstimate, HIGH_RISK_PROTOCOL, estimate_duration, high_risk_protocol};
pub use plan::{SchedulingPlan, plan_schedule};
pub use resources::{
    DEFAULT_RESOURCE_RULES, ResourceRule, ResourceTrigger, derive_required_resources,
    derive_required_resources_with,
};
pub use slots::{AnnotatedSlot, HIGH_RISK_REASON, STANDARD_REASON, recommend_slots};
