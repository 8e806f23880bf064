//! # alp-engine
//!
//! Gap analysis and remediation planning.
//!
//! Two stateless stages:
//! - [`analyzer`]: six raw score pairs to per-category average, gap and
//!   severity against a target percentage
//! - [`planner`]: (category, severity) to a fixed two-step plan plus the
//!   category's learning resources, looked up in a [`PlanCatalog`]
//!
//! Both stages are pure and never fail; degraded input produces a complete,
//! well-formed result. The only fallible operation is loading a custom
//! catalog.
//!
//! ```
//! use alp_core::enums::Severity;
//! use alp_core::scores::{OutcomeAssessmentSet, PeriodScores, ScorePair};
//! use alp_engine::{DEFAULT_TARGET, analyze, generate_plan};
//!
//! let pair = ScorePair::new(10.0, 25.0);
//! let sheet = PeriodScores::new(pair, pair, pair);
//! let report = analyze(&OutcomeAssessmentSet::new(sheet, sheet), DEFAULT_TARGET);
//! assert_eq!(report.co1.severity, Severity::Medium);
//!
//! let plan = generate_plan("CO1", report.co1.severity);
//! assert_eq!(plan.steps.len(), 2);
//! ```

pub mod analyzer;
pub mod catalog;
mod error;
pub mod planner;

pub use analyzer::{DEFAULT_TARGET, analyze, classify, percentage, weak_categories};
pub use catalog::PlanCatalog;
pub use error::CatalogError;
pub use planner::{generate_plan, plan_for_keys, recommend};
