//! # alp-core
//!
//! Core types and error types for the adaptive learning path engine.
//!
//! This crate provides the foundational types shared across all `alp` crates:
//! - Category, period, severity and resource-kind enums
//! - Raw score inputs (`ScorePair`, `OutcomeAssessmentSet`, `MarksEntry`)
//! - Derived analysis results and remediation plans
//! - CLI response types
//! - Cross-cutting error types

pub mod analysis;
pub mod enums;
pub mod errors;
pub mod plan;
pub mod responses;
pub mod scores;
