// crates/algolab-config/src/lib.rs
// ============================================================================
// Module: AlgoLab Config Library
// Description: Canonical config model, validation, and example output.
// Purpose: Single source of truth for algolab.toml semantics.
// Dependencies: algolab-core, serde, toml
// ============================================================================

//! ## Overview
//! `algolab-config` defines the `algolab.toml` model used by the `algolab`
//! binary: matrix tuning, benchmark plans, and run-event logging. Loading is
//! strict and fails closed on oversized, non-UTF-8, or unknown input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
