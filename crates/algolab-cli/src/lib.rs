// crates/algolab-cli/src/lib.rs
// ============================================================================
// Module: AlgoLab CLI Library
// Description: Shared helpers behind the algolab binary.
// Purpose: Keep input parsing, benchmarking, and run events testable.
// Dependencies: algolab-config, algolab-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Support code for the `algolab` binary: bounded JSON input readers, the
//! matrix timing benchmark, and JSON-line run events.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bench;
pub mod events;
pub mod inputs;
