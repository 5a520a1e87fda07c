// crates/algolab-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for `algolab config example`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example lists every section with its default values, so it always
//! validates.

/// Returns a canonical example `algolab.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[matrix]
# Blocks at or below this size use the classic product.
leaf_size = 32
# Blocks at or above this size fork onto the worker pool; omit to stay serial.
parallel_threshold = 256
# Worker pool size; 0 picks one worker per core.
worker_threads = 16

[bench]
sizes = [64, 128, 256]
iterations = 5
warmup = 1
algorithms = ["standard", "divide_and_conquer", "strassen"]

[logging]
# One of "none", "stderr", "file".
sink = "stderr"
# path = "algolab-events.jsonl"
"#,
    )
}
