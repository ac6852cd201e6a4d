//! regionfind-test - Regression test framework for regionfind
//!
//! Tracks numbered checks inside one regression test and reports every
//! failure at the end instead of stopping at the first one. Two modes:
//!
//! - **Compare**: run the checks (default)
//! - **Display**: also write intermediate images to `tests/regout` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use regionfind_test::RegParams;
//!
//! let mut rp = RegParams::new("finder");
//! rp.compare_values(100.0, region.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // regionfind-test is at crates/regionfind-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
