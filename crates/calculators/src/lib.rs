//! Pure financial calculators. Each function maps one input record to one
//! result record and touches no shared state.

pub mod cost_analysis;
pub mod covenant_tracking;
pub mod debt_brake;
pub mod debt_snowball;
pub mod error;
pub mod funding_guidance;

pub use cost_analysis::cost_analysis;
pub use covenant_tracking::covenant_tracking;
pub use debt_brake::debt_brake;
pub use debt_snowball::debt_snowball;
pub use error::{CalcError, Result};
pub use funding_guidance::funding_guidance;
