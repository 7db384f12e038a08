// src/health/mod.rs
mod checker;
mod classification;
mod error;
mod result;

pub use checker::LivenessChecker;
pub use classification::{classify, Classification, MARKERS};
pub use error::CheckError;
pub use result::{CheckResult, CheckState};
