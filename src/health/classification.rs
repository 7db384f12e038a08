// src/health/classification.rs
use std::fmt;

/// Substrings whose presence marks a response body as suspicious.
pub const MARKERS: [&str; 2] = ["overlapping", "multiple"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Clean,
    Suspicious,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Clean => write!(f, "clean"),
            Classification::Suspicious => write!(f, "suspicious"),
        }
    }
}

/// Case-sensitive literal match against [`MARKERS`]. No normalization.
pub fn classify(body: &str) -> Classification {
    if MARKERS.iter().any(|marker| body.contains(marker)) {
        Classification::Suspicious
    } else {
        Classification::Clean
    }
}
