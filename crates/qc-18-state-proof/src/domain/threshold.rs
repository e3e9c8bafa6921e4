//! # Stake Thresholds
//!
//! Named fractions of total weight. Every threshold is a strict inequality:
//! exactly one third never satisfies `StrongMinority`, exactly one half never
//! satisfies `Majority`, exactly two thirds never satisfies `SuperMajority`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fraction of total weight that must sign for a proof to be valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Threshold {
    /// More than one third: `weight * 3 > total`.
    StrongMinority,
    /// More than one half: `weight * 2 > total`.
    Majority,
    /// More than two thirds: `weight * 3 > total * 2`.
    SuperMajority,
}

impl Threshold {
    /// All thresholds, weakest first.
    pub const ALL: [Threshold; 3] = [
        Threshold::StrongMinority,
        Threshold::Majority,
        Threshold::SuperMajority,
    ];

    /// Whether `weight` out of `total_weight` satisfies this threshold.
    ///
    /// Computed in `u128`, so no input can overflow.
    pub fn is_satisfied_by(self, weight: u64, total_weight: u64) -> bool {
        let weight = weight as u128;
        let total = total_weight as u128;
        match self {
            Self::StrongMinority => weight * 3 > total,
            Self::Majority => weight * 2 > total,
            Self::SuperMajority => weight * 3 > total * 2,
        }
    }

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrongMinority => "STRONG_MINORITY",
            Self::Majority => "MAJORITY",
            Self::SuperMajority => "SUPER_MAJORITY",
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A threshold name that matches none of the known thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown threshold: {name}")]
pub struct ThresholdParseError {
    /// The rejected name
    pub name: String,
}

impl FromStr for Threshold {
    type Err = ThresholdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|threshold| threshold.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThresholdParseError { name: s.to_string() })
    }
}
