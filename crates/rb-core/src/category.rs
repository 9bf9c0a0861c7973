//! Train category label.
//!
//! The category is carried for display and logging only.  Admission order
//! is driven by `Priority`, never by the category.

use std::str::FromStr;

use crate::CoreError;

/// The kind of service a train runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TrainCategory {
    Express,
    Freight,
    #[default]
    Passenger,
}

impl TrainCategory {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainCategory::Express   => "Express",
            TrainCategory::Freight   => "Freight",
            TrainCategory::Passenger => "Passenger",
        }
    }
}

impl std::fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainCategory {
    type Err = CoreError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express"   => Ok(TrainCategory::Express),
            "freight"   => Ok(TrainCategory::Freight),
            "passenger" => Ok(TrainCategory::Passenger),
            _           => Err(CoreError::UnknownCategory(s.to_owned())),
        }
    }
}
