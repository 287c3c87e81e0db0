use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Severity label attached to a ticket at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketGrade {
    Low,
    Middle,
    High,
    Urgent,
}

impl TicketGrade {
    pub const ALL: [TicketGrade; 4] = [Self::Low, Self::Middle, Self::High, Self::Urgent];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Middle => "MIDDLE",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }

    /// Numeric rank, lowest severity first
    pub fn rank(&self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Middle => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }
}

impl FromStr for TicketGrade {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MIDDLE" => Ok(Self::Middle),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(CoreError::InvalidTicketGrade {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TicketGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
