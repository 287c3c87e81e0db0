use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Receiver-side workflow state of a ticket.
///
/// Any state may replace any other; the owning receiver decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketState {
    #[default]
    New,
    InProgress,
    NeedInfo,
    Done,
}

impl TicketState {
    pub const ALL: [TicketState; 4] = [Self::New, Self::InProgress, Self::NeedInfo, Self::Done];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::NeedInfo => "NEED_INFO",
            Self::Done => "DONE",
        }
    }
}

impl FromStr for TicketState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEW" => Ok(Self::New),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "NEED_INFO" => Ok(Self::NeedInfo),
            "DONE" => Ok(Self::Done),
            _ => Err(CoreError::InvalidTicketState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TicketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
