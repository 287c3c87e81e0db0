use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// A listing's sortable field set
pub trait SortField: Copy + FromStr<Err = CoreError> + std::fmt::Debug {
    /// Field used when the caller does not ask for one
    const DEFAULT: Self;

    /// Direction used when the caller does not ask for one
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Desc;

    fn as_str(&self) -> &'static str;
}

/// Sortable fields of the sent listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentSortField {
    Tno,
    Title,
    Grade,
    Deadline,
    Birth,
}

impl SortField for SentSortField {
    const DEFAULT: Self = Self::Tno;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Tno => "tno",
            Self::Title => "title",
            Self::Grade => "grade",
            Self::Deadline => "deadline",
            Self::Birth => "birth",
        }
    }
}

impl FromStr for SentSortField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "tno" => Ok(Self::Tno),
            "title" => Ok(Self::Title),
            "grade" => Ok(Self::Grade),
            "deadline" => Ok(Self::Deadline),
            "birth" => Ok(Self::Birth),
            _ => Err(CoreError::InvalidSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Sortable fields of the inbox listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceivedSortField {
    Pno,
    Tno,
    Title,
    Grade,
    Deadline,
    Birth,
    State,
    Read,
}

impl SortField for ReceivedSortField {
    const DEFAULT: Self = Self::Pno;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pno => "pno",
            Self::Tno => "tno",
            Self::Title => "title",
            Self::Grade => "grade",
            Self::Deadline => "deadline",
            Self::Birth => "birth",
            Self::State => "state",
            Self::Read => "read",
        }
    }
}

impl FromStr for ReceivedSortField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "pno" => Ok(Self::Pno),
            "tno" => Ok(Self::Tno),
            "title" => Ok(Self::Title),
            "grade" => Ok(Self::Grade),
            "deadline" => Ok(Self::Deadline),
            "birth" => Ok(Self::Birth),
            "state" => Ok(Self::State),
            "read" => Ok(Self::Read),
            _ => Err(CoreError::InvalidSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F: SortField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> Default for Sort<F> {
    fn default() -> Self {
        Self {
            field: F::DEFAULT,
            direction: F::DEFAULT_DIRECTION,
        }
    }
}

impl<F: SortField> Sort<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse `field` or `field,asc|desc`. A bare field sorts ascending.
    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let mut parts = value.split(',');
        let field = parts.next().unwrap_or_default().parse::<F>()?;
        let direction = match parts.next() {
            Some(dir) => dir.parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };

        if parts.next().is_some() {
            return Err(CoreError::InvalidSort {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { field, direction })
    }
}

impl<F: SortField> std::fmt::Display for Sort<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.field.as_str(), self.direction.as_str())
    }
}
