//! src/model/list_type.rs
//! Information density of list rows.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Row density. Only affects sizing, never selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Two text lines per row plus a spacer.
    #[default]
    Default,

    /// Single text line plus a spacer.
    Comfortable,

    /// Single text line, no spacer.
    Compact,
}

impl ListType {
    pub const ALL: [ListType; 3] = [Self::Default, Self::Comfortable, Self::Compact];

    /// Terminal rows occupied by one list item.
    #[inline]
    pub const fn row_height(self) -> u16 {
        match self {
            Self::Default => 3,
            Self::Comfortable => 2,
            Self::Compact => 1,
        }
    }

    /// Width of the leading checkbox column.
    #[inline]
    pub const fn icon_width(self) -> u16 {
        match self {
            Self::Default => 6,
            Self::Comfortable | Self::Compact => 5,
        }
    }

    /// Whether secondary text (`domain path`) goes on its own line.
    #[inline]
    pub const fn has_two_lines(self) -> bool {
        matches!(self, Self::Default)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Default => Self::Comfortable,
            Self::Comfortable => Self::Compact,
            Self::Compact => Self::Default,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = AppError;

    /// Empty input maps to `Default`, like an unset attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "comfortable" => Ok(Self::Comfortable),
            "compact" => Ok(Self::Compact),
            other => Err(AppError::invalid_input(
                "list_type",
                format!("unknown list type '{other}'"),
            )),
        }
    }
}
