//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Item genre classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Novel,
    Poetry,
    Theater,
    Comics,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Novel, Genre::Poetry, Genre::Theater, Genre::Comics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Novel => "novel",
            Genre::Poetry => "poetry",
            Genre::Theater => "theater",
            Genre::Comics => "comics",
        }
    }
}

impl FromStr for Genre {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown genre: {}", s)))
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
