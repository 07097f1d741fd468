//! Activity type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of task an activity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Watch a hosted video.
    Video,
    /// Complete a survey form.
    Survey,
    /// Complete an identity-verification session.
    Verification,
}

impl ActivityType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Survey => "survey",
            Self::Verification => "verification",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = employnet_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "survey" => Ok(Self::Survey),
            "verification" => Ok(Self::Verification),
            _ => Err(employnet_core::AppError::validation(format!(
                "Invalid activity type: '{s}'. Expected one of: video, survey, verification"
            ))),
        }
    }
}
