//! Mood levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the user felt on a given day, ordered best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Great,
    Good,
    Neutral,
    Bad,
    Terrible,
}

impl MoodLevel {
    /// Every level, best to worst. Also the tie-break order for the dominant mood.
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Great,
        MoodLevel::Good,
        MoodLevel::Neutral,
        MoodLevel::Bad,
        MoodLevel::Terrible,
    ];

    /// Stored name (lowercase, as written to the entries slot)
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLevel::Great => "great",
            MoodLevel::Good => "good",
            MoodLevel::Neutral => "neutral",
            MoodLevel::Bad => "bad",
            MoodLevel::Terrible => "terrible",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::Great => "Great",
            MoodLevel::Good => "Good",
            MoodLevel::Neutral => "Okay",
            MoodLevel::Bad => "Bad",
            MoodLevel::Terrible => "Terrible",
        }
    }

    /// Single-character marker used by the calendar view
    pub fn marker(&self) -> char {
        match self {
            MoodLevel::Great => '+',
            MoodLevel::Good => 'o',
            MoodLevel::Neutral => '~',
            MoodLevel::Bad => '-',
            MoodLevel::Terrible => 'x',
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "great" => Ok(MoodLevel::Great),
            "good" => Ok(MoodLevel::Good),
            "neutral" | "okay" => Ok(MoodLevel::Neutral),
            "bad" => Ok(MoodLevel::Bad),
            "terrible" => Ok(MoodLevel::Terrible),
            _ => Err(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_best_to_worst() {
        assert_eq!(MoodLevel::ALL[0], MoodLevel::Great);
        assert_eq!(MoodLevel::ALL[4], MoodLevel::Terrible);
        assert!(MoodLevel::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(MoodLevel::from_str("GREAT").unwrap(), MoodLevel::Great);
        assert_eq!(MoodLevel::from_str(" bad ").unwrap(), MoodLevel::Bad);
    }

    #[test]
    fn test_okay_is_neutral() {
        assert_eq!(MoodLevel::from_str("okay").unwrap(), MoodLevel::Neutral);
        assert_eq!(MoodLevel::Neutral.label(), "Okay");
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(MoodLevel::from_str("meh").unwrap_err(), "meh");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&MoodLevel::Terrible).unwrap();
        assert_eq!(json, "\"terrible\"");
        let parsed: MoodLevel = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, MoodLevel::Neutral);
    }
}
