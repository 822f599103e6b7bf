use crate::error::ParseStrategyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named target pattern with its own success predicate and move heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// At least 7 successes on both A and B.
    SevenSeven,
    /// At least 16 successes across A and B, excluding an exact 8/8 split.
    Sixteen,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::SevenSeven, Strategy::Sixteen];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SevenSeven => "seven-seven",
            Strategy::Sixteen => "sixteen",
        }
    }

    /// Short label for buttons and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::SevenSeven => "7/7",
            Strategy::Sixteen => "16",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seven-seven" | "sevenseven" | "77" | "7/7" => Ok(Strategy::SevenSeven),
            "sixteen" | "16" | "97" => Ok(Strategy::Sixteen),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("seven-seven".parse::<Strategy>(), Ok(Strategy::SevenSeven));
        assert_eq!("77".parse::<Strategy>(), Ok(Strategy::SevenSeven));
        assert_eq!(" 7/7 ".parse::<Strategy>(), Ok(Strategy::SevenSeven));
        assert_eq!("Sixteen".parse::<Strategy>(), Ok(Strategy::Sixteen));
        assert_eq!("97".parse::<Strategy>(), Ok(Strategy::Sixteen));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "eight-eight".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown strategy 'eight-eight' (expected seven-seven or sixteen)"
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
