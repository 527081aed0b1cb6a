//! Match configuration.
//!
//! Thresholds that end a match and the guard against matches that never
//! reach one. Loaded from JSON the same forgiving way for every caller:
//! missing fields take their defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub const DEFAULT_WINNING_SCORE: i32 = 52;
pub const DEFAULT_LOSING_SCORE: i32 = -104;
pub const DEFAULT_MAX_DEALS: u32 = 10_000;

/// Terminal conditions for a match.
///
/// # Example JSON Config
///
/// ```json
/// {"winning_score": 30, "max_deals": 500}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// The match ends once any seat's score is strictly above this.
    #[serde(default = "default_winning_score")]
    pub winning_score: i32,

    /// The match ends once any seat's score is strictly below this.
    #[serde(default = "default_losing_score")]
    pub losing_score: i32,

    /// Deals (thrown-in deals included) after which the driver gives up.
    #[serde(default = "default_max_deals")]
    pub max_deals: u32,
}

fn default_winning_score() -> i32 {
    DEFAULT_WINNING_SCORE
}

fn default_losing_score() -> i32 {
    DEFAULT_LOSING_SCORE
}

fn default_max_deals() -> u32 {
    DEFAULT_MAX_DEALS
}

impl MatchConfig {
    /// Build from an optional JSON object, falling back to defaults for
    /// missing fields or a malformed value.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn with_thresholds(winning_score: i32, losing_score: i32) -> Self {
        Self {
            winning_score,
            losing_score,
            ..Self::default()
        }
    }

    /// Whether `score` ends the match.
    pub fn is_terminal(&self, score: &[i32]) -> bool {
        score
            .iter()
            .any(|&s| s > self.winning_score || s < self.losing_score)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            losing_score: DEFAULT_LOSING_SCORE,
            max_deals: DEFAULT_MAX_DEALS,
        }
    }
}
