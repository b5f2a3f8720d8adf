//! Presentation bands: pure score → category lookups

use colored::Color;
use serde::{Deserialize, Serialize};

/// Three-way quality band shared by every score display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    /// Option strength in the Arena (80 / 60)
    pub fn for_strength(strength: u32) -> Self {
        match strength {
            80.. => ScoreBand::High,
            60..=79 => ScoreBand::Mid,
            _ => ScoreBand::Low,
        }
    }

    /// Built argument score in Frame the Flame (85 / 70)
    pub fn for_argument(score: u32) -> Self {
        match score {
            85.. => ScoreBand::High,
            70..=84 => ScoreBand::Mid,
            _ => ScoreBand::Low,
        }
    }

    /// Seconds left on a Fallacy Hunt question (>10 / >5)
    pub fn for_time_left(secs: u32) -> Self {
        match secs {
            11.. => ScoreBand::High,
            6..=10 => ScoreBand::Mid,
            _ => ScoreBand::Low,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ScoreBand::High => Color::Green,
            ScoreBand::Mid => Color::Yellow,
            ScoreBand::Low => Color::Red,
        }
    }

    /// Label for a rebuttal strength
    pub fn strength_label(&self) -> &'static str {
        match self {
            ScoreBand::High => "Strong",
            ScoreBand::Mid => "Good",
            ScoreBand::Low => "Weak",
        }
    }

    /// Label for a built argument
    pub fn argument_label(&self) -> &'static str {
        match self {
            ScoreBand::High => "Excellent Argument!",
            ScoreBand::Mid => "Good Argument",
            ScoreBand::Low => "Needs Improvement",
        }
    }
}
