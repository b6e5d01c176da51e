use serde::{Deserialize, Serialize};

/// Display bucket for a fit score. Thresholds: 80 / 60 / 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            s if s >= 40 => ScoreBand::Fair,
            _ => ScoreBand::Low,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "green",
            ScoreBand::Good => "yellow",
            ScoreBand::Fair => "orange",
            ScoreBand::Low => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match",
            ScoreBand::Good => "Good Match",
            ScoreBand::Fair => "Fair Match",
            ScoreBand::Low => "Low Match",
        }
    }
}

pub fn score_color(score: u32) -> &'static str {
    ScoreBand::from_score(score).color()
}

pub fn score_label(score: u32) -> &'static str {
    ScoreBand::from_score(score).label()
}
