use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::New => "New",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Old" => Some(Self::Old),
            "New" => Some(Self::New),
            _ => None,
        }
    }
}
