use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    SelfOccupied,
    LetOut,
}

impl Occupancy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfOccupied => "self_occupied",
            Self::LetOut => "let_out",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "self_occupied" => Some(Self::SelfOccupied),
            "let_out" => Some(Self::LetOut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyHolding {
    pub occupancy: Occupancy,
    pub rental_income: Decimal,
    pub municipal_taxes: Decimal,
    pub loan_interest: Decimal,
}
