use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset classification for capital-gains purposes. `Other` covers gold,
/// unlisted property, debt, and anything else that is not listed equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Other,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "equity" => Some(Self::Equity),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentTransaction {
    pub asset_class: AssetClass,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub is_long_term: bool,
}

impl InvestmentTransaction {
    /// Realized gain on the transaction; negative when sold at a loss.
    pub fn gain(&self) -> Decimal {
        self.sell_price - self.buy_price
    }
}
