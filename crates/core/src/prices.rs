//! Market Prices
//!
//! Static reference prices for the region's rubber markets: one quote
//! per traded grade, with the previous fixing and per-location spreads.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grades::RubberGrade;

/// Price observed at a named market location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPrice {
    /// Market town.
    pub name: String,

    /// Observed price in rupees per kilogram.
    pub price: Decimal,
}

/// Direction of a quote against its previous fixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Current price above the previous fixing.
    Up,

    /// Current price below the previous fixing.
    Down,

    /// Unchanged.
    Stable,
}

/// Current and previous market price for a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Quoted grade.
    pub grade: RubberGrade,

    /// Current price in rupees per kilogram.
    pub current: Decimal,

    /// Previous fixing in rupees per kilogram.
    pub previous: Decimal,

    /// Per-location observations behind the quote.
    #[serde(default)]
    pub locations: SmallVec<[LocationPrice; 3]>,
}

impl MarketQuote {
    /// Signed move against the previous fixing.
    #[must_use]
    pub fn change(&self) -> Decimal {
        self.current - self.previous
    }

    /// Direction of the move; derived, never stored.
    #[must_use]
    pub fn trend(&self) -> Trend {
        match self.current.cmp(&self.previous) {
            std::cmp::Ordering::Greater => Trend::Up,
            std::cmp::Ordering::Less => Trend::Down,
            std::cmp::Ordering::Equal => Trend::Stable,
        }
    }
}

/// A board of quotes, one per traded grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketBoard {
    /// Quotes in display order.
    pub quotes: Vec<MarketQuote>,
}

impl MarketBoard {
    /// Quote for a specific grade, when the board carries one.
    #[must_use]
    pub fn quote(&self, grade: RubberGrade) -> Option<&MarketQuote> {
        self.quotes.iter().find(|quote| quote.grade == grade)
    }

    /// Mean of the current prices; `None` for an empty board.
    #[must_use]
    pub fn average(&self) -> Option<Decimal> {
        if self.quotes.is_empty() {
            return None;
        }

        let sum: Decimal = self.quotes.iter().map(|quote| quote.current).sum();

        sum.checked_div(Decimal::from(self.quotes.len()))
    }

    /// Quote with the highest current price.
    #[must_use]
    pub fn highest(&self) -> Option<&MarketQuote> {
        self.quotes.iter().max_by_key(|quote| quote.current)
    }
}

/// Wrap a rupees-per-kilogram amount for display, e.g. `₹185.00`.
#[must_use]
pub fn inr(amount: Decimal) -> Money<'static, iso::Currency> {
    Money::from_decimal(amount, iso::INR)
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn quote(grade: RubberGrade, current: i64, previous: i64) -> MarketQuote {
        MarketQuote {
            grade,
            current: Decimal::from(current),
            previous: Decimal::from(previous),
            locations: smallvec![],
        }
    }

    #[test]
    fn trend_follows_the_move() {
        assert_eq!(quote(RubberGrade::Rss1, 187, 185).trend(), Trend::Up);
        assert_eq!(quote(RubberGrade::Rss3, 177, 178).trend(), Trend::Down);
        assert_eq!(quote(RubberGrade::Rss4, 167, 167).trend(), Trend::Stable);
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(quote(RubberGrade::Rss1, 187, 185).change(), Decimal::from(2));
        assert_eq!(quote(RubberGrade::CupLump, 155, 157).change(), Decimal::from(-2));
    }

    #[test]
    fn board_average_over_current_prices() {
        let board = MarketBoard {
            quotes: vec![
                quote(RubberGrade::Rss1, 180, 180),
                quote(RubberGrade::Rss3, 170, 170),
                quote(RubberGrade::Latex, 190, 190),
            ],
        };

        assert_eq!(board.average(), Some(Decimal::from(180)));
    }

    #[test]
    fn empty_board_has_no_average() {
        assert_eq!(MarketBoard::default().average(), None);
    }

    #[test]
    fn highest_picks_the_top_quote() {
        let board = MarketBoard {
            quotes: vec![
                quote(RubberGrade::Rss4, 167, 167),
                quote(RubberGrade::Latex, 192, 190),
                quote(RubberGrade::Rss1, 187, 185),
            ],
        };

        let top = board.highest().map(|quote| quote.grade);

        assert_eq!(top, Some(RubberGrade::Latex));
    }

    #[test]
    fn quote_lookup_by_grade() {
        let board = MarketBoard {
            quotes: vec![quote(RubberGrade::Rss1, 187, 185)],
        };

        assert!(board.quote(RubberGrade::Rss1).is_some());
        assert!(board.quote(RubberGrade::CupLump).is_none());
    }

    #[test]
    fn inr_formats_with_rupee_symbol() {
        let price = inr(Decimal::from(185));

        assert_eq!(price.to_string(), "₹185.00");
    }
}
