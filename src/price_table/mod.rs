use itertools::Itertools;
use std::fmt;

use crate::RodCuttingError;

/// Sale prices of rod pieces.
///
/// The price at index `i` is the price of a piece of length `i + 1`.
/// A table always contains at least one price and is never mutated after it
/// has been built.
///
/// Any `u64` is a valid price. The solvers saturate at `u64::MAX` when the
/// value of a cutting does not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: Vec<u64>,
}

impl PriceTable {
    pub fn new(prices: Vec<u64>) -> Result<Self, RodCuttingError> {
        if prices.is_empty() {
            return Err(RodCuttingError::EmptyPriceTable);
        }
        Ok(Self { prices })
    }

    /// Parses a price table from a list separated by whitespace or commas.
    ///
    /// ```
    /// # use rod_cutting_lib::PriceTable;
    /// let table = PriceTable::parse("1, 5, 8 9").unwrap();
    /// assert_eq!(table.as_slice(), &[1, 5, 8, 9]);
    /// ```
    pub fn parse(input: &str) -> Result<Self, RodCuttingError> {
        let prices = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_| RodCuttingError::InvalidPrice(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(prices)
    }

    /// Number of piece lengths that have a price.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the price of a piece of length `piece_length`, if one is listed.
    pub fn price_of(&self, piece_length: usize) -> Option<u64> {
        piece_length
            .checked_sub(1)
            .and_then(|i| self.prices.get(i))
            .copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.prices
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            prices: vec![1, 5, 8, 9, 10, 17, 17, 20],
        }
    }
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.prices.iter().join(", "))
    }
}
