//! Prices

use std::ops::Deref;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur during price arithmetic or conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// A multiplication or addition exceeded the representable range.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// The value does not fit the target monetary representation.
    #[error("price exceeds the supported monetary range")]
    OutOfRange,
}

/// A price in minor units (pence/cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new price from minor units.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the raw minor-unit value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.value
    }

    /// Adds two prices, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the sum exceeds `u64::MAX`.
    pub fn checked_add(self, other: Self) -> Result<Self, PriceError> {
        self.value
            .checked_add(other.value)
            .map(Self::new)
            .ok_or(PriceError::Overflow)
    }

    /// Converts to a [`Money`] value in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::OutOfRange`] if the value does not fit `i64`.
    pub fn to_money(self, currency: &'static Currency) -> Result<Money<'static, Currency>, PriceError> {
        let minor = i64::try_from(self.value).map_err(|_source| PriceError::OutOfRange)?;

        Ok(Money::from_minor(minor, currency))
    }

    /// Converts to a [`Decimal`] in major units for the given exponent,
    /// e.g. 350 minor units with exponent 2 becomes `3.50`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::OutOfRange`] if the scale cannot be applied.
    pub fn to_decimal(self, exponent: u32) -> Result<Decimal, PriceError> {
        let mut decimal = Decimal::from(self.value);

        decimal
            .set_scale(exponent)
            .map_err(|_source| PriceError::OutOfRange)?;

        Ok(decimal)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Calculates the total for one line: unit price times quantity.
///
/// # Errors
///
/// Returns [`PriceError::Overflow`] if the product exceeds `u64::MAX`.
pub fn line_total(unit_price: Price, quantity: u32) -> Result<Price, PriceError> {
    unit_price
        .get()
        .checked_mul(u64::from(quantity))
        .map(Price::new)
        .ok_or(PriceError::Overflow)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.get(), 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price::new(100);

        assert_eq!(*price, 100);
    }

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() -> TestResult {
        assert_eq!(line_total(Price::new(250), 3)?, Price::new(750));

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_an_error() {
        let result = line_total(Price::new(u64::MAX), 2);

        assert_eq!(result, Err(PriceError::Overflow));
    }

    #[test]
    fn checked_add_overflow_is_an_error() {
        let result = Price::new(u64::MAX).checked_add(Price::new(1));

        assert_eq!(result, Err(PriceError::Overflow));
    }

    #[test]
    fn to_money_uses_minor_units() -> TestResult {
        let money = Price::new(350).to_money(iso::GBP)?;

        assert_eq!(money, Money::from_minor(350, iso::GBP));

        Ok(())
    }

    #[test]
    fn to_money_rejects_values_beyond_i64() {
        let result = Price::new(u64::MAX).to_money(iso::GBP);

        assert_eq!(result, Err(PriceError::OutOfRange));
    }

    #[test]
    fn to_decimal_applies_currency_exponent() -> TestResult {
        assert_eq!(Price::new(350).to_decimal(2)?, Decimal::new(350, 2));

        Ok(())
    }
}
