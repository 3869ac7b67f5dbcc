//! Bouquet composition
//!
//! A bouquet is a composite product whose price is never authored directly:
//! it is derived from the flower lines it is composed of. Each line carries
//! the flower's price as a snapshot taken when the line was first added, so
//! later flower price changes do not drift already-composed bouquets.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::prices::{Price, PriceError, line_total};

/// Errors related to bouquet composition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    /// A line quantity must be at least one.
    #[error("line quantity must be at least 1")]
    ZeroQuantity,

    /// The referenced flower has no line in this composition.
    #[error("no line for the given flower")]
    UnknownFlower,

    /// A bouquet must contain at least one line.
    #[error("bouquet has no flower lines")]
    Empty,

    /// Wrapped price arithmetic error.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// One flower line in a bouquet: which flower, how many, and the unit price
/// snapshotted when the line was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowerLine<K> {
    flower: K,
    quantity: u32,
    unit_price: Price,
}

impl<K: Copy> FlowerLine<K> {
    /// The flower this line refers to.
    pub fn flower(&self) -> K {
        self.flower
    }

    /// Number of stems of this flower.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price snapshot taken when the line was added.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// This line's contribution to the bouquet total.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product exceeds `u64::MAX`.
    pub fn total(&self) -> Result<Price, PriceError> {
        line_total(self.unit_price, self.quantity)
    }
}

/// A bouquet's bill of materials, generic over the flower identity `K`.
#[derive(Debug, Clone)]
pub struct Composition<K> {
    lines: SmallVec<[FlowerLine<K>; 8]>,
}

impl<K> Default for Composition<K> {
    fn default() -> Self {
        Self {
            lines: SmallVec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Composition<K> {
    /// Creates an empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a composition from `(flower, quantity, unit_price)` triples,
    /// merging duplicate flowers by summing quantities.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ZeroQuantity`] if any quantity is zero.
    pub fn from_lines(
        lines: impl IntoIterator<Item = (K, u32, Price)>,
    ) -> Result<Self, CompositionError> {
        let mut composition = Self::new();

        for (flower, quantity, unit_price) in lines {
            composition.add_line(flower, quantity, unit_price)?;
        }

        Ok(composition)
    }

    /// Adds a flower line.
    ///
    /// If a line for the same flower already exists, quantities are merged
    /// into the existing line and its original unit-price snapshot is kept;
    /// otherwise a new line is appended with `unit_price` as the snapshot.
    ///
    /// # Errors
    ///
    /// - [`CompositionError::ZeroQuantity`] if `quantity` is zero.
    /// - [`CompositionError::Price`] if the merged quantity overflows.
    pub fn add_line(
        &mut self,
        flower: K,
        quantity: u32,
        unit_price: Price,
    ) -> Result<&FlowerLine<K>, CompositionError> {
        if quantity == 0 {
            return Err(CompositionError::ZeroQuantity);
        }

        if let Some(position) = self.lines.iter().position(|line| line.flower == flower) {
            let line = self
                .lines
                .get_mut(position)
                .ok_or(CompositionError::UnknownFlower)?;

            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(PriceError::Overflow)?;

            return self
                .lines
                .get(position)
                .ok_or(CompositionError::UnknownFlower);
        }

        self.lines.push(FlowerLine {
            flower,
            quantity,
            unit_price,
        });

        self.lines.last().ok_or(CompositionError::UnknownFlower)
    }

    /// Replaces the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// - [`CompositionError::ZeroQuantity`] if `quantity` is zero.
    /// - [`CompositionError::UnknownFlower`] if the flower has no line.
    pub fn set_quantity(&mut self, flower: K, quantity: u32) -> Result<(), CompositionError> {
        if quantity == 0 {
            return Err(CompositionError::ZeroQuantity);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.flower == flower)
            .ok_or(CompositionError::UnknownFlower)?;

        line.quantity = quantity;

        Ok(())
    }

    /// Removes the line for the given flower and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::UnknownFlower`] if the flower has no line.
    pub fn remove_line(&mut self, flower: K) -> Result<FlowerLine<K>, CompositionError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.flower == flower)
            .ok_or(CompositionError::UnknownFlower)?;

        Ok(self.lines.remove(position))
    }

    /// The flower lines, in insertion order.
    pub fn lines(&self) -> &[FlowerLine<K>] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the composition has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The derived bouquet price: Σ(unit price × quantity) over all lines.
    ///
    /// # Errors
    ///
    /// - [`CompositionError::Empty`] if there are no lines.
    /// - [`CompositionError::Price`] on arithmetic overflow.
    pub fn total(&self) -> Result<Price, CompositionError> {
        if self.lines.is_empty() {
            return Err(CompositionError::Empty);
        }

        let total = self
            .lines
            .iter()
            .try_fold(Price::ZERO, |acc, line| acc.checked_add(line.total()?))?;

        Ok(total)
    }

    /// The derived price as [`Money`] in the given currency.
    ///
    /// # Errors
    ///
    /// As [`Composition::total`], plus [`PriceError::OutOfRange`] if the
    /// total does not fit the monetary representation.
    pub fn total_money(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, CompositionError> {
        Ok(self.total()?.to_money(currency)?)
    }
}
