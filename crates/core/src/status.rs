//! Order status workflow
//!
//! A finite set of order states with an explicit transition allow-list:
//! forward progress `new → processing → delivering → completed`, a side
//! exit to `cancelled` from any non-terminal state, and idempotent
//! re-application of the current status. Anything else requires the
//! caller's `force` flag, which exists as an admin override.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by the shop.
    New,

    /// Being assembled.
    Processing,

    /// Out for delivery.
    Delivering,

    /// Delivered; terminal.
    Completed,

    /// Cancelled; terminal.
    Cancelled,
}

/// The status could not be parsed from its wire form.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status {0:?}")]
pub struct ParseOrderStatusError(pub String);

/// A transition was refused by the allow-list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("transition from {from} to {to} is not allowed")]
pub struct TransitionError {
    /// The order's current status.
    pub from: OrderStatus,

    /// The refused target status.
    pub to: OrderStatus,
}

impl OrderStatus {
    /// All statuses, in forward-progress order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Processing,
        Self::Delivering,
        Self::Completed,
        Self::Cancelled,
    ];

    /// The wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Delivering => "delivering",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether no further transitions leave this status without `force`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the allow-list permits moving to `next` without `force`.
    #[must_use]
    pub const fn allows(self, next: Self) -> bool {
        if self as u8 == next as u8 {
            // Idempotent re-application of the current status.
            return true;
        }

        matches!(
            (self, next),
            (Self::New, Self::Processing)
                | (Self::Processing, Self::Delivering)
                | (Self::Delivering, Self::Completed)
                | (Self::New | Self::Processing | Self::Delivering, Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new" => Ok(Self::New),
            "processing" => Ok(Self::Processing),
            "delivering" => Ok(Self::Delivering),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_owned())),
        }
    }
}

/// Applies the state machine to a requested status change.
///
/// With `force` the allow-list is bypassed entirely, which restores the
/// unconstrained any-to-any behavior as an explicit admin decision.
///
/// # Errors
///
/// Returns [`TransitionError`] when the allow-list refuses the change and
/// `force` is not set.
pub const fn transition(
    current: OrderStatus,
    next: OrderStatus,
    force: bool,
) -> Result<OrderStatus, TransitionError> {
    if force || current.allows(next) {
        Ok(next)
    } else {
        Err(TransitionError {
            from: current,
            to: next,
        })
    }
}
