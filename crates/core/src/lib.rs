//! Fleuron
//!
//! Fleuron is the domain core of a flower-shop commerce platform: checked
//! money arithmetic in minor units, the bouquet bill-of-materials model with
//! derived pricing, and the order-status workflow.

pub mod composition;
pub mod fixtures;
pub mod flowers;
pub mod prices;
pub mod status;

pub use composition::{Composition, CompositionError, FlowerLine};
pub use prices::{Price, PriceError};
pub use status::{OrderStatus, TransitionError};
