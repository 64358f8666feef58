//! Card containers: tableau columns and the stock.
//!
//! Cards move between containers by value. Each container owns its cards,
//! so a card can never be in two places at once.

pub mod column;
pub mod stock;

pub use column::Column;
pub use stock::Stock;
