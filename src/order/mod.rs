//! Pure order helpers: the DM message and the delivery date.

pub mod delivery;
pub mod message;

pub use delivery::*;
pub use message::*;
