//! Economy module hosting the friendship/money ledger.
pub mod ledger;
pub mod plugin;
pub mod systems;

pub use ledger::{InsufficientFunds, ResourceLedger};
pub use plugin::EconomyPlugin;
