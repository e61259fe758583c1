//! Headless driver that plays whole draw-the-joker games on virtual time and checks
//! the table invariants after every tick.

mod config;
mod error;
mod policy;
mod runner;
mod simulator;
mod stats;
mod trace;

pub use config::*;
pub use error::*;
pub use policy::*;
pub use runner::*;
pub use simulator::*;
pub use stats::*;
pub use trace::*;
