//! Draw-the-joker game engine. Keep this crate free of IO and platform concerns.

pub mod animation;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod layout;
pub mod pairing;
pub mod ranking;
pub mod render;
pub mod rng;
pub mod session;

pub use animation::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use layout::*;
pub use pairing::*;
pub use ranking::*;
pub use render::*;
pub use rng::*;
pub use session::*;
