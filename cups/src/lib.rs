//! Crab-cups style circular sequence engine.
//!
//! A [`Circle`] holds a single-cycle ordering of cup labels `1..=N` as a
//! successor array, so picking up a run of cups and splicing it back in
//! elsewhere costs the same whether the circle holds nine cups or a
//! million. [`game`] drives the fixed-iteration move loop against it and
//! [`extract`] reads the answers back out.

pub mod error;
pub mod extract;
pub mod game;
pub mod parse;
pub mod table;

pub use error::CircleError;
pub use game::{play, play_all};
pub use parse::parse_labels;
pub use table::Circle;

use fnv::FnvBuildHasher;

pub(crate) type HashSet<T> = std::collections::HashSet<T, FnvBuildHasher>;
