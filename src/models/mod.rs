//! Core data models for the match-play scorer.

mod game;
mod handicap;
mod history;
mod ids;
mod pair;
mod player;
mod result;
mod strokes;

pub use game::*;
pub use handicap::*;
pub use history::*;
pub use ids::*;
pub use pair::*;
pub use player::*;
pub use result::*;
pub use strokes::*;
