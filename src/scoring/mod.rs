//! Pure scoring engine: pair enumeration, hole results, aggregation,
//! replay, and rankings.
//!
//! Every function here is synchronous, stateless, and total over well-typed
//! inputs: the caller supplies the full relevant state slice and receives a
//! full replacement. Validation lives at the mutation boundary
//! ([`crate::game`]), never here.

mod engine;
mod pairs;
mod ranking;
mod replay;

pub use engine::*;
pub use pairs::*;
pub use ranking::*;
pub use replay::*;
