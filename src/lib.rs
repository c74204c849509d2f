//! # Matchplay
//!
//! A local pairwise match-play golf scorer. Every pair of players plays
//! head-to-head on every hole, with optional per-pair stroke handicaps and
//! 2x "turbo" holes; each hole is a zero-sum exchange across the roster.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, pair keys, strokes, results, history)
//! - **scoring**: Pure scoring engine (pairing, hole results, replay, rankings)
//! - **game**: Validated mutation boundary around the current round
//! - **stats**: Cross-round statistics (leaderboards, head-to-head records)
//! - **storage**: Append-only JSONL round history
//! - **config**: Configuration loading and validation

pub mod config;
pub mod game;
pub mod models;
pub mod scoring;
pub mod stats;
pub mod storage;

pub use models::*;
