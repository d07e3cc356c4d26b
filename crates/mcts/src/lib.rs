//! Monte Carlo Tree Search for program synthesis.
//!
//! This crate searches a space of small symbolic programs (sequences of
//! typed primitives from `synth-core`) for one that maximizes a
//! user-supplied goal function, using MCTS with UCB1 selection.
//!
//! # Features
//!
//! - **Generic**: works with any [`synth_core::Goal`] and primitive set
//! - **UCB1 selection**: exploration/exploitation trade-off during tree
//!   descent, pure exploitation at extraction
//! - **Random rollouts**: uniformly random growth of candidate programs
//!   up to the configured length cap
//! - **Deterministic replays**: the RNG is injected, so a seeded
//!   generator reproduces a whole search
//!
//! # Example
//!
//! ```
//! use synth_mcts::{Search, SearchConfig};
//! use synth_mcts::problems::{arith_primitives, TargetGoal};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let primitives = arith_primitives();
//! let config = SearchConfig::new(5, 200);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut search = Search::new(config, &primitives, TargetGoal::new(6.0), rng);
//!
//! let result = search.run().expect("non-empty search");
//! println!("best program: {}", result.best_program.display(&primitives));
//! println!("score: {}", result.best_score);
//! ```

pub mod config;
mod node;
pub mod problems;
pub mod search;
mod tree;

pub use config::SearchConfig;
pub use search::{Action, Growth, Search, SearchResult};
