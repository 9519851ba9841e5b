//! # Leaderboard Core - Model-Type Metadata and Row Enrichment
//!
//! Metadata utilities for an LLM evaluation leaderboard: a curated
//! model-type registry and an enricher that annotates leaderboard rows
//! with a type label and display symbol.
//!
//! ## Features
//!
//! - **Type registry**: ~500 curated model-type assignments compiled into
//!   the binary as a `phf` map, with O(1) exact-match lookup
//! - **Row enrichment**: per-row lookup of `<model>_eval_request_*.json`
//!   in the eval queue directory, annotating rows in place
//! - **Silent degradation**: every per-row failure resolves to a visible
//!   annotation state instead of an error
//!
//! ## Data Flow
//!
//! ```text
//! scoring pipeline            leaderboard-core              display layer
//!       |                           |                             |
//!       |---- rows (mutable) ----->|                             |
//!       |                           |-- glob eval-queue/  ------->|
//!       |                           |   <model>_eval_request_*.json
//!       |                           |<- model_type, weight_type --|
//!       |<--- annotated rows ------|                             |
//! ```
//!
//! ## Annotation States
//!
//! | Request file state        | Label                                | Symbol    |
//! |---------------------------|--------------------------------------|-----------|
//! | None found                | `""`                                 | `""`      |
//! | Unreadable / no type      | `"Unknown, add type to request file!"` | `"?"`   |
//! | Readable, original weights| raw `model_type`                     | e.g. `🟢` |
//! | Readable, delta weights   | raw `model_type`                     | e.g. `🟢🔺` |
//!
//! ## Quick Start
//!
//! ### Registry Lookup
//!
//! ```rust
//! use leaderboard::{ModelType, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let ty = registry.lookup("meta-llama/Llama-2-7b-hf").unwrap();
//! assert_eq!(ty, ModelType::Pretrained);
//! assert_eq!(ty.symbol(), "🟢");
//! ```
//!
//! ### Row Enrichment
//!
//! ```rust,ignore
//! use leaderboard::{Config, TypeAnnotator};
//!
//! let annotator = TypeAnnotator::from_config(&Config::from_env());
//! annotator.annotate(&mut rows);
//! ```
//!
//! ## Modules
//!
//! - [`models`]: Model-type enum, curated table, and registry
//! - [`enrich`]: Row enrichment from eval request files
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod enrich;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use config::Config;
pub use enrich::{Row, TypeAnnotator};
pub use error::{LeaderboardError, Result};
pub use models::{ModelInfo, ModelType, TypeRegistry, TYPE_METADATA};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
