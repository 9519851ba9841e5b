//! Model-type metadata.
//!
//! This module provides the training-provenance classification for
//! evaluated models:
//! - The closed [`ModelType`] enum with display names and symbols
//! - The curated compile-time table [`TYPE_METADATA`]
//! - The [`TypeRegistry`] lookup view over it
//!
//! # Example
//!
//! ```
//! use leaderboard::models::{ModelType, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//!
//! let ty = registry.lookup("meta-llama/Llama-2-7b-chat-hf").unwrap();
//! assert_eq!(ty, ModelType::RlTuned);
//! assert_eq!(ty.symbol(), "🟦");
//! assert_eq!(ty.to_display(" "), "🟦 RL-tuned");
//! ```

mod metadata;
mod model_type;
mod registry;

pub use metadata::TYPE_METADATA;
pub use model_type::{ModelInfo, ModelType};
pub use registry::TypeRegistry;
