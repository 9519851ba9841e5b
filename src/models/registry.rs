//! Type registry for curated model-type lookups.
//!
//! The registry is a thin view over the compile-time [`TYPE_METADATA`]
//! table. It is the reference classification for models the maintainers
//! have reviewed, consulted independently of the self-reported type in
//! request files (which the row enricher reads instead).

use crate::models::metadata::TYPE_METADATA;
use crate::models::ModelType;

/// Immutable registry of curated model-type assignments
///
/// Backed entirely by a table compiled into the binary; construction is
/// free and there is no mutation API.
///
/// # Example
/// ```
/// use leaderboard::models::{ModelType, TypeRegistry};
///
/// let registry = TypeRegistry::new();
///
/// let ty = registry.lookup("meta-llama/Llama-2-7b-hf").unwrap();
/// assert_eq!(ty, ModelType::Pretrained);
///
/// assert!(registry.lookup("unknown/nonexistent-model").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeRegistry;

impl TypeRegistry {
    /// Create a registry view over the embedded table
    pub fn new() -> Self {
        Self
    }

    /// Look up the curated type for a model identifier
    ///
    /// Exact, case-sensitive match on the full identifier. Returns `None`
    /// for models not in the curated set.
    pub fn lookup(&self, model_id: &str) -> Option<ModelType> {
        TYPE_METADATA.get(model_id).copied()
    }

    /// Check whether a model has a curated classification
    pub fn contains(&self, model_id: &str) -> bool {
        TYPE_METADATA.contains_key(model_id)
    }

    /// Number of curated entries
    pub fn len(&self) -> usize {
        TYPE_METADATA.len()
    }

    /// Check if the table is empty (never true for the embedded table)
    pub fn is_empty(&self) -> bool {
        TYPE_METADATA.is_empty()
    }

    /// Iterate over all curated (identifier, type) pairs
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ModelType)> {
        TYPE_METADATA.entries().map(|(id, ty)| (*id, *ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 514);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_lookup_known_models() {
        let registry = TypeRegistry::new();

        assert_eq!(
            registry.lookup("meta-llama/Llama-2-7b-hf"),
            Some(ModelType::Pretrained)
        );
        assert_eq!(
            registry.lookup("meta-llama/Llama-2-7b-chat-hf"),
            Some(ModelType::RlTuned)
        );
        assert_eq!(
            registry.lookup("mosaicml/mpt-7b-instruct"),
            Some(ModelType::InstructionTuned)
        );
        assert_eq!(
            registry.lookup("TheBloke/koala-7B-HF"),
            Some(ModelType::FineTuned)
        );
        // Bare identifiers without an org prefix are valid keys too
        assert_eq!(registry.lookup("gpt2"), Some(ModelType::Pretrained));
    }

    #[test]
    fn test_lookup_unknown_model() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.lookup("unknown/nonexistent-model"), None);
        assert!(!registry.contains("unknown/nonexistent-model"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = TypeRegistry::new();
        assert!(registry.contains("meta-llama/Llama-2-7b-hf"));
        assert!(!registry.contains("meta-llama/llama-2-7b-hf"));
    }

    #[test]
    fn test_iter_covers_table() {
        let registry = TypeRegistry::new();
        let count = registry.iter().count();
        assert_eq!(count, registry.len());
        assert!(registry
            .iter()
            .any(|(id, ty)| id == "tiiuae/falcon-40b" && ty == ModelType::Pretrained));
    }
}
