//! Model-type classification data structures.
//!
//! This module defines the core types for training-provenance metadata:
//! - `ModelType`: Closed enum over the four categorical model types
//! - `ModelInfo`: Display name + emoji symbol pair for one type
//!
//! The four variants form a closed set; request files self-report one of
//! the canonical names and the display layer renders the matching symbol.

use serde::{Deserialize, Serialize};

/// Training-provenance category of an evaluated model
///
/// Serializes as the canonical display name (e.g. `"instruction-tuned"`),
/// which is the same string request files carry in their `model_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    /// Base model trained on raw corpora
    #[serde(rename = "pretrained")]
    Pretrained,
    /// Fine-tuned on domain or task data
    #[serde(rename = "fine-tuned")]
    FineTuned,
    /// Instruction/chat fine-tuned (SFT on instruction data)
    #[serde(rename = "instruction-tuned")]
    InstructionTuned,
    /// Tuned with reinforcement learning (RLHF, PPO, DPO)
    #[serde(rename = "RL-tuned")]
    RlTuned,
}

/// Display metadata for one model type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Canonical name (e.g. "pretrained")
    pub name: &'static str,
    /// Single emoji glyph shown on the leaderboard
    pub symbol: &'static str,
}

impl ModelType {
    /// Get the display metadata for this type
    pub fn info(&self) -> ModelInfo {
        match self {
            ModelType::Pretrained => ModelInfo {
                name: "pretrained",
                symbol: "\u{1F7E2}", // 🟢
            },
            ModelType::FineTuned => ModelInfo {
                name: "fine-tuned",
                symbol: "\u{1F536}", // 🔶
            },
            ModelType::InstructionTuned => ModelInfo {
                name: "instruction-tuned",
                symbol: "\u{2B55}", // ⭕
            },
            ModelType::RlTuned => ModelInfo {
                name: "RL-tuned",
                symbol: "\u{1F7E6}", // 🟦
            },
        }
    }

    /// Canonical name as used in request files and display
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Emoji symbol shown next to the model on the leaderboard
    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    /// Parse a canonical type name (exact match, case-sensitive)
    ///
    /// # Examples
    /// ```
    /// use leaderboard::models::ModelType;
    ///
    /// assert_eq!(ModelType::from_name("pretrained"), Some(ModelType::Pretrained));
    /// assert_eq!(ModelType::from_name("RL-tuned"), Some(ModelType::RlTuned));
    /// assert_eq!(ModelType::from_name("Pretrained"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pretrained" => Some(ModelType::Pretrained),
            "fine-tuned" => Some(ModelType::FineTuned),
            "instruction-tuned" => Some(ModelType::InstructionTuned),
            "RL-tuned" => Some(ModelType::RlTuned),
            _ => None,
        }
    }

    /// Format as `"<symbol><separator><name>"` for display widgets
    pub fn to_display(&self, separator: &str) -> String {
        let info = self.info();
        format!("{}{}{}", info.symbol, separator, info.name)
    }

    /// All four variants, in display order
    pub fn all() -> [ModelType; 4] {
        [
            ModelType::Pretrained,
            ModelType::FineTuned,
            ModelType::InstructionTuned,
            ModelType::RlTuned,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_symbol_pairs() {
        assert_eq!(ModelType::Pretrained.name(), "pretrained");
        assert_eq!(ModelType::Pretrained.symbol(), "🟢");
        assert_eq!(ModelType::FineTuned.symbol(), "🔶");
        assert_eq!(ModelType::InstructionTuned.symbol(), "⭕");
        assert_eq!(ModelType::RlTuned.symbol(), "🟦");
    }

    #[test]
    fn test_from_name_roundtrip() {
        for ty in ModelType::all() {
            assert_eq!(ModelType::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(ModelType::from_name(""), None);
        assert_eq!(ModelType::from_name("rl-tuned"), None);
        assert_eq!(ModelType::from_name("merged"), None);
    }

    #[test]
    fn test_to_display() {
        assert_eq!(ModelType::Pretrained.to_display(" "), "🟢 pretrained");
        assert_eq!(ModelType::RlTuned.to_display(""), "🟦RL-tuned");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ModelType::InstructionTuned).unwrap();
        assert_eq!(json, "\"instruction-tuned\"");

        let ty: ModelType = serde_json::from_str("\"RL-tuned\"").unwrap();
        assert_eq!(ty, ModelType::RlTuned);
    }
}
