//! Annotates leaderboard rows with a model-type label and symbol.
//!
//! For each row, the annotator looks for the model's eval request file in
//! the queue directory (`<dir>/<model>_eval_request_*.json`), reads the
//! self-reported `model_type` and `weight_type` fields, and writes two
//! display columns back into the row. Every failure degrades to one of
//! three terminal annotation states; nothing propagates to the caller:
//!
//! - no request file       -> blank label and symbol
//! - unreadable/unusable   -> `"Unknown, add type to request file!"` / `"?"`
//! - readable              -> raw `model_type` label + type symbol,
//!   with a delta marker appended for non-original weights

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Config;
use crate::models::ModelType;

/// Row column carrying the model identifier used for queue lookups
pub const MODEL_NAME_COL: &str = "model_name_for_query";

/// Output column for the human-readable type label
pub const MODEL_TYPE_COL: &str = "model_type";

/// Output column for the compact type symbol
pub const MODEL_TYPE_SYMBOL_COL: &str = "model_type_symbol";

/// Label written when a request file exists but its type can't be read
pub const UNKNOWN_TYPE_LABEL: &str = "Unknown, add type to request file!";

/// Symbol paired with [`UNKNOWN_TYPE_LABEL`]
pub const UNKNOWN_TYPE_SYMBOL: &str = "?";

/// Marker appended to the symbol for delta/LoRA-style weights
pub const DELTA_SYMBOL: &str = "\u{1F53A}"; // 🔺

/// A leaderboard row: caller-owned column name -> value mapping
pub type Row = serde_json::Map<String, Value>;

/// Terminal annotation state for one row
#[derive(Debug, PartialEq, Eq)]
enum Annotation {
    /// No request file in the queue; expected steady state for most rows
    Blank,
    /// Request file present but unreadable or missing a usable type
    Unknown,
    /// Self-reported type resolved to a label and symbol
    Labeled { label: String, symbol: String },
}

/// Annotates rows with model-type columns from eval request files
///
/// # Example
/// ```no_run
/// use leaderboard::enrich::{TypeAnnotator, MODEL_TYPE_COL};
/// use serde_json::json;
///
/// let annotator = TypeAnnotator::new("eval-queue");
///
/// let mut rows = vec![json!({"model_name_for_query": "foo/bar"})
///     .as_object()
///     .cloned()
///     .unwrap()];
/// annotator.annotate(&mut rows);
///
/// assert!(rows[0].contains_key(MODEL_TYPE_COL));
/// ```
#[derive(Debug, Clone)]
pub struct TypeAnnotator {
    queue_dir: PathBuf,
}

impl Default for TypeAnnotator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl TypeAnnotator {
    /// Create an annotator reading request files under `queue_dir`
    pub fn new(queue_dir: impl Into<PathBuf>) -> Self {
        Self {
            queue_dir: queue_dir.into(),
        }
    }

    /// Create an annotator from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.queue.dir.clone())
    }

    /// The queue directory this annotator scans
    pub fn queue_dir(&self) -> &Path {
        &self.queue_dir
    }

    /// Annotate every row in place, preserving order and count
    ///
    /// Rows without a `model_name_for_query` column get blank annotation
    /// columns. Never fails; see the module docs for the degradation
    /// states.
    pub fn annotate(&self, rows: &mut [Row]) {
        for row in rows.iter_mut() {
            let annotation = match row.get(MODEL_NAME_COL).and_then(Value::as_str) {
                Some(model_name) => self.resolve(model_name),
                None => {
                    tracing::warn!("leaderboard row has no {MODEL_NAME_COL} column");
                    Annotation::Blank
                }
            };

            let (label, symbol) = match annotation {
                Annotation::Blank => (String::new(), String::new()),
                Annotation::Unknown => {
                    (UNKNOWN_TYPE_LABEL.to_string(), UNKNOWN_TYPE_SYMBOL.to_string())
                }
                Annotation::Labeled { label, symbol } => (label, symbol),
            };

            row.insert(MODEL_TYPE_COL.to_string(), Value::String(label));
            row.insert(MODEL_TYPE_SYMBOL_COL.to_string(), Value::String(symbol));
        }
    }

    /// Resolve the annotation for one model from its request file
    fn resolve(&self, model_name: &str) -> Annotation {
        let pattern = self
            .queue_dir
            .join(format!("{model_name}_eval_request_*.json"));

        let mut paths = match glob::glob(&pattern.to_string_lossy()) {
            Ok(paths) => paths,
            Err(e) => {
                // Identifier produced an invalid pattern; treat as no file
                tracing::warn!("invalid request-file pattern for {model_name}: {e}");
                return Annotation::Blank;
            }
        };

        // Multiple request files for one model are possible (re-submissions);
        // take the first match in enumeration order.
        let path = match paths.find_map(|entry| entry.ok()) {
            Some(path) => path,
            None => {
                tracing::debug!("no eval request file for {model_name}");
                return Annotation::Blank;
            }
        };

        self.read_request(model_name, &path)
    }

    /// Extract label and symbol from a single request file
    fn read_request(&self, model_name: &str, path: &Path) -> Annotation {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "failed to read eval request file {} for {model_name}: {e}",
                    path.display()
                );
                return Annotation::Unknown;
            }
        };

        let request: Value = match serde_json::from_str(&raw) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(
                    "invalid JSON in eval request file {} for {model_name}: {e}",
                    path.display()
                );
                return Annotation::Unknown;
            }
        };

        // A missing or non-string weight_type downgrades to "not a delta"
        // rather than failing the row.
        let is_delta = request
            .get("weight_type")
            .and_then(Value::as_str)
            .map(|weight_type| weight_type != "Original")
            .unwrap_or(false);

        let label = match request.get("model_type").and_then(Value::as_str) {
            Some(label) => label,
            None => {
                tracing::warn!(
                    "eval request file {} for {model_name} has no model_type",
                    path.display()
                );
                return Annotation::Unknown;
            }
        };

        let symbol = match ModelType::from_name(label) {
            Some(ty) => ty.symbol(),
            None => {
                // Self-reported type outside the four canonical labels
                tracing::warn!("unrecognized model_type {label:?} for {model_name}");
                return Annotation::Unknown;
            }
        };

        let symbol = if is_delta {
            format!("{symbol}{DELTA_SYMBOL}")
        } else {
            symbol.to_string()
        };

        Annotation::Labeled {
            label: label.to_string(),
            symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_config_queue_dir() {
        let annotator = TypeAnnotator::default();
        assert_eq!(annotator.queue_dir(), Path::new("eval-queue"));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.queue.dir = PathBuf::from("/srv/requests");

        let annotator = TypeAnnotator::from_config(&config);
        assert_eq!(annotator.queue_dir(), Path::new("/srv/requests"));
    }

    #[test]
    fn test_resolve_missing_queue_dir_is_blank() {
        let annotator = TypeAnnotator::new("/nonexistent/eval-queue");
        assert_eq!(annotator.resolve("foo/bar"), Annotation::Blank);
    }
}
