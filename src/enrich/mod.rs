//! Row enrichment: annotate leaderboard rows with model-type metadata.

mod annotator;

pub use annotator::{
    Row, TypeAnnotator, DELTA_SYMBOL, MODEL_NAME_COL, MODEL_TYPE_COL, MODEL_TYPE_SYMBOL_COL,
    UNKNOWN_TYPE_LABEL, UNKNOWN_TYPE_SYMBOL,
};
