//! Detail table transformation: normalization, clearing, shaping, aggregation

pub mod aggregator;
pub mod keywords;
pub mod pipeline;
pub mod shaper;
pub mod text;

pub use keywords::KeywordSet;
pub use pipeline::DetailPipeline;
pub use text::normalize_text;
