// Public API exports
pub mod annotator;
pub mod error;
pub mod partitioner;
pub mod render;
pub mod report;
pub mod roster;

// Re-export main types for convenience
pub use error::MatchError;

pub use roster::{load_roster, Group, Person};

pub use partitioner::partition;

pub use annotator::{annotate, normalize, AnnotatedGroup, Multimap, TARGET_TOPICS};

pub use report::{read_report, to_json, write_report};

pub use render::render_html;
