//! Summary generator implementations.

mod template;

pub use template::{DEFAULT_MODEL_VERSION, TemplateSummaryGenerator};
