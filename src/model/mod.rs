pub mod config;
pub mod labels;
pub mod lenient;
pub mod result_row;
pub mod rich_text;
pub mod snapshot;

pub use config::*;
pub use labels::{LabelCatalog, Translate};
pub use result_row::*;
pub use rich_text::*;
pub use snapshot::*;
