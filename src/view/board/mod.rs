pub mod attempt_bar;
pub mod table;
pub mod template;
pub mod utils;

pub use attempt_bar::*;
pub use table::*;
pub use template::*;
pub use utils::*;
