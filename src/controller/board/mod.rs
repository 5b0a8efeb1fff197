pub mod decode;
pub mod fop;
pub mod http_handlers;

pub use decode::*;
pub use fop::*;
pub use http_handlers::*;
