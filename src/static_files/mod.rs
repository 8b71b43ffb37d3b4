//! Static file serving
//!
//! Maps request paths onto a document root and builds the response for each
//! request.

pub mod dispatcher;
pub mod resolver;

pub use dispatcher::Dispatcher;
pub use resolver::{DocumentRoot, ResolvedTarget};
