pub mod convert;
pub mod io;

// Re-export key types for easier usage
pub use convert::{
    Converter, HeaderLimits, LineClass, LineClassifier, MAX_HEADER_LEVEL, MIN_HEADER_LEVEL,
    convert, rewrite_links,
};
pub use io::*;
