//! Resolve `#pragma use` directives in shader sources into a single,
//! dependency-ordered list of files, suitable for concatenation before
//! compilation.
//!
//! This is a minimal preprocessor: file inclusion is the only feature. There
//! are no macros and no conditionals. A directive occupies a line of its own:
//!
//! ```glsl
//! #pragma use "lib/noise.glsl"
//! ```
//!
//! The quoted path is resolved relative to the directory of the file that
//! contains the directive, unless it is already absolute. Keywords are
//! matched case-insensitively.
//!
//! [`includes`] walks the directives of one or more root files depth first
//! and returns every file exactly once, each after all of the files it uses:
//!
//! ```no_run
//! let files = pragma_includes::includes(["shaders/main.frag"])?;
//! let text = pragma_includes::concatenate(&files)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A directive naming a file that is already resolved, or that is still
//! having its own directives resolved, is skipped. Diamond dependencies are
//! therefore emitted once, and cycles terminate silently instead of being
//! reported.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

pub mod concat;
pub mod error;
pub mod io;
pub mod path;
pub mod resolve;
pub mod scan;
pub mod source;

pub use concat::concatenate;
pub use error::{Error, Result};
pub use resolve::{includes, includes_of};
pub use source::{Source, SourceBuf, SourceFile};
