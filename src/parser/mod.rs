//! Pattern grammars for canvas card text.
//!
//! Each grammar lives in its own module as a named, independently tested
//! pattern: properties (`[key::value]`), tags (`#tag/subtag`), and links
//! (wiki or markdown). This is deliberately shallow pattern matching, not a
//! markdown parser.

pub mod link;
pub mod matcher;
pub mod property;
pub mod tag;

pub use link::{extract_links, file_ref_link, resolve_links, rewrite_canvas_link, strip_links};
pub use matcher::extract_matches;
pub use property::extract_props;
pub use tag::extract_tags;
