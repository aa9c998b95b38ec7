//! Canvas-mirror - generate markdown mirror notes for canvas documents.
//!
//! # Overview
//!
//! Obsidian-style canvas files are JSON graphs of free-text cards and file
//! references; the host indexes them as opaque blobs. This crate renders a
//! plain-markdown "mirror" note per canvas so links, tags, and inline
//! properties become searchable:
//! - pattern grammars extract `[key::value]` properties, `#tags`, and links
//!   from card text
//! - file-reference nodes synthesize outgoing links, with canvas targets
//!   rewritten to their mirrors
//! - mirrors are fully regenerated each run, stamped with the source file's
//!   timestamps
//! - the destination folder can be toggled in and out of the host's ignore
//!   filters so mirrors never mirror themselves
//!
//! # Example
//!
//! ```no_run
//! use canvas_mirror::{GenerateSettings, Generator, Vault};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let settings = GenerateSettings {
//!     destination: "mirrors".to_string(),
//!     name_prefix: String::new(),
//! };
//! let report = Generator::new(&vault, settings).run().unwrap();
//! println!("wrote {} mirrors", report.written);
//! ```

pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod ignore;
pub mod mirror;
pub mod parser;
pub mod render;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use error::{MirrorError, Result};
pub use generate::{GenerateSettings, Generator, RunReport};
pub use types::*;
pub use vault::Vault;
