//! Name conversion module
//!
//! This module contains the encoding pair used to reinterpret names and the
//! pass that renames entries on disk.

mod encoding;
mod renamer;

pub use encoding::{Charset, Codec, lookup_encoding};
pub use renamer::{
    ConsoleSink, Conversion, Notice, NoticeSink, PassStats, convert_entry, process_entries,
};
