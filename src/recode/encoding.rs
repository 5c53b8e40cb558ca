//! Encoding lookup and name conversion
//!
//! A name is converted by encoding its characters with the source encoding and
//! decoding the resulting bytes with the target encoding. Both directions are
//! strict: nothing is replaced.
//!
//! Most encodings come from `encoding_rs`. ISO-8859-1 and US-ASCII are handled
//! here, because the WHATWG labels for them resolve to windows-1252.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::MAIN_SEPARATOR;

use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE};
use once_cell::sync::Lazy;

use crate::errors::{unknown_encoding_error, ConversionError, Result};

/// Labels of the byte-per-code-point Latin-1, keyed in lowercase dash form
const LATIN1_LABELS: &[&str] = &[
    "latin-1",
    "latin1",
    "latin",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "8859",
    "cp819",
    "ibm819",
    "iso-ir-100",
    "csisolatin1",
];

/// Labels of 7-bit ASCII, keyed in lowercase dash form
const ASCII_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "us",
    "646",
    "iso646-us",
    "ansi-x3.4-1968",
    "csascii",
];

/// Spellings accepted on top of the WHATWG labels, keyed in lowercase dash form
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("u8", "utf-8"),
        ("utf-16-le", "utf-16le"),
        ("utf-16-be", "utf-16be"),
        ("cp-1251", "windows-1251"),
        ("cp-1252", "windows-1252"),
        ("shift-jis", "shift_jis"),
        ("cp932", "shift_jis"),
        ("cp936", "gbk"),
        ("gb-2312", "gb2312"),
        ("cp949", "euc-kr"),
    ])
});

/// A character encoding names can be converted with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Charset {
    /// ISO-8859-1: every code point up to U+00FF is the byte of the same value
    Latin1,
    /// 7-bit ASCII, rejecting anything above 0x7F
    Ascii,
    /// Any other encoding known to `encoding_rs`
    Whatwg(&'static Encoding),
}

impl Charset {
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
            Charset::Whatwg(encoding) => encoding.name(),
        }
    }

    fn encode<'a>(&self, text: &'a str) -> std::result::Result<Cow<'a, [u8]>, ConversionError> {
        match *self {
            Charset::Latin1 => encode_single_byte(text, 0xFF, self.name()),
            Charset::Ascii => encode_single_byte(text, 0x7F, self.name()),
            Charset::Whatwg(encoding) => encode_strict(encoding, text),
        }
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<String, ConversionError> {
        match *self {
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    Err(ConversionError::Undecodable {
                        encoding: self.name(),
                    })
                }
            }
            Charset::Whatwg(encoding) => decode_strict(encoding, bytes),
        }
    }
}

/// Resolves an encoding label such as `latin-1`, `utf-8` or `cp1251`
///
/// Latin-1 and ASCII labels are matched first. Then WHATWG labels are tried,
/// then the same label with underscores as dashes, then a small table of
/// common spellings.
///
/// # Errors
/// Returns `Error::UnknownEncoding` for unknown labels and for labels that map
/// to the WHATWG replacement encoding
pub fn lookup_encoding(label: &str) -> Result<Charset> {
    let trimmed = label.trim();
    let normalized = trimmed.to_ascii_lowercase().replace('_', "-");

    if LATIN1_LABELS.contains(&normalized.as_str()) {
        return Ok(Charset::Latin1);
    }
    if ASCII_LABELS.contains(&normalized.as_str()) {
        return Ok(Charset::Ascii);
    }

    let encoding = Encoding::for_label(trimmed.as_bytes())
        .or_else(|| Encoding::for_label(normalized.as_bytes()))
        .or_else(|| {
            ALIASES
                .get(normalized.as_str())
                .and_then(|alias| Encoding::for_label(alias.as_bytes()))
        });

    match encoding {
        Some(encoding) if encoding != REPLACEMENT => Ok(Charset::Whatwg(encoding)),
        _ => Err(unknown_encoding_error(label)),
    }
}

/// Source and target encoding pair used for every name in a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Codec {
    source: Charset,
    target: Charset,
}

impl Codec {
    pub fn new(source: Charset, target: Charset) -> Self {
        Codec { source, target }
    }

    /// Builds a codec from two encoding labels
    pub fn from_labels(source: &str, target: &str) -> Result<Self> {
        Ok(Codec::new(lookup_encoding(source)?, lookup_encoding(target)?))
    }

    pub fn source(&self) -> Charset {
        self.source
    }

    pub fn target(&self) -> Charset {
        self.target
    }

    /// Codec converting in the opposite direction
    pub fn reversed(&self) -> Self {
        Codec::new(self.target, self.source)
    }

    /// Converts a name taken from the filesystem
    pub fn convert(&self, name: &OsStr) -> std::result::Result<String, ConversionError> {
        let name = name.to_str().ok_or(ConversionError::NotUnicode)?;
        self.convert_str(name)
    }

    /// Converts a name and checks it is still usable as a single path component
    pub fn convert_str(&self, name: &str) -> std::result::Result<String, ConversionError> {
        let bytes = self.source.encode(name)?;
        let converted = self.target.decode(&bytes)?;

        if !is_valid_component(&converted) {
            return Err(ConversionError::IllegalName { name: converted });
        }
        Ok(converted)
    }
}

fn encode_single_byte<'a>(
    text: &'a str,
    max: u32,
    encoding: &'static str,
) -> std::result::Result<Cow<'a, [u8]>, ConversionError> {
    text.chars()
        .map(|c| {
            u8::try_from(u32::from(c))
                .ok()
                .filter(|&b| u32::from(b) <= max)
                .ok_or(ConversionError::Unencodable { encoding })
        })
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map(Cow::Owned)
}

fn encode_strict<'a>(
    encoding: &'static Encoding,
    text: &'a str,
) -> std::result::Result<Cow<'a, [u8]>, ConversionError> {
    // encoding_rs only encodes UTF-16 as UTF-8, so code units are written by hand
    if encoding == UTF_16LE {
        return Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        ));
    }
    if encoding == UTF_16BE {
        return Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        ));
    }

    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(ConversionError::Unencodable {
            encoding: encoding.name(),
        });
    }
    Ok(bytes)
}

fn decode_strict(
    encoding: &'static Encoding,
    bytes: &[u8],
) -> std::result::Result<String, ConversionError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or(ConversionError::Undecodable {
            encoding: encoding.name(),
        })
}

fn is_valid_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains(MAIN_SEPARATOR)
        && !name.contains('\0')
}
