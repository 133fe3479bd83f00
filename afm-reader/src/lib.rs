//! Reading Adobe Font Metrics (AFM) files.
//!
//! An AFM file is a line-oriented text description of a Type 1 font's
//! metrics: global font information, per-character widths and bounding
//! boxes, kerning and composite characters. [`FontMetrics::parse`] reads a
//! whole document; [`FontMetrics::parse_reduced`] reads just enough for
//! character widths and tolerates trailing junk.
//!
//! ```
//! use afm_reader::FontMetrics;
//!
//! let afm = "StartFontMetrics 4.1\n\
//!            FontName Demo\n\
//!            StartCharMetrics 1\n\
//!            C 32 ; WX 250 ; N space ; B 0 0 0 0 ;\n\
//!            EndCharMetrics\n\
//!            EndFontMetrics\n";
//! let metrics = FontMetrics::parse(afm.as_bytes()).unwrap();
//! assert_eq!(metrics.font_name.as_deref(), Some("Demo"));
//! assert_eq!(metrics.character_width("space"), 250.0);
//! ```

mod bbox;
mod convert;
pub mod error;
mod glyph;
mod kern;
mod keyword;
mod lexer;
mod metrics;
mod parse;
mod tokenizer;

pub use bbox::BoundingBox;
pub use convert::decode_hex_string;
pub use error::{Error, ErrorKind};
pub use glyph::{CharMetric, Composite, CompositePart, Ligature};
pub use kern::{KernPair, TrackKern};
pub use metrics::FontMetrics;
pub use parse::{Options, Parser};
pub use tokenizer::{Delimiters, LineTokenizer};
