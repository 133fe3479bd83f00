//! Walking the AFM grammar.
//!
//! The [`Parser`] pulls tokens from the [`Lexer`] and interprets them with
//! the tables in [`keyword`](crate::keyword). The top level is a flat list of
//! keys; `StartCharMetrics`, `StartKernData` (itself holding track kern and
//! kern pair sections) and `StartComposites` open sections that must be
//! closed by their `End*` keyword after the declared number of records.

use std::io::{self, BufReader};

use log::{debug, trace, warn};
use smol_str::SmolStr;

use crate::bbox::BoundingBox;
use crate::convert::{decode_hex_string, parse_bool, parse_float, parse_hex_int, parse_int};
use crate::error::Error;
use crate::glyph::{CharMetric, Composite, CompositePart, Ligature};
use crate::kern::{KernPair, TrackKern};
use crate::keyword::{
    CharMetricKey, Key, KernDataKey, KernPairKey, KernPairSet, CC, END_CHAR_METRICS,
    END_COMPOSITES, END_FONT_METRICS, END_KERN_DATA, END_KERN_PAIRS, END_TRACK_KERN, PCC,
    START_FONT_METRICS, TRACK_KERN,
};
use crate::lexer::Lexer;
use crate::metrics::FontMetrics;
use crate::tokenizer::{Delimiters, LineTokenizer};

/// How lenient a [`Parser`] is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Only read the header and the char metrics.
    ///
    /// Kern data and composites are not read, and the first key that isn't
    /// understood after the char metrics ends the parse successfully instead
    /// of failing it. Useful for damaged files when only widths are needed.
    pub reduced_dataset: bool,
}

/// Reads one AFM document from a byte source.
///
/// The source is read strictly forward, once; a parser is used up by
/// [`Parser::parse`].
pub struct Parser<R> {
    lexer: Lexer<BufReader<R>>,
    options: Options,
}

impl<R: io::Read> Parser<R> {
    pub fn new(reader: R) -> Parser<R> {
        Parser::with_options(reader, Options::default())
    }

    pub fn with_options(reader: R, options: Options) -> Parser<R> {
        Parser {
            lexer: Lexer::new(BufReader::new(reader)),
            options,
        }
    }

    pub fn parse(mut self) -> Result<FontMetrics, Error> {
        let mut metrics = FontMetrics::default();
        let header = self.expect_token(START_FONT_METRICS)?;
        if header != START_FONT_METRICS {
            return Err(Error::BadHeader(header));
        }
        metrics.afm_version = self.read_float()?;

        let mut char_metrics_read = false;
        loop {
            let word = self.expect_token(END_FONT_METRICS)?;
            trace!("{word}");
            let key = match Key::from_keyword(&word) {
                Some(Key::StartKernData | Key::StartComposites) if self.options.reduced_dataset => {
                    None
                }
                key => key,
            };
            let Some(key) = key else {
                if self.options.reduced_dataset && char_metrics_read {
                    warn!("Reduced dataset: stopping at '{word}'");
                    break;
                }
                return Err(Error::UnknownKey(word));
            };
            match key {
                Key::EndFontMetrics => break,
                Key::Comment => {
                    let comment = self.read_text()?;
                    metrics.add_comment(comment);
                }
                Key::Text(field) => *field.target(&mut metrics) = Some(self.read_text()?),
                Key::Integer(field) => *field.target(&mut metrics) = self.read_int()?,
                Key::Float(field) => *field.target(&mut metrics) = self.read_float()?,
                Key::Bool(field) => *field.target(&mut metrics) = self.read_bool()?,
                Key::Pair(field) => *field.target(&mut metrics) = Some(self.read_pair()?),
                Key::FontBBox => metrics.font_bbox = Some(self.read_bbox()?),
                Key::MetricsSets => {
                    let metric_sets = self.read_int()?;
                    metrics.set_metric_sets(metric_sets)?;
                }
                Key::StartCharMetrics => {
                    let char_metrics = self.parse_char_metrics()?;
                    metrics.set_char_metrics(char_metrics);
                    char_metrics_read = true;
                }
                Key::StartKernData => self.parse_kern_data(&mut metrics)?,
                Key::StartComposites => {
                    for composite in self.parse_composites()? {
                        metrics.add_composite(composite);
                    }
                }
            }
        }

        debug!(
            "Parsed {:?}: {} char metrics, {} kern pairs, {} composites",
            metrics.font_name.as_deref().unwrap_or_default(),
            metrics.char_metrics().len(),
            metrics.kern_pairs().len() + metrics.kern_pairs0().len() + metrics.kern_pairs1().len(),
            metrics.composites().len()
        );
        Ok(metrics)
    }

    fn parse_char_metrics(&mut self) -> Result<Vec<CharMetric>, Error> {
        let count = self.read_count()?;
        debug!("Reading {count} char metrics");
        let mut char_metrics = Vec::new();
        for _ in 0..count {
            let line = self.expect_line("char metrics")?;
            let metric = parse_char_metric(&line).map_err(|e| e.in_line(&line))?;
            char_metrics.push(metric);
        }
        self.expect_keyword(END_CHAR_METRICS)?;
        Ok(char_metrics)
    }

    fn parse_kern_data(&mut self, metrics: &mut FontMetrics) -> Result<(), Error> {
        loop {
            let word = self.expect_token(END_KERN_DATA)?;
            let Some(key) = KernDataKey::from_keyword(&word) else {
                return Err(Error::UnknownKernData(word));
            };
            match key {
                KernDataKey::EndKernData => return Ok(()),
                KernDataKey::StartTrackKern => {
                    let count = self.read_count()?;
                    debug!("Reading {count} track kerns");
                    for _ in 0..count {
                        let track_kern = self.parse_track_kern()?;
                        metrics.add_track_kern(track_kern);
                    }
                    self.expect_keyword(END_TRACK_KERN)?;
                }
                KernDataKey::StartKernPairs(set) => {
                    let count = self.read_count()?;
                    debug!("Reading {count} kern pairs into {set:?}");
                    for _ in 0..count {
                        let pair = self.parse_kern_pair()?;
                        match set {
                            KernPairSet::Default => metrics.add_kern_pair(pair),
                            KernPairSet::Direction0 => metrics.add_kern_pair0(pair),
                            KernPairSet::Direction1 => metrics.add_kern_pair1(pair),
                        }
                    }
                    self.expect_keyword(END_KERN_PAIRS)?;
                }
            }
        }
    }

    /// `[TrackKern] degree min-ptsize min-kern max-ptsize max-kern`
    fn parse_track_kern(&mut self) -> Result<TrackKern, Error> {
        let mut degree = self.expect_token("track kern degree")?;
        if degree == TRACK_KERN {
            degree = self.expect_token("track kern degree")?;
        }
        Ok(TrackKern {
            degree: parse_int(&degree)?,
            min_point_size: self.read_float()?,
            min_kern: self.read_float()?,
            max_point_size: self.read_float()?,
            max_kern: self.read_float()?,
        })
    }

    fn parse_kern_pair(&mut self) -> Result<KernPair, Error> {
        let word = self.expect_token("kern pair")?;
        let Some(key) = KernPairKey::from_keyword(&word) else {
            return Err(Error::UnknownKernPair(word));
        };
        let first = self.expect_token("glyph name")?;
        let second = self.expect_token("glyph name")?;
        let (first, second) = match key {
            KernPairKey::Kph => (decode_hex_string(&first)?, decode_hex_string(&second)?),
            _ => (first, second),
        };
        let (x, y) = match key {
            KernPairKey::Kp | KernPairKey::Kph => (self.read_float()?, self.read_float()?),
            KernPairKey::Kpx => (self.read_float()?, 0.0),
            KernPairKey::Kpy => (0.0, self.read_float()?),
        };
        Ok(KernPair::new(first, second, x, y))
    }

    fn parse_composites(&mut self) -> Result<Vec<Composite>, Error> {
        let count = self.read_count()?;
        debug!("Reading {count} composites");
        let mut composites = Vec::new();
        for _ in 0..count {
            let line = self.expect_line("composite")?;
            let composite = parse_composite(&line).map_err(|e| e.in_line(&line))?;
            composites.push(composite);
        }
        self.expect_keyword(END_COMPOSITES)?;
        Ok(composites)
    }

    fn expect_token(&mut self, expected: &'static str) -> Result<String, Error> {
        self.lexer
            .next_token()?
            .ok_or(Error::UnexpectedEof(expected))
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<String, Error> {
        self.lexer.read_line()?.ok_or(Error::UnexpectedEof(expected))
    }

    fn expect_keyword(&mut self, expected: &'static str) -> Result<(), Error> {
        let found = self.expect_token(expected)?;
        if found != expected {
            return Err(Error::ExpectedKeyword { expected, found });
        }
        Ok(())
    }

    /// Free text up to the end of the line; may start on the next line.
    fn read_text(&mut self) -> Result<String, Error> {
        self.expect_line("text")
    }

    fn read_int(&mut self) -> Result<i32, Error> {
        parse_int(&self.expect_token("integer")?)
    }

    /// A record count; negative counts read nothing.
    fn read_count(&mut self) -> Result<usize, Error> {
        Ok(usize::try_from(self.read_int()?).unwrap_or(0))
    }

    fn read_float(&mut self) -> Result<f64, Error> {
        parse_float(&self.expect_token("number")?)
    }

    fn read_bool(&mut self) -> Result<bool, Error> {
        parse_bool(&self.expect_token("boolean")?)
    }

    fn read_pair(&mut self) -> Result<[f64; 2], Error> {
        Ok([self.read_float()?, self.read_float()?])
    }

    fn read_bbox(&mut self) -> Result<BoundingBox, Error> {
        Ok(BoundingBox::new(
            self.read_float()?,
            self.read_float()?,
            self.read_float()?,
            self.read_float()?,
        ))
    }
}

/// One line of the char metrics section, such as
/// `C 102 ; WX 333 ; N f ; B 20 0 383 683 ; L i fi ; L l fl ;`
fn parse_char_metric(line: &str) -> Result<CharMetric, Error> {
    let mut tokens = LineTokenizer::with_delimiters(line, Delimiters::CHAR_METRICS);
    let mut metric = CharMetric::default();
    while let Some(word) = tokens.next() {
        let Some(key) = CharMetricKey::from_keyword(word) else {
            return Err(Error::UnknownCharMetric(word.to_string()));
        };
        let keyword = key.keyword();
        match key {
            CharMetricKey::Code => metric.code = parse_int(next_value(&mut tokens, keyword)?)?,
            CharMetricKey::HexCode => {
                metric.code = parse_hex_int(next_value(&mut tokens, keyword)?)?
            }
            CharMetricKey::Float(field) => {
                *field.target(&mut metric) = parse_float(next_value(&mut tokens, keyword)?)?
            }
            CharMetricKey::Pair(field) => {
                let x = parse_float(next_value(&mut tokens, keyword)?)?;
                let y = parse_float(next_value(&mut tokens, keyword)?)?;
                *field.target(&mut metric) = Some([x, y]);
            }
            CharMetricKey::Name => metric.name = next_value(&mut tokens, keyword)?.into(),
            CharMetricKey::BBox => {
                let mut numbers = [0.0; 4];
                for number in numbers.iter_mut() {
                    *number = parse_float(next_value(&mut tokens, keyword)?)?;
                }
                metric.bbox = Some(BoundingBox::from_slice(&numbers)?);
            }
            CharMetricKey::Ligature => {
                let successor: SmolStr = next_value(&mut tokens, keyword)?.into();
                let ligature: SmolStr = next_value(&mut tokens, keyword)?.into();
                metric.ligatures.push(Ligature {
                    successor,
                    ligature,
                });
            }
        }
        expect_semicolon(&mut tokens, keyword)?;
    }
    Ok(metric)
}

/// One line of the composites section, such as
/// `CC Aacute 2 ; PCC A 0 0 ; PCC acute 194 214 ;`
fn parse_composite(line: &str) -> Result<Composite, Error> {
    let mut tokens = LineTokenizer::with_delimiters(line, Delimiters::COMPOSITES);
    expect_word(&mut tokens, CC)?;
    let name = next_value(&mut tokens, CC)?.into();
    let part_count = parse_int(next_value(&mut tokens, CC)?)?;
    let mut parts = Vec::new();
    for _ in 0..part_count {
        expect_word(&mut tokens, PCC)?;
        let name = next_value(&mut tokens, PCC)?.into();
        let x_displacement = parse_int(next_value(&mut tokens, PCC)?)?;
        let y_displacement = parse_int(next_value(&mut tokens, PCC)?)?;
        parts.push(CompositePart {
            name,
            x_displacement,
            y_displacement,
        });
    }
    Ok(Composite { name, parts })
}

/// The value token after `keyword`; a `;` here means the value is missing.
fn next_value<'a>(
    tokens: &mut LineTokenizer<'a>,
    keyword: &'static str,
) -> Result<&'a str, Error> {
    match tokens.next() {
        Some(";") | None => Err(Error::MissingValue(keyword)),
        Some(value) => Ok(value),
    }
}

fn expect_semicolon(tokens: &mut LineTokenizer, key: &'static str) -> Result<(), Error> {
    match tokens.next() {
        Some(";") => Ok(()),
        Some(found) => Err(Error::ExpectedSemicolon {
            key,
            found: found.to_string(),
        }),
        None => Err(Error::MissingSemicolon(key)),
    }
}

fn expect_word(tokens: &mut LineTokenizer, expected: &'static str) -> Result<(), Error> {
    let found = tokens.next().unwrap_or_default();
    if found != expected {
        return Err(Error::ExpectedKeyword {
            expected,
            found: found.to_string(),
        });
    }
    Ok(())
}
