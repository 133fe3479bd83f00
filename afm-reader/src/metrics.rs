//! The parsed contents of an AFM file.

use std::collections::HashMap;
use std::io;

use smol_str::SmolStr;

use crate::bbox::BoundingBox;
use crate::error::Error;
use crate::glyph::{CharMetric, Composite};
use crate::kern::{KernPair, TrackKern};
use crate::parse::{Options, Parser};

/// Everything an AFM file says about a font.
///
/// Built up by the [`Parser`]; once returned it is only read, although the
/// setters remain available for callers that assemble metrics by hand.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    /// The version given after `StartFontMetrics`.
    pub afm_version: f64,
    metric_sets: i32,
    pub font_name: Option<String>,
    pub full_name: Option<String>,
    pub family_name: Option<String>,
    pub weight: Option<String>,
    pub font_bbox: Option<BoundingBox>,
    pub version: Option<String>,
    pub notice: Option<String>,
    pub encoding_scheme: Option<String>,
    pub mapping_scheme: i32,
    pub esc_char: i32,
    pub character_set: Option<String>,
    pub characters: i32,
    pub is_base_font: bool,
    pub v_vector: Option<[f64; 2]>,
    pub is_fixed_v: bool,
    pub cap_height: f64,
    pub x_height: f64,
    pub ascender: f64,
    pub descender: f64,
    pub std_hw: f64,
    pub std_vw: f64,
    pub underline_position: f64,
    pub underline_thickness: f64,
    pub italic_angle: f64,
    pub char_width: Option<[f64; 2]>,
    pub is_fixed_pitch: bool,
    comments: Vec<String>,
    char_metrics: Vec<CharMetric>,
    // glyph name -> index in char_metrics; later entries win
    #[cfg_attr(feature = "serde", serde(skip))]
    char_metric_index: HashMap<SmolStr, usize>,
    track_kerns: Vec<TrackKern>,
    composites: Vec<Composite>,
    kern_pairs: Vec<KernPair>,
    kern_pairs0: Vec<KernPair>,
    kern_pairs1: Vec<KernPair>,
}

impl FontMetrics {
    /// Parse a complete AFM document.
    pub fn parse<R: io::Read>(reader: R) -> Result<FontMetrics, Error> {
        Parser::new(reader).parse()
    }

    /// Parse the header and char metrics, stopping at the first key that
    /// isn't understood once the char metrics have been read.
    pub fn parse_reduced<R: io::Read>(reader: R) -> Result<FontMetrics, Error> {
        Parser::with_options(
            reader,
            Options {
                reduced_dataset: true,
            },
        )
        .parse()
    }

    /// Which writing directions have metrics: 0, 1 or 2 (both).
    pub fn metric_sets(&self) -> i32 {
        self.metric_sets
    }

    pub fn set_metric_sets(&mut self, metric_sets: i32) -> Result<(), Error> {
        if !(0..=2).contains(&metric_sets) {
            return Err(Error::MetricSetsOutOfRange(metric_sets));
        }
        self.metric_sets = metric_sets;
        Ok(())
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn char_metrics(&self) -> &[CharMetric] {
        &self.char_metrics
    }

    /// Replace all char metrics, rebuilding the lookup by name.
    pub fn set_char_metrics(&mut self, char_metrics: Vec<CharMetric>) {
        self.char_metric_index = char_metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| (metric.name.clone(), i))
            .collect();
        self.char_metrics = char_metrics;
    }

    pub fn add_char_metric(&mut self, metric: CharMetric) {
        self.char_metric_index
            .insert(metric.name.clone(), self.char_metrics.len());
        self.char_metrics.push(metric);
    }

    /// The metrics for a glyph name; if the name occurs more than once the
    /// last one wins.
    pub fn char_metric(&self, name: &str) -> Option<&CharMetric> {
        if self.char_metric_index.is_empty() {
            // not carried through serde
            return self.char_metrics.iter().rev().find(|m| m.name.as_str() == name);
        }
        self.char_metric_index
            .get(name)
            .and_then(|&i| self.char_metrics.get(i))
    }

    /// The x width of a glyph, 0 if the font doesn't have it.
    pub fn character_width(&self, name: &str) -> f64 {
        self.char_metric(name).map(|m| m.wx).unwrap_or_default()
    }

    /// The y width of a glyph, or the height of its bounding box if the y
    /// width is 0. 0 if the font doesn't have the glyph.
    pub fn character_height(&self, name: &str) -> f64 {
        let Some(metric) = self.char_metric(name) else {
            return 0.0;
        };
        if metric.wy != 0.0 {
            return metric.wy;
        }
        metric.bbox.map(|bbox| bbox.height()).unwrap_or_default()
    }

    /// The mean of all positive x widths.
    pub fn average_character_width(&self) -> f64 {
        let (total, count) = self
            .char_metrics
            .iter()
            .filter(|m| m.wx > 0.0)
            .fold((0.0, 0usize), |(total, count), m| (total + m.wx, count + 1));
        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    pub fn track_kerns(&self) -> &[TrackKern] {
        &self.track_kerns
    }

    pub fn add_track_kern(&mut self, track_kern: TrackKern) {
        self.track_kerns.push(track_kern);
    }

    pub fn composites(&self) -> &[Composite] {
        &self.composites
    }

    pub fn add_composite(&mut self, composite: Composite) {
        self.composites.push(composite);
    }

    /// Pairs from `StartKernPairs`.
    pub fn kern_pairs(&self) -> &[KernPair] {
        &self.kern_pairs
    }

    pub fn add_kern_pair(&mut self, pair: KernPair) {
        self.kern_pairs.push(pair);
    }

    /// Pairs from `StartKernPairs0`, for writing direction 0.
    pub fn kern_pairs0(&self) -> &[KernPair] {
        &self.kern_pairs0
    }

    pub fn add_kern_pair0(&mut self, pair: KernPair) {
        self.kern_pairs0.push(pair);
    }

    /// Pairs from `StartKernPairs1`, for writing direction 1.
    pub fn kern_pairs1(&self) -> &[KernPair] {
        &self.kern_pairs1
    }

    pub fn add_kern_pair1(&mut self, pair: KernPair) {
        self.kern_pairs1.push(pair);
    }
}
