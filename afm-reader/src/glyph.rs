//! Per-glyph records: char metrics and composites.

use smol_str::SmolStr;

use crate::bbox::BoundingBox;

/// The metrics of one character, from one line of the `StartCharMetrics` section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharMetric {
    /// The character code, -1 if the glyph is unencoded.
    pub code: i32,
    pub name: SmolStr,
    pub wx: f64,
    pub wy: f64,
    pub w0x: f64,
    pub w0y: f64,
    pub w1x: f64,
    pub w1y: f64,
    pub w: Option<[f64; 2]>,
    pub w0: Option<[f64; 2]>,
    pub w1: Option<[f64; 2]>,
    /// Vector from origin 0 to origin 1.
    pub vv: Option<[f64; 2]>,
    pub bbox: Option<BoundingBox>,
    pub ligatures: Vec<Ligature>,
}

impl Default for CharMetric {
    fn default() -> Self {
        CharMetric {
            code: -1,
            name: SmolStr::default(),
            wx: 0.0,
            wy: 0.0,
            w0x: 0.0,
            w0y: 0.0,
            w1x: 0.0,
            w1y: 0.0,
            w: None,
            w0: None,
            w1: None,
            vv: None,
            bbox: None,
            ligatures: Vec::new(),
        }
    }
}

impl CharMetric {
    pub fn is_encoded(&self) -> bool {
        self.code >= 0
    }

    /// The ligature formed when this glyph is followed by `successor`.
    pub fn ligature_with(&self, successor: &str) -> Option<&SmolStr> {
        self.ligatures
            .iter()
            .find(|lig| lig.successor.as_str() == successor)
            .map(|lig| &lig.ligature)
    }
}

/// `L successor ligature`: this glyph followed by `successor` forms `ligature`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ligature {
    pub successor: SmolStr,
    pub ligature: SmolStr,
}

/// A glyph assembled from other glyphs, from the `StartComposites` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composite {
    pub name: SmolStr,
    pub parts: Vec<CompositePart>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositePart {
    pub name: SmolStr,
    pub x_displacement: i32,
    pub y_displacement: i32,
}
