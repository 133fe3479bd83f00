//! Kerning data: pairs and tracks.

use smol_str::SmolStr;

/// An adjustment applied when `first` is followed by `second`.
///
/// All four AFM spellings (`KP`, `KPH`, `KPX`, `KPY`) end up here; the axis
/// a spelling leaves out is 0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernPair {
    pub first: SmolStr,
    pub second: SmolStr,
    pub x: f64,
    pub y: f64,
}

impl KernPair {
    pub fn new(first: impl Into<SmolStr>, second: impl Into<SmolStr>, x: f64, y: f64) -> Self {
        KernPair {
            first: first.into(),
            second: second.into(),
            x,
            y,
        }
    }
}

/// Track kerning for one degree of tightness.
///
/// Between `min_point_size` and `max_point_size` the amount is interpolated
/// linearly from `min_kern` to `max_kern`; outside the range it is constant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackKern {
    pub degree: i32,
    pub min_point_size: f64,
    pub min_kern: f64,
    pub max_point_size: f64,
    pub max_kern: f64,
}

impl TrackKern {
    pub fn kern_at(&self, point_size: f64) -> f64 {
        if point_size <= self.min_point_size {
            return self.min_kern;
        }
        if point_size >= self.max_point_size {
            return self.max_kern;
        }
        let t = (point_size - self.min_point_size) / (self.max_point_size - self.min_point_size);
        self.min_kern + t * (self.max_kern - self.min_kern)
    }
}
