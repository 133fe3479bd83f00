//! The AFM keyword tables.
//!
//! Each keyword maps to a variant saying what kind of value follows it, and
//! (for plain fields) which field that value lands in. Adding a keyword is a
//! new row in `from_keyword` and, if it is a new field, a new arm in `target`.

use crate::glyph::CharMetric;
use crate::metrics::FontMetrics;

pub(crate) const START_FONT_METRICS: &str = "StartFontMetrics";
pub(crate) const END_FONT_METRICS: &str = "EndFontMetrics";
pub(crate) const END_CHAR_METRICS: &str = "EndCharMetrics";
pub(crate) const END_KERN_DATA: &str = "EndKernData";
pub(crate) const END_TRACK_KERN: &str = "EndTrackKern";
pub(crate) const END_KERN_PAIRS: &str = "EndKernPairs";
pub(crate) const END_COMPOSITES: &str = "EndComposites";
pub(crate) const TRACK_KERN: &str = "TrackKern";
pub(crate) const CC: &str = "CC";
pub(crate) const PCC: &str = "PCC";

/// A keyword in the top level of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Key {
    Comment,
    /// The rest of the line.
    Text(TextField),
    Integer(IntField),
    Float(FloatField),
    Bool(BoolField),
    /// Two floats.
    Pair(PairField),
    FontBBox,
    MetricsSets,
    StartCharMetrics,
    StartKernData,
    StartComposites,
    EndFontMetrics,
}

impl Key {
    pub(crate) fn from_keyword(word: &str) -> Option<Key> {
        let key = match word {
            "Comment" => Key::Comment,
            "FontName" => Key::Text(TextField::FontName),
            "FullName" => Key::Text(TextField::FullName),
            "FamilyName" => Key::Text(TextField::FamilyName),
            "Weight" => Key::Text(TextField::Weight),
            "Version" => Key::Text(TextField::Version),
            "Notice" => Key::Text(TextField::Notice),
            "EncodingScheme" => Key::Text(TextField::EncodingScheme),
            "CharacterSet" => Key::Text(TextField::CharacterSet),
            "MappingScheme" => Key::Integer(IntField::MappingScheme),
            "EscChar" => Key::Integer(IntField::EscChar),
            "Characters" => Key::Integer(IntField::Characters),
            "IsBaseFont" => Key::Bool(BoolField::IsBaseFont),
            "IsFixedV" => Key::Bool(BoolField::IsFixedV),
            "IsFixedPitch" => Key::Bool(BoolField::IsFixedPitch),
            "VVector" => Key::Pair(PairField::VVector),
            "CharWidth" => Key::Pair(PairField::CharWidth),
            "CapHeight" => Key::Float(FloatField::CapHeight),
            "XHeight" => Key::Float(FloatField::XHeight),
            "Ascender" => Key::Float(FloatField::Ascender),
            "Descender" => Key::Float(FloatField::Descender),
            "StdHW" => Key::Float(FloatField::StdHW),
            "StdVW" => Key::Float(FloatField::StdVW),
            "UnderlinePosition" => Key::Float(FloatField::UnderlinePosition),
            "UnderlineThickness" => Key::Float(FloatField::UnderlineThickness),
            "ItalicAngle" => Key::Float(FloatField::ItalicAngle),
            "FontBBox" => Key::FontBBox,
            "MetricsSets" => Key::MetricsSets,
            "StartCharMetrics" => Key::StartCharMetrics,
            "StartKernData" => Key::StartKernData,
            "StartComposites" => Key::StartComposites,
            END_FONT_METRICS => Key::EndFontMetrics,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextField {
    FontName,
    FullName,
    FamilyName,
    Weight,
    Version,
    Notice,
    EncodingScheme,
    CharacterSet,
}

impl TextField {
    pub(crate) fn target(self, metrics: &mut FontMetrics) -> &mut Option<String> {
        match self {
            TextField::FontName => &mut metrics.font_name,
            TextField::FullName => &mut metrics.full_name,
            TextField::FamilyName => &mut metrics.family_name,
            TextField::Weight => &mut metrics.weight,
            TextField::Version => &mut metrics.version,
            TextField::Notice => &mut metrics.notice,
            TextField::EncodingScheme => &mut metrics.encoding_scheme,
            TextField::CharacterSet => &mut metrics.character_set,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntField {
    MappingScheme,
    EscChar,
    Characters,
}

impl IntField {
    pub(crate) fn target(self, metrics: &mut FontMetrics) -> &mut i32 {
        match self {
            IntField::MappingScheme => &mut metrics.mapping_scheme,
            IntField::EscChar => &mut metrics.esc_char,
            IntField::Characters => &mut metrics.characters,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FloatField {
    CapHeight,
    XHeight,
    Ascender,
    Descender,
    StdHW,
    StdVW,
    UnderlinePosition,
    UnderlineThickness,
    ItalicAngle,
}

impl FloatField {
    pub(crate) fn target(self, metrics: &mut FontMetrics) -> &mut f64 {
        match self {
            FloatField::CapHeight => &mut metrics.cap_height,
            FloatField::XHeight => &mut metrics.x_height,
            FloatField::Ascender => &mut metrics.ascender,
            FloatField::Descender => &mut metrics.descender,
            FloatField::StdHW => &mut metrics.std_hw,
            FloatField::StdVW => &mut metrics.std_vw,
            FloatField::UnderlinePosition => &mut metrics.underline_position,
            FloatField::UnderlineThickness => &mut metrics.underline_thickness,
            FloatField::ItalicAngle => &mut metrics.italic_angle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoolField {
    IsBaseFont,
    IsFixedV,
    IsFixedPitch,
}

impl BoolField {
    pub(crate) fn target(self, metrics: &mut FontMetrics) -> &mut bool {
        match self {
            BoolField::IsBaseFont => &mut metrics.is_base_font,
            BoolField::IsFixedV => &mut metrics.is_fixed_v,
            BoolField::IsFixedPitch => &mut metrics.is_fixed_pitch,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairField {
    VVector,
    CharWidth,
}

impl PairField {
    pub(crate) fn target(self, metrics: &mut FontMetrics) -> &mut Option<[f64; 2]> {
        match self {
            PairField::VVector => &mut metrics.v_vector,
            PairField::CharWidth => &mut metrics.char_width,
        }
    }
}

/// A sub-section of `StartKernData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KernDataKey {
    StartTrackKern,
    /// `StartKernPairs`, `StartKernPairs0` or `StartKernPairs1`.
    StartKernPairs(KernPairSet),
    EndKernData,
}

impl KernDataKey {
    pub(crate) fn from_keyword(word: &str) -> Option<KernDataKey> {
        let key = match word {
            "StartTrackKern" => KernDataKey::StartTrackKern,
            "StartKernPairs" => KernDataKey::StartKernPairs(KernPairSet::Default),
            "StartKernPairs0" => KernDataKey::StartKernPairs(KernPairSet::Direction0),
            "StartKernPairs1" => KernDataKey::StartKernPairs(KernPairSet::Direction1),
            END_KERN_DATA => KernDataKey::EndKernData,
            _ => return None,
        };
        Some(key)
    }
}

/// Which of the three kern pair lists a section fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KernPairSet {
    Default,
    Direction0,
    Direction1,
}

/// The leading keyword of a kern pair record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KernPairKey {
    /// `KP name name x y`
    Kp,
    /// `KPH <hex> <hex> x y`
    Kph,
    /// `KPX name name x`
    Kpx,
    /// `KPY name name y`
    Kpy,
}

impl KernPairKey {
    pub(crate) fn from_keyword(word: &str) -> Option<KernPairKey> {
        match word {
            "KP" => Some(KernPairKey::Kp),
            "KPH" => Some(KernPairKey::Kph),
            "KPX" => Some(KernPairKey::Kpx),
            "KPY" => Some(KernPairKey::Kpy),
            _ => None,
        }
    }
}

/// A field keyword in a char metrics line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharMetricKey {
    /// `C`, decimal code.
    Code,
    /// `CH`, hex code.
    HexCode,
    Float(CharFloatField),
    Pair(CharPairField),
    /// `N`
    Name,
    /// `B`
    BBox,
    /// `L`
    Ligature,
}

impl CharMetricKey {
    pub(crate) fn from_keyword(word: &str) -> Option<CharMetricKey> {
        let key = match word {
            "C" => CharMetricKey::Code,
            "CH" => CharMetricKey::HexCode,
            "WX" => CharMetricKey::Float(CharFloatField::Wx),
            "W0X" => CharMetricKey::Float(CharFloatField::W0x),
            "W1X" => CharMetricKey::Float(CharFloatField::W1x),
            "WY" => CharMetricKey::Float(CharFloatField::Wy),
            "W0Y" => CharMetricKey::Float(CharFloatField::W0y),
            "W1Y" => CharMetricKey::Float(CharFloatField::W1y),
            "W" => CharMetricKey::Pair(CharPairField::W),
            "W0" => CharMetricKey::Pair(CharPairField::W0),
            "W1" => CharMetricKey::Pair(CharPairField::W1),
            "VV" => CharMetricKey::Pair(CharPairField::Vv),
            "N" => CharMetricKey::Name,
            "B" => CharMetricKey::BBox,
            "L" => CharMetricKey::Ligature,
            _ => return None,
        };
        Some(key)
    }

    /// The keyword as written, for error messages.
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            CharMetricKey::Code => "C",
            CharMetricKey::HexCode => "CH",
            CharMetricKey::Float(CharFloatField::Wx) => "WX",
            CharMetricKey::Float(CharFloatField::W0x) => "W0X",
            CharMetricKey::Float(CharFloatField::W1x) => "W1X",
            CharMetricKey::Float(CharFloatField::Wy) => "WY",
            CharMetricKey::Float(CharFloatField::W0y) => "W0Y",
            CharMetricKey::Float(CharFloatField::W1y) => "W1Y",
            CharMetricKey::Pair(CharPairField::W) => "W",
            CharMetricKey::Pair(CharPairField::W0) => "W0",
            CharMetricKey::Pair(CharPairField::W1) => "W1",
            CharMetricKey::Pair(CharPairField::Vv) => "VV",
            CharMetricKey::Name => "N",
            CharMetricKey::BBox => "B",
            CharMetricKey::Ligature => "L",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharFloatField {
    Wx,
    W0x,
    W1x,
    Wy,
    W0y,
    W1y,
}

impl CharFloatField {
    pub(crate) fn target(self, metric: &mut CharMetric) -> &mut f64 {
        match self {
            CharFloatField::Wx => &mut metric.wx,
            CharFloatField::W0x => &mut metric.w0x,
            CharFloatField::W1x => &mut metric.w1x,
            CharFloatField::Wy => &mut metric.wy,
            CharFloatField::W0y => &mut metric.w0y,
            CharFloatField::W1y => &mut metric.w1y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharPairField {
    W,
    W0,
    W1,
    Vv,
}

impl CharPairField {
    pub(crate) fn target(self, metric: &mut CharMetric) -> &mut Option<[f64; 2]> {
        match self {
            CharPairField::W => &mut metric.w,
            CharPairField::W0 => &mut metric.w0,
            CharPairField::W1 => &mut metric.w1,
            CharPairField::Vv => &mut metric.vv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            Key::from_keyword("CapHeight"),
            Some(Key::Float(FloatField::CapHeight))
        );
        assert_eq!(Key::from_keyword("capheight"), None);
        assert_eq!(CharMetricKey::from_keyword("wx"), None);
    }

    #[test]
    fn char_metric_keywords_round_trip() {
        for word in [
            "C", "CH", "WX", "W0X", "W1X", "WY", "W0Y", "W1Y", "W", "W0", "W1", "VV", "N", "B", "L",
        ] {
            let key = CharMetricKey::from_keyword(word).unwrap();
            assert_eq!(key.keyword(), word);
        }
    }

    #[test]
    fn kern_sections() {
        assert_eq!(
            KernDataKey::from_keyword("StartKernPairs1"),
            Some(KernDataKey::StartKernPairs(KernPairSet::Direction1))
        );
        assert_eq!(KernDataKey::from_keyword("StartKernPairs2"), None);
        assert_eq!(KernPairKey::from_keyword("KPH"), Some(KernPairKey::Kph));
        assert_eq!(KernPairKey::from_keyword("KPZ"), None);
    }
}
