//! Static font-metric tables for the PDF standard Helvetica family.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em, indexed by the
//! single-byte (WinAnsi) code the glyph is drawn with. Oblique faces share the
//! upright widths, so two tables cover all four styles. Because the standard
//! fonts are not embedded, these tables are exact: the viewer lays glyphs out
//! with the same numbers.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Underline offset below the baseline, in 1/1000 em (AFM `UnderlinePosition`, negated).
const UNDERLINE_POSITION: f32 = 100.0;
/// AFM `UnderlineThickness`, in 1/1000 em.
const UNDERLINE_THICKNESS: f32 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Font specification
// ────────────────────────────────────────────────────────────────────────────

/// Font families available to the renderer. Only the PDF base-14 sans family is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

/// A complete font selection: family, face, underline decoration, and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub style: FontStyle,
    pub underline: bool,
    pub size_pt: f32,
}

impl FontSpec {
    pub const fn helvetica(style: FontStyle, size_pt: f32) -> Self {
        Self {
            family: FontFamily::Helvetica,
            style,
            underline: false,
            size_pt,
        }
    }

    pub const fn regular(size_pt: f32) -> Self {
        Self::helvetica(FontStyle::Regular, size_pt)
    }

    pub const fn bold(size_pt: f32) -> Self {
        Self::helvetica(FontStyle::Bold, size_pt)
    }

    pub const fn italic(size_pt: f32) -> Self {
        Self::helvetica(FontStyle::Italic, size_pt)
    }

    /// The same font with underline decoration.
    pub const fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Font size converted to millimetres.
    pub fn size_mm(&self) -> f32 {
        self.size_pt * MM_PER_PT
    }

    /// PostScript name of the standard font backing this spec.
    pub fn base_font(&self) -> &'static str {
        match (self.family, self.style) {
            (FontFamily::Helvetica, FontStyle::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontStyle::Bold) => "Helvetica-Bold",
            (FontFamily::Helvetica, FontStyle::Italic) => "Helvetica-Oblique",
            (FontFamily::Helvetica, FontStyle::BoldItalic) => "Helvetica-BoldOblique",
        }
    }

    /// Page resource name the font is registered under.
    pub fn resource_name(&self) -> &'static str {
        match self.style {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
            FontStyle::BoldItalic => "F4",
        }
    }

    pub fn metrics(&self) -> &'static FontMetricTable {
        get_metrics(self)
    }

    /// Rendered width of `s` in millimetres at this size.
    pub fn string_width(&self, s: &str) -> f32 {
        self.metrics().measure_str(s) * self.size_mm() / 1000.0
    }

    /// Distance from the baseline down to the top of the underline bar, in millimetres.
    pub fn underline_offset(&self) -> f32 {
        UNDERLINE_POSITION * self.size_mm() / 1000.0
    }

    pub fn underline_thickness(&self) -> f32 {
        UNDERLINE_THICKNESS * self.size_mm() / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Advance widths for the 256 single-byte codes of a face.
pub struct FontMetricTable {
    widths: [u16; 256],
    /// Width used for characters outside the single-byte range.
    pub fallback_width: u16,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in 1/1000 em.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c) as f32).sum()
    }

    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if code < 256 {
            self.widths[code]
        } else {
            self.fallback_width
        }
    }
}

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // 0x00 - 0x1F control codes
        278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
        278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9                                              :    ;    <    =    >    ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        // @    A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        // P    Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        // `    a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        // p    q    r    s    t    u    v    w    x    y    z    {    |    }    ~   DEL
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
        // 0x80 - 0x9F (WinAnsi extras)
        556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
        350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
        // 0xA0 - 0xBF
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0 - 0xDF
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0 - 0xFF
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    fallback_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // 0x00 - 0x1F control codes
        278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
        278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9                                              :    ;    <    =    >    ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        // @    A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        // P    Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        // `    a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        // p    q    r    s    t    u    v    w    x    y    z    {    |    }    ~   DEL
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
        // 0x80 - 0x9F (WinAnsi extras)
        556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
        350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
        // 0xA0 - 0xBF
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0 - 0xDF
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0 - 0xFF
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    fallback_width: 611,
};

/// Returns the static metric table backing a font spec.
pub fn get_metrics(font: &FontSpec) -> &'static FontMetricTable {
    match font.family {
        FontFamily::Helvetica if font.style.is_bold() => &HELVETICA_BOLD_TABLE,
        FontFamily::Helvetica => &HELVETICA_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(FontSpec::regular(10.0).metrics().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278)
        let width = FontSpec::regular(10.0).metrics().measure_str("Rust");
        assert!((width - 2056.0).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Architected distributed caching layer";
        assert!(FontSpec::bold(9.0).string_width(text) > FontSpec::regular(9.0).string_width(text));
    }

    #[test]
    fn test_italic_shares_regular_widths() {
        let text = "For more projects, see my";
        assert_eq!(
            FontSpec::italic(7.5).string_width(text),
            FontSpec::regular(7.5).string_width(text)
        );
    }

    #[test]
    fn test_underline_does_not_change_width() {
        let font = FontSpec::regular(7.5);
        assert_eq!(font.underlined().string_width("GitHub"), font.string_width("GitHub"));
    }

    #[test]
    fn test_string_width_scales_with_size() {
        // 1000 units at 72pt is exactly one inch.
        let w = FontSpec::regular(72.0).string_width("\u{00C6}"); // Æ = 1000
        assert!((w - 25.4).abs() < 1e-3, "got {w}");
    }

    #[test]
    fn test_latin1_characters_have_widths() {
        let metrics = FontSpec::regular(10.0).metrics();
        assert_eq!(metrics.char_width('é'), 556);
        assert_eq!(metrics.char_width('©'), 737);
        assert_eq!(metrics.char_width('ÿ'), 500);
    }

    #[test]
    fn test_non_latin1_falls_back() {
        let metrics = FontSpec::bold(10.0).metrics();
        assert_eq!(metrics.char_width('€'), metrics.fallback_width);
    }

    #[test]
    fn test_resource_names_distinct_per_style() {
        let names: std::collections::HashSet<&str> = [
            FontStyle::Regular,
            FontStyle::Bold,
            FontStyle::Italic,
            FontStyle::BoldItalic,
        ]
        .into_iter()
        .map(|s| FontSpec::helvetica(s, 8.0).resource_name())
        .collect();
        assert_eq!(names.len(), 4);
    }
}
