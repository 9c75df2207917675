//! Colour palette and the three-stop gold gradient used by the resume renderer.
//!
//! The PDF surface only fills solid shapes, so gradients are approximated by
//! drawing many adjacent solid bands, each sampled from `gradient_color_at`.

/// An opaque RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values normalised to `0.0..=1.0`, as PDF colour operators expect.
    pub fn components(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

/// Dark banner background (#0E1117).
pub const BANNER: Color = Color::rgb(14, 17, 23);
/// Heading gold (#F5C542), also used for card accent strips and section dots.
pub const HEADING_GOLD: Color = Color::rgb(245, 197, 66);
/// Darker gold (#E8A317) for inline links.
pub const GOLD_MID: Color = Color::rgb(232, 163, 23);
/// Muted gold (#C9B87A) for banner contact links.
pub const GOLD_SOFT: Color = Color::rgb(201, 184, 122);
pub const DARK: Color = Color::rgb(40, 40, 45);
pub const BODY: Color = Color::rgb(70, 70, 75);
pub const MUTED: Color = Color::rgb(120, 120, 125);
/// Warm off-white card fill.
pub const CARD_BG: Color = Color::rgb(252, 250, 245);
/// Warm gold tint behind skill bars.
pub const BAR_TRACK: Color = Color::rgb(255, 248, 225);
/// Subtle warm separator, used for card borders and heading rules.
pub const RULE_SOFT: Color = Color::rgb(230, 225, 210);
/// Light grey for the professional title under the banner name.
pub const SUBTITLE: Color = Color::rgb(209, 213, 219);
/// Grey for the `|` separators in the banner contact line.
pub const SEPARATOR: Color = Color::rgb(156, 163, 175);

/// Gradient stops: gold-dark (#E8A317) → gold-mid (#F5C542) → gold-light (#FBE88A).
pub const GRADIENT_STOPS: [Color; 3] = [
    Color::rgb(232, 163, 23),
    Color::rgb(245, 197, 66),
    Color::rgb(251, 232, 138),
];

// ────────────────────────────────────────────────────────────────────────────
// Gradient
// ────────────────────────────────────────────────────────────────────────────

/// Samples the gold gradient at `t` (clamped to `0.0..=1.0`).
///
/// `t ∈ [0, 0.5]` interpolates stop 0 → stop 1 and `t ∈ [0.5, 1]` interpolates
/// stop 1 → stop 2. Channel values are truncated, so the endpoints and the
/// midpoint reproduce their stops exactly.
pub fn gradient_color_at(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (from, to, f) = if t <= 0.5 {
        (GRADIENT_STOPS[0], GRADIENT_STOPS[1], t / 0.5)
    } else {
        (GRADIENT_STOPS[1], GRADIENT_STOPS[2], (t - 0.5) / 0.5)
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f) as u8;
    Color::rgb(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}

/// Colours for `bands` evenly spaced samples, first band at `t = 0` and last at `t = 1`.
pub fn band_colors(bands: usize) -> impl Iterator<Item = Color> {
    let denominator = bands.saturating_sub(1).max(1) as f64;
    (0..bands).map(move |i| gradient_color_at(i as f64 / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_hits_stops_exactly() {
        assert_eq!(gradient_color_at(0.0), GRADIENT_STOPS[0]);
        assert_eq!(gradient_color_at(0.5), GRADIENT_STOPS[1]);
        assert_eq!(gradient_color_at(1.0), GRADIENT_STOPS[2]);
    }

    #[test]
    fn test_gradient_monotonic_within_each_half() {
        for (lo, hi) in [(0.0, 0.5), (0.5, 1.0)] {
            let steps = 50;
            let mut prev = gradient_color_at(lo);
            for i in 1..=steps {
                let t = lo + (hi - lo) * i as f64 / steps as f64;
                let c = gradient_color_at(t);
                // Every channel rises between consecutive stops.
                assert!(c.r >= prev.r && c.g >= prev.g && c.b >= prev.b, "t={t}: {prev:?} -> {c:?}");
                prev = c;
            }
        }
    }

    #[test]
    fn test_gradient_clamps_out_of_range() {
        assert_eq!(gradient_color_at(-1.0), GRADIENT_STOPS[0]);
        assert_eq!(gradient_color_at(7.5), GRADIENT_STOPS[2]);
    }

    #[test]
    fn test_band_colors_span_whole_gradient() {
        let bands: Vec<Color> = band_colors(40).collect();
        assert_eq!(bands.len(), 40);
        assert_eq!(bands[0], GRADIENT_STOPS[0]);
        assert_eq!(bands[39], GRADIENT_STOPS[2]);
    }

    #[test]
    fn test_single_band_uses_first_stop() {
        let bands: Vec<Color> = band_colors(1).collect();
        assert_eq!(bands, vec![GRADIENT_STOPS[0]]);
    }

    #[test]
    fn test_components_normalised() {
        assert_eq!(Color::rgb(255, 0, 51).components(), [1.0, 0.0, 0.2]);
    }
}
