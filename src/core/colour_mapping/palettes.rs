use std::sync::LazyLock;

use crate::core::colour_mapping::kinds::Theme;
use crate::core::data::colour::Colour;

#[derive(Clone, Copy, Debug)]
struct GradientStop {
    position: f64,
    r: u8,
    g: u8,
    b: u8,
}

const fn stop(position: f64, r: u8, g: u8, b: u8) -> GradientStop {
    GradientStop { position, r, g, b }
}

const fn rgb(r: u8, g: u8, b: u8) -> Colour {
    Colour { r, g, b }
}

/// Whether the last stop is the first colour again. Cyclic palettes are
/// sampled without repeating that colour so the table wraps seamlessly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wrap {
    Cyclic,
    Open,
}

const BLUE_BROWN_16: [Colour; 16] = [
    rgb(66, 30, 15),
    rgb(25, 7, 26),
    rgb(9, 1, 47),
    rgb(4, 4, 73),
    rgb(0, 7, 100),
    rgb(12, 44, 138),
    rgb(24, 82, 177),
    rgb(57, 125, 209),
    rgb(134, 181, 229),
    rgb(211, 236, 248),
    rgb(241, 233, 191),
    rgb(248, 201, 95),
    rgb(255, 170, 0),
    rgb(204, 128, 0),
    rgb(153, 87, 0),
    rgb(106, 52, 3),
];

const TROPICAL_16: [Colour; 16] = [
    rgb(0, 57, 84),
    rgb(0, 95, 115),
    rgb(0, 135, 142),
    rgb(46, 170, 152),
    rgb(121, 196, 155),
    rgb(194, 218, 160),
    rgb(246, 232, 173),
    rgb(250, 205, 131),
    rgb(246, 170, 92),
    rgb(239, 131, 72),
    rgb(224, 91, 67),
    rgb(196, 57, 76),
    rgb(154, 35, 88),
    rgb(104, 30, 94),
    rgb(58, 34, 94),
    rgb(22, 42, 90),
];

const TROPICAL_STOPS: [GradientStop; 7] = [
    stop(0.00, 0, 57, 84),
    stop(0.18, 0, 135, 142),
    stop(0.36, 194, 218, 160),
    stop(0.52, 250, 205, 131),
    stop(0.68, 224, 91, 67),
    stop(0.84, 104, 30, 94),
    stop(1.00, 0, 57, 84),
];

const PASTELS_STOPS: [GradientStop; 7] = [
    stop(0.000, 255, 179, 186),
    stop(0.166, 255, 223, 186),
    stop(0.333, 255, 255, 186),
    stop(0.500, 186, 255, 201),
    stop(0.666, 186, 225, 255),
    stop(0.833, 218, 190, 255),
    stop(1.000, 255, 179, 186),
];

const METALLIC_STOPS: [GradientStop; 7] = [
    stop(0.00, 38, 42, 48),
    stop(0.20, 112, 128, 144),
    stop(0.35, 224, 224, 228),
    stop(0.50, 212, 175, 55),
    stop(0.65, 184, 115, 51),
    stop(0.80, 110, 70, 40),
    stop(1.00, 38, 42, 48),
];

const TWILIGHT_STOPS: [GradientStop; 7] = [
    stop(0.00, 226, 217, 226),
    stop(0.17, 135, 166, 200),
    stop(0.33, 95, 95, 175),
    stop(0.50, 48, 20, 55),
    stop(0.67, 150, 60, 80),
    stop(0.83, 200, 140, 120),
    stop(1.00, 226, 217, 226),
];

// Twilight followed by its hue-shifted twin, for twice the bands per cycle.
const TWILIGHTS_STOPS: [GradientStop; 13] = [
    stop(0.000, 226, 217, 226),
    stop(0.085, 135, 166, 200),
    stop(0.165, 95, 95, 175),
    stop(0.250, 48, 20, 55),
    stop(0.335, 150, 60, 80),
    stop(0.415, 200, 140, 120),
    stop(0.500, 226, 217, 226),
    stop(0.585, 200, 140, 120),
    stop(0.665, 150, 60, 80),
    stop(0.750, 48, 20, 55),
    stop(0.835, 95, 95, 175),
    stop(0.915, 135, 166, 200),
    stop(1.000, 226, 217, 226),
];

const LANDSCAPE_STOPS: [GradientStop; 8] = [
    stop(0.00, 8, 24, 88),
    stop(0.18, 30, 96, 170),
    stop(0.30, 110, 180, 210),
    stop(0.36, 236, 220, 160),
    stop(0.50, 70, 150, 60),
    stop(0.68, 40, 95, 40),
    stop(0.84, 125, 100, 80),
    stop(1.00, 250, 250, 250),
];

const CET_C1_STOPS: [GradientStop; 5] = [
    stop(0.00, 240, 120, 230),
    stop(0.25, 235, 90, 40),
    stop(0.50, 200, 200, 50),
    stop(0.75, 60, 120, 240),
    stop(1.00, 240, 120, 230),
];

const CET_CBC1_STOPS: [GradientStop; 5] = [
    stop(0.00, 60, 120, 220),
    stop(0.25, 230, 230, 240),
    stop(0.50, 220, 190, 60),
    stop(0.75, 70, 70, 80),
    stop(1.00, 60, 120, 220),
];

const CET_CBTC1_STOPS: [GradientStop; 5] = [
    stop(0.00, 40, 200, 210),
    stop(0.25, 240, 235, 235),
    stop(0.50, 220, 60, 60),
    stop(0.75, 30, 30, 30),
    stop(1.00, 40, 200, 210),
];

const CET_C4S_STOPS: [GradientStop; 5] = [
    stop(0.00, 230, 230, 230),
    stop(0.25, 220, 60, 60),
    stop(0.50, 230, 230, 230),
    stop(0.75, 60, 90, 220),
    stop(1.00, 230, 230, 230),
];

const HSV_STOPS: [GradientStop; 7] = [
    stop(0.000, 255, 0, 0),
    stop(0.166, 255, 255, 0),
    stop(0.333, 0, 255, 0),
    stop(0.500, 0, 255, 255),
    stop(0.666, 0, 0, 255),
    stop(0.833, 255, 0, 255),
    stop(1.000, 255, 0, 0),
];

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    (f64::from(b) - f64::from(a)) * t + f64::from(a)
}

fn gradient_interpolate(stops: &[GradientStop], t: f64) -> Colour {
    let t = t.clamp(0.0, 1.0);

    for w in stops.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.position {
            let span = b.position - a.position;
            let factor = if span > 0.0 { (t - a.position) / span } else { 0.0 };

            return Colour {
                r: lerp(a.r, b.r, factor).round() as u8,
                g: lerp(a.g, b.g, factor).round() as u8,
                b: lerp(a.b, b.b, factor).round() as u8,
            };
        }
    }

    let last = stops[stops.len() - 1];
    rgb(last.r, last.g, last.b)
}

/// A fixed-size colour table looked up by continuous escape index.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<Colour>,
}

impl Palette {
    fn from_colours(colours: &[Colour]) -> Self {
        Self {
            entries: colours.to_vec(),
        }
    }

    fn from_stops(stops: &[GradientStop], size: usize, wrap: Wrap) -> Self {
        let denominator = match wrap {
            Wrap::Cyclic => size,
            Wrap::Open => size.saturating_sub(1).max(1),
        } as f64;

        let entries = (0..size)
            .map(|k| gradient_interpolate(stops, k as f64 / denominator))
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Colour for normalized index `ni`, rotated by `shift` percent of the
    /// table. Blends the entry at `⌊ni⌋` with its successor by the fractional
    /// part of `ni`.
    #[must_use]
    pub fn colour_at(&self, ni: f64, shift: f64) -> Colour {
        let len = self.entries.len() as i64;
        let offset = (shift * len as f64 / 100.0).ceil() as i64;
        let base = ni.floor() as i64 + offset;

        let from = self.entries[base.rem_euclid(len) as usize];
        let to = self.entries[(base + 1).rem_euclid(len) as usize];
        let f = ni.rem_euclid(1.0);

        Colour {
            r: lerp(from.r, to.r, f) as u8,
            g: lerp(from.g, to.g, f) as u8,
            b: lerp(from.b, to.b, f) as u8,
        }
    }
}

pub(crate) static BLUE_BROWN: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_colours(&BLUE_BROWN_16));
pub(crate) static TROPICAL_SMALL: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_colours(&TROPICAL_16));
pub(crate) static TROPICAL: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&TROPICAL_STOPS, 256, Wrap::Cyclic));
pub(crate) static PASTELS: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&PASTELS_STOPS, 256, Wrap::Cyclic));
pub(crate) static METALLIC: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&METALLIC_STOPS, 256, Wrap::Cyclic));
pub(crate) static TWILIGHT: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&TWILIGHT_STOPS, 256, Wrap::Cyclic));
pub(crate) static TWILIGHTS: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&TWILIGHTS_STOPS, 512, Wrap::Cyclic));
pub(crate) static LANDSCAPE: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&LANDSCAPE_STOPS, 256, Wrap::Open));
pub(crate) static CET_C1: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&CET_C1_STOPS, 256, Wrap::Cyclic));
pub(crate) static CET_CBC1: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&CET_CBC1_STOPS, 256, Wrap::Cyclic));
pub(crate) static CET_CBTC1: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&CET_CBTC1_STOPS, 256, Wrap::Cyclic));
pub(crate) static CET_C4S: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&CET_C4S_STOPS, 256, Wrap::Cyclic));
pub(crate) static HSV: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_stops(&HSV_STOPS, 256, Wrap::Cyclic));

/// The colour table behind an indexed theme, or `None` for procedural ones.
#[must_use]
pub fn palette_for(theme: Theme) -> Option<&'static Palette> {
    let palette: &'static LazyLock<Palette> = match theme {
        Theme::Default | Theme::BlueBrown16 => &BLUE_BROWN,
        Theme::Tropical16 => &TROPICAL_SMALL,
        Theme::Tropical256 => &TROPICAL,
        Theme::Pastels256 => &PASTELS,
        Theme::Metallic256 => &METALLIC,
        Theme::Twilight256 => &TWILIGHT,
        Theme::Twilights512 => &TWILIGHTS,
        Theme::Landscape256 => &LANDSCAPE,
        Theme::ColorcetCetC1 => &CET_C1,
        Theme::ColorcetCetCbc1 => &CET_CBC1,
        Theme::ColorcetCetCbtc1 => &CET_CBTC1,
        Theme::ColorcetCetC4s => &CET_C4S,
        Theme::Hsv256 => &HSV,
        Theme::Monochrome
        | Theme::BasicGrayscale
        | Theme::BasicHue
        | Theme::NormalizedHue
        | Theme::SqrtHue
        | Theme::LogHue
        | Theme::SinHue
        | Theme::SinSqrtHue
        | Theme::BandedRgb => return None,
    };

    Some(LazyLock::force(palette))
}
