use crate::models::token::{ColorRamp, ColorToken, TokenType};
use colorgrad::{Color, Gradient, GradientBuilder, LinearGradient};

pub const DEFAULT_STEPS: usize = 10;
pub const DEFAULT_INCREMENT: u32 = 100;

// Saturation/lightness of the derived anchors for single-color ramps. The
// light end sits just short of white, the dark end just short of black, so
// the ramp keeps the seed hue across its whole range.
const LIGHT_ANCHOR_SL: (f32, f32) = (0.88, 0.96);
const DARK_ANCHOR_SL: (f32, f32) = (0.68, 0.12);

/// What the ramp is built from: a single base color that lands at the ramp
/// midpoint, or an explicit start/end pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RampSeed {
    Base(String),
    Endpoints(String, String),
}

impl From<&str> for RampSeed {
    fn from(color: &str) -> Self {
        RampSeed::Base(color.to_string())
    }
}

impl From<String> for RampSeed {
    fn from(color: String) -> Self {
        RampSeed::Base(color)
    }
}

impl From<(&str, &str)> for RampSeed {
    fn from((start, end): (&str, &str)) -> Self {
        RampSeed::Endpoints(start.to_string(), end.to_string())
    }
}

impl From<(String, String)> for RampSeed {
    fn from((start, end): (String, String)) -> Self {
        RampSeed::Endpoints(start, end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampOptions {
    /// Number of samples to take over the gradient.
    pub steps: usize,
    /// Spacing between the reported step keys.
    pub increment: u32,
}

impl Default for RampOptions {
    fn default() -> Self {
        RampOptions {
            steps: DEFAULT_STEPS,
            increment: DEFAULT_INCREMENT,
        }
    }
}

/// Build an indexed color ramp from the given seed.
///
/// Endpoint seeds interpolate directly between the two colors in the
/// gradient library's default RGB mode. A single base color gets a
/// three-stop HSL scale through a light and a dark anchor sharing its hue,
/// with the base color itself at domain 0.5, so a sample landing on the
/// midpoint reproduces the input exactly.
///
/// Keys are `ix * increment` for sample index `ix`; `steps = 0` yields an
/// empty ramp. Unparseable color text fails with the parser's error.
pub fn color_ramp(seed: impl Into<RampSeed>, options: RampOptions) -> anyhow::Result<ColorRamp> {
    let samples = match seed.into() {
        RampSeed::Endpoints(start, end) => {
            let gradient = GradientBuilder::new()
                .colors(&[csscolorparser::parse(&start)?, csscolorparser::parse(&end)?])
                .build::<LinearGradient>()?;
            gradient.colors(options.steps)
        }
        RampSeed::Base(base) => {
            HslScale::around(&csscolorparser::parse(&base)?).colors(options.steps)
        }
    };

    let mut ramp = ColorRamp::new();
    for (ix, color) in samples.iter().enumerate() {
        let step = ix as u32 * options.increment;
        ramp.insert(
            step,
            ColorToken {
                value: color.to_css_hex(),
                description: format!("Step: {step}"),
                token_type: TokenType::Color,
            },
        );
    }
    Ok(ramp)
}

#[derive(Debug, Clone)]
struct HslStop {
    pos: f32,
    color: Color,
    hsla: [f32; 4],
}

/// Piecewise-linear gradient interpolating in HSL space, with shortest-arc
/// hue blending. `colorgrad`'s builder has no HSL blend mode, so this is a
/// custom `Gradient` over the standard [0, 1] domain.
///
/// At a stop position the stop color is returned as-is, not re-derived from
/// its HSL form, so stops survive sampling byte-exactly.
#[derive(Debug, Clone)]
pub struct HslScale {
    stops: Vec<HslStop>,
}

impl HslScale {
    /// Build a scale from parallel slices of colors and ascending domain
    /// positions. Requires at least two stops.
    pub fn new(colors: &[Color], domain: &[f32]) -> Self {
        debug_assert!(colors.len() >= 2);
        debug_assert_eq!(colors.len(), domain.len());
        let stops = colors
            .iter()
            .zip(domain)
            .map(|(color, &pos)| HslStop {
                pos,
                color: color.clone(),
                hsla: color.to_hsla(),
            })
            .collect();
        HslScale { stops }
    }

    /// The symmetric scale used for single-color ramps: a near-white and a
    /// near-black anchor sharing the base color's hue (rounded to whole
    /// degrees), with the base itself pinned at domain 0.5.
    pub fn around(base: &Color) -> Self {
        let hue = base.to_hsla()[0].round();
        let (ls, ll) = LIGHT_ANCHOR_SL;
        let (ds, dl) = DARK_ANCHOR_SL;
        let light = Color::from_hsla(hue, ls, ll, 1.0);
        let dark = Color::from_hsla(hue, ds, dl, 1.0);
        HslScale::new(&[light, base.clone(), dark], &[0.0, 0.5, 1.0])
    }
}

impl Gradient for HslScale {
    fn at(&self, t: f32) -> Color {
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if t <= first.pos {
            return first.color.clone();
        }
        if t >= last.pos {
            return last.color.clone();
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t <= b.pos {
                let w = (t - a.pos) / (b.pos - a.pos);
                if w <= 0.0 {
                    return a.color.clone();
                }
                if w >= 1.0 {
                    return b.color.clone();
                }
                let h = lerp_hue(a.hsla[0], b.hsla[0], w);
                let s = a.hsla[1] + (b.hsla[1] - a.hsla[1]) * w;
                let l = a.hsla[2] + (b.hsla[2] - a.hsla[2]) * w;
                let alpha = a.hsla[3] + (b.hsla[3] - a.hsla[3]) * w;
                return Color::from_hsla(h, s, l, alpha);
            }
        }
        // NaN input falls through the comparisons above
        last.color.clone()
    }
}

fn lerp_hue(a: f32, b: f32, w: f32) -> f32 {
    let mut d = (b - a) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    (a + d * w).rem_euclid(360.0)
}
