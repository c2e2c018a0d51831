use crate::ramp::{DEFAULT_INCREMENT, DEFAULT_STEPS, RampOptions, RampSeed};
use clap::Parser;

/// Generate perceptually-scaled color ramps for design tokens.
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenramp", version, about)]
pub struct Config {
    /// Base color, or the ramp's start color when --end is given.
    /// Accepts any CSS color form (hex, named, rgb(), hsl(), ...)
    pub color: String,

    /// End color; switches to a direct two-color ramp
    #[arg(long)]
    pub end: Option<String>,

    /// Number of samples in the ramp
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Spacing between step keys
    #[arg(long, default_value_t = DEFAULT_INCREMENT)]
    pub increment: u32,

    /// Apply this alpha (0..=1) to every generated token
    #[arg(long)]
    pub opacity: Option<f32>,

    /// Emit the ramp as JSON tokens instead of a table preview
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn seed(&self) -> RampSeed {
        match &self.end {
            Some(end) => RampSeed::Endpoints(self.color.clone(), end.clone()),
            None => RampSeed::Base(self.color.clone()),
        }
    }

    pub fn options(&self) -> RampOptions {
        RampOptions {
            steps: self.steps,
            increment: self.increment,
        }
    }
}
