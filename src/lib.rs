pub mod config;
pub mod models;
pub mod opacity;
pub mod ramp;
pub mod utils;

pub use config::Config;
pub use models::token::{Color, ColorRamp, ColorToken, TokenType};
pub use opacity::with_opacity;
pub use ramp::{HslScale, RampOptions, RampSeed, color_ramp};
