use clap::Parser;
use tokenramp::utils::preview::print_ramp_summary;
use tokenramp::{Config, color_ramp, with_opacity};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let mut ramp = color_ramp(config.seed(), config.options())?;

    if let Some(opacity) = config.opacity {
        for token in ramp.values_mut() {
            *token = with_opacity(token, opacity)?;
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&ramp)?);
    } else {
        print_ramp_summary(&config.color, &ramp);
    }
    Ok(())
}
