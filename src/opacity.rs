use crate::models::token::ColorToken;

/// Return a copy of `token` with `opacity` applied to its color value.
///
/// The value is re-encoded as hex, 8-digit when the alpha is below 1. All
/// other token fields are carried through unchanged and the input is never
/// mutated. Alpha outside [0, 1] follows the color library's saturating
/// conversion rather than being validated here.
pub fn with_opacity(token: &ColorToken, opacity: f32) -> anyhow::Result<ColorToken> {
    let mut color = csscolorparser::parse(&token.value)?;
    color.a = opacity;
    Ok(ColorToken {
        value: color.to_css_hex(),
        ..token.clone()
    })
}
