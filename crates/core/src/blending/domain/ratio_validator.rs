use crate::shared::blend_weight::BlendWeight;

/// Turns a user-supplied ratio into a blend weight.
///
/// Values in `[0.0, 1.0]` (inclusive) are used as-is; anything else,
/// including NaN, falls back to the default weight. Never fails.
pub fn validate(raw: f64) -> BlendWeight {
    match BlendWeight::new(raw) {
        Some(weight) => weight,
        None => {
            log::debug!("Ratio {raw} outside [0.0, 1.0], using default");
            BlendWeight::default()
        }
    }
}

/// Like [`validate`], for raw text input. Unparseable text yields the default.
pub fn parse_ratio(input: &str) -> BlendWeight {
    match input.trim().parse::<f64>() {
        Ok(raw) => validate(raw),
        Err(_) => {
            log::debug!("Ratio {input:?} is not a number, using default");
            BlendWeight::default()
        }
    }
}
