/// Render a score the way it was entered: whole numbers keep one decimal
/// (`3` -> `3.0`), anything else uses the shortest exact form. Magnitudes
/// below `1e-4` switch to exponent form with two exponent digits (`1e-05`).
pub fn format_score_echo(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else if score != 0.0 && score.abs() < 1e-4 {
        exponent_form(score)
    } else {
        format!("{}", score)
    }
}

fn exponent_form(score: f64) -> String {
    let shortest = format!("{:e}", score);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}

/// One-decimal rendering used on charts and the T-score summary
pub fn format_score_short(score: f64) -> String {
    format!("{:.1}", score)
}
