//! Turning coefficient lists into text.

/// English-ish ordinal used in the coefficient prompts. Only 1, 2 and 3 get
/// their own suffix, so 11 is "11th" and 21 is "21th".
pub fn ordinal(n: usize) -> String {
    match n {
        1 => format!("{}st", n),
        2 => format!("{}nd", n),
        3 => format!("{}rd", n),
        _ => format!("{}th", n),
    }
}

/// Integral values print without a decimal point.
pub fn format_coefficient(coefficient: f64) -> String {
    if coefficient.fract() == 0.0 {
        format!("{:.0}", coefficient)
    } else {
        format_fractional(coefficient)
    }
}

/// Shortest digits, switching to exponent form below 1e-4 and from 1e16 up,
/// with a signed two-digit exponent: `0.0001`, `1e-05`, `2.5e-07`.
fn format_fractional(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        // inf and NaN
        return scientific;
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if !(-4..16).contains(&exponent) => format!(
            "{}e{}{:02}",
            mantissa,
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        ),
        _ => format!("{}", value),
    }
}

fn format_term(power: usize, coefficient: f64) -> Option<String> {
    if coefficient == 0.0 {
        return None;
    }

    let shown = if coefficient == 1.0 && power != 0 {
        String::new()
    } else {
        format_coefficient(coefficient)
    };

    Some(match power {
        0 => shown,
        1 => format!("{}x", shown),
        _ => format!("{}x^{}", shown, power),
    })
}

/// Algebraic form of a coefficient list in increasing powers, e.g.
/// `[2, 0, 3]` becomes `2 + 3x^2`.
pub fn to_plaintext(coefficients: &[f64]) -> String {
    let terms: Vec<String> = coefficients
        .iter()
        .enumerate()
        .filter_map(|(power, &coefficient)| format_term(power, coefficient))
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

pub fn announcement(coefficients: &[f64]) -> String {
    format!("Your polynomial is f(x) = {}.", to_plaintext(coefficients))
}
