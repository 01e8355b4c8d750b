const NBSP: char = '\u{a0}';

/// Format a value as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Non-finite values render as zero.
pub fn brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let total_cents = (value.abs() * 100.0).round() as u64;
    let reais = total_cents / 100;
    let cents = total_cents % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("{sign}R${NBSP}{grouped},{cents:02}")
}

/// Format a fraction as a percentage with two decimals, e.g. `0.017` -> `1.70%`.
pub fn pct(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: String) -> String {
        s.replace(NBSP, " ")
    }

    #[test]
    fn brl_groups_thousands_with_dots() {
        assert_eq!(plain(brl(0.0)), "R$ 0,00");
        assert_eq!(plain(brl(5_000.0)), "R$ 5.000,00");
        assert_eq!(plain(brl(1_500_000.0)), "R$ 1.500.000,00");
        assert_eq!(plain(brl(999.0)), "R$ 999,00");
        assert_eq!(plain(brl(253_648.3589)), "R$ 253.648,36");
    }

    #[test]
    fn brl_rounds_cents_and_keeps_sign() {
        assert_eq!(plain(brl(0.005)), "R$ 0,01");
        assert_eq!(plain(brl(1_234.5)), "R$ 1.234,50");
        assert_eq!(plain(brl(-42.1)), "-R$ 42,10");
        assert_eq!(plain(brl(-0.001)), "R$ 0,00");
    }

    #[test]
    fn brl_uses_non_breaking_space_after_symbol() {
        assert_eq!(brl(1.0), "R$\u{a0}1,00");
    }

    #[test]
    fn non_finite_values_format_as_zero() {
        assert_eq!(brl(f64::NAN), brl(0.0));
        assert_eq!(brl(f64::INFINITY), brl(0.0));
        assert_eq!(pct(f64::NAN), "0.00%");
    }

    #[test]
    fn pct_renders_two_decimals() {
        assert_eq!(pct(0.017), "1.70%");
        assert_eq!(pct(0.0185), "1.85%");
        assert_eq!(pct(0.02), "2.00%");
    }
}
