use super::types::{PayoutMode, QuotaBreakdown, SimulationResult, Tier};

/// Parses a free-form contribution typed by the user.
///
/// Grouping dots (`100.000`) are dropped and a trailing `,DD` is read as the
/// decimal part. Anything that does not resolve to a finite number yields
/// zero, which downstream means "no quotas".
pub fn parse_contribution(raw: &str) -> f64 {
    let kept: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let mut normalized = String::with_capacity(kept.len());
    for (idx, &c) in kept.iter().enumerate() {
        if c == '.' && is_thousands_separator(&kept[idx + 1..]) {
            continue;
        }
        normalized.push(c);
    }

    if has_comma_decimal_suffix(&normalized) {
        let split = normalized.len() - 3;
        normalized.replace_range(split..=split, ".");
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn is_thousands_separator(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(char::is_ascii_digit)
        && rest.get(3).is_none_or(|c| !c.is_ascii_digit())
}

// `normalized` only holds ASCII at this point, so byte offsets are char offsets.
fn has_comma_decimal_suffix(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    bytes.len() >= 3
        && bytes[bytes.len() - 3] == b','
        && bytes[bytes.len() - 2..].iter().all(u8::is_ascii_digit)
}

const MAX_QUOTA_COUNT: f64 = u64::MAX as f64;

pub fn compute_quotas(contribution: f64, tier: &Tier) -> QuotaBreakdown {
    if !contribution.is_finite() || contribution <= 0.0 {
        return QuotaBreakdown {
            quota_count: 0,
            principal: 0.0,
            remainder: 0.0,
        };
    }

    let quota = tier.quota_value;
    let quotient = (contribution / quota).floor();
    // Counts past u64 saturate; the excess is reported as remainder.
    let mut quota_count = if quotient >= MAX_QUOTA_COUNT {
        u64::MAX
    } else {
        quotient as u64
    };
    // The division can land one ulp off an integer boundary in either direction.
    if quota_count > 0 && quota_count as f64 * quota > contribution {
        quota_count -= 1;
    }
    if quota_count
        .checked_add(1)
        .is_some_and(|next| next as f64 * quota <= contribution)
    {
        quota_count += 1;
    }

    // Above 2^53 quotas the product can still round past the contribution.
    let principal = (quota_count as f64 * quota).min(contribution);
    QuotaBreakdown {
        quota_count,
        principal,
        remainder: contribution - principal,
    }
}

pub fn simulate(
    quotas: &QuotaBreakdown,
    tier: &Tier,
    mode: PayoutMode,
) -> Option<SimulationResult> {
    if quotas.quota_count == 0 {
        return None;
    }

    let principal = quotas.principal;
    let term = tier.term_months as f64;
    let (monthly_yield, total_yield, final_value) = match mode {
        PayoutMode::Monthly => {
            let monthly_yield = principal * tier.monthly_rate;
            let total_yield = monthly_yield * term;
            (monthly_yield, total_yield, principal + total_yield)
        }
        PayoutMode::Bullet => {
            let final_value = principal * compound_factor(tier.monthly_rate, tier.term_months);
            let total_yield = final_value - principal;
            (total_yield / term, total_yield, final_value)
        }
    };

    Some(SimulationResult {
        quota_count: quotas.quota_count,
        principal,
        remainder: quotas.remainder,
        mode,
        monthly_yield,
        total_yield,
        final_value,
    })
}

/// `(1 + monthly_rate)^months`.
///
/// Terms longer than `i32::MAX` months are evaluated at `i32::MAX`; for any
/// positive rate that is already `inf`, so the result stays infinite rather
/// than wrapping.
pub fn compound_factor(monthly_rate: f64, months: u32) -> f64 {
    let exponent = i32::try_from(months).unwrap_or(i32::MAX);
    (1.0 + monthly_rate).powi(exponent)
}

/// Full recomputation for one set of form inputs.
pub fn run_simulation(
    tier: &Tier,
    raw_contribution: &str,
    mode: PayoutMode,
) -> Option<SimulationResult> {
    let quotas = compute_quotas(parse_contribution(raw_contribution), tier);
    simulate(&quotas, tier, mode)
}
