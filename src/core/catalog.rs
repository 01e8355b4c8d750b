use super::types::Tier;

pub const DEFAULT_TIER_ID: u32 = 3;

pub static TIERS: [Tier; 6] = [
    Tier {
        id: 1,
        name: "Lote 1",
        quota_value: 5_000.0,
        term_months: 6,
        monthly_rate: 0.017,
    },
    Tier {
        id: 2,
        name: "Lote 2",
        quota_value: 25_000.0,
        term_months: 12,
        monthly_rate: 0.0185,
    },
    Tier {
        id: 3,
        name: "Lote 3",
        quota_value: 100_000.0,
        term_months: 12,
        monthly_rate: 0.02,
    },
    Tier {
        id: 4,
        name: "Lote 4",
        quota_value: 150_000.0,
        term_months: 18,
        monthly_rate: 0.0215,
    },
    Tier {
        id: 5,
        name: "Lote 5",
        quota_value: 250_000.0,
        term_months: 18,
        monthly_rate: 0.023,
    },
    Tier {
        id: 6,
        name: "Lote 6",
        quota_value: 1_500_000.0,
        term_months: 24,
        monthly_rate: 0.026,
    },
];

pub fn tiers() -> &'static [Tier] {
    &TIERS
}

pub fn find_tier(id: u32) -> Option<&'static Tier> {
    TIERS.iter().find(|tier| tier.id == id)
}
