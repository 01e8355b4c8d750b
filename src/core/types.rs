use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PayoutMode {
    /// Simple interest paid out every month.
    #[default]
    Monthly,
    /// Compounded and paid as a lump sum at the end of the term.
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: u32,
    pub name: &'static str,
    pub quota_value: f64,
    pub term_months: u32,
    pub monthly_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaBreakdown {
    pub quota_count: u64,
    pub principal: f64,
    pub remainder: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub quota_count: u64,
    pub principal: f64,
    pub remainder: f64,
    pub mode: PayoutMode,
    pub monthly_yield: f64,
    pub total_yield: f64,
    pub final_value: f64,
}
