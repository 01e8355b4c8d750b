mod catalog;
mod engine;
mod types;

pub use catalog::{DEFAULT_TIER_ID, find_tier, tiers};
pub use engine::{compound_factor, compute_quotas, parse_contribution, run_simulation, simulate};
pub use types::{PayoutMode, QuotaBreakdown, SimulationResult, Tier};
