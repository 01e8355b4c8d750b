use thiserror::Error;

use crate::core::{Tier, find_tier};

/// Rejections raised before the engine runs. The engine itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("loteId must be a whole number, got {0:?}")]
    InvalidTierId(String),

    #[error("unknown loteId {0}")]
    UnknownTier(u32),
}

pub fn tier_by_id(id: u32) -> Result<&'static Tier, RequestError> {
    find_tier(id).ok_or(RequestError::UnknownTier(id))
}

pub fn parse_tier_id(raw: &str) -> Result<&'static Tier, RequestError> {
    let id = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| RequestError::InvalidTierId(raw.to_string()))?;
    tier_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tier_id_accepts_padded_digits() {
        let tier = parse_tier_id(" 4 ").expect("tier 4");
        assert_eq!(tier.id, 4);
    }

    #[test]
    fn parse_tier_id_rejects_bad_input() {
        assert_eq!(
            parse_tier_id("abc"),
            Err(RequestError::InvalidTierId("abc".to_string()))
        );
        assert_eq!(parse_tier_id("9"), Err(RequestError::UnknownTier(9)));
        assert_eq!(
            RequestError::UnknownTier(9).to_string(),
            "unknown loteId 9"
        );
    }
}
