//! Steam ID format validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Individual accounts in the common 765611980… range
static STEAM_ID_COMMON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^765611980\d{8}$").expect("steam id pattern"));

/// Same public prefix with the wider ninth digit span
static STEAM_ID_WIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^76561198\d{9}$").expect("steam id pattern"));

/// Loose format check for a 64-bit Steam ID: exactly 17 digits in one of the
/// known public ranges. Not a checksum. Input is matched as-is; callers trim.
pub fn is_valid_steam_id(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    STEAM_ID_COMMON.is_match(id) || STEAM_ID_WIDE.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_good_ids() {
        assert!(is_valid_steam_id("76561198010872093"));
        assert!(is_valid_steam_id("76561198000000000"));
        // ninth digit outside the common range, still 17 digits
        assert!(is_valid_steam_id("76561198910872093"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!is_valid_steam_id(""));
        assert!(!is_valid_steam_id("7656119801087209"));
        assert!(!is_valid_steam_id("765611980108720931"));
    }

    #[test]
    fn rejects_wrong_prefix_and_junk() {
        assert!(!is_valid_steam_id("86561198010872093"));
        assert!(!is_valid_steam_id("76561197960435530x"));
        assert!(!is_valid_steam_id("abc"));
        assert!(!is_valid_steam_id("7656119801087209a"));
    }

    #[test]
    fn does_not_trim() {
        assert!(!is_valid_steam_id(" 76561198010872093"));
        assert!(!is_valid_steam_id("76561198010872093 "));
    }

    #[test]
    fn older_account_range_rejected() {
        // 76561197… ids predate the 76561198 range
        assert!(!is_valid_steam_id("76561197960435530"));
    }
}
