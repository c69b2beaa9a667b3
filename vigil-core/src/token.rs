//! Forgot-hash generation.
//!
//! A forgot hash is a single-use, time-limited token authorizing a password
//! reset. The wire form is `{expiry_unix}|{random}` where the random part
//! carries at least 128 bits of entropy, base64 URL-safe encoded without
//! padding. The hash must be persisted against the user record before any
//! mail referencing it goes out.
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::{TryRngCore, rngs::OsRng};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotHash {
    token: String,
    expires_at: DateTime<Utc>,
}

impl ForgotHash {
    /// Generate a fresh hash expiring `lifetime` from now.
    pub fn generate(lifetime: Duration) -> Self {
        let expires_at = Utc::now() + lifetime;

        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes).unwrap();
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(bytes);

        Self {
            token: format!("{}|{}", expires_at.timestamp(), encoded),
            expires_at,
        }
    }

    /// Parse the wire form back into a hash. Returns `None` when the input
    /// does not carry a leading unix timestamp.
    pub fn parse(token: &str) -> Option<Self> {
        let (timestamp, rest) = token.split_once('|')?;
        if rest.is_empty() {
            return None;
        }
        let expires_at = Utc.timestamp_opt(timestamp.parse().ok()?, 0).single()?;

        Some(Self {
            token: token.to_string(),
            expires_at,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

impl std::fmt::Display for ForgotHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_wire_form() {
        let hash = ForgotHash::generate(Duration::hours(1));
        let (timestamp, random) = hash.as_str().split_once('|').unwrap();

        assert_eq!(timestamp, hash.expires_at().timestamp().to_string());
        assert!(!random.is_empty());
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ForgotHash::generate(Duration::hours(1));
        let b = ForgotHash::generate(Duration::hours(1));
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_parse_round_trip() {
        let hash = ForgotHash::generate(Duration::hours(1));
        let parsed = ForgotHash::parse(hash.as_str()).unwrap();

        assert_eq!(parsed.as_str(), hash.as_str());
        assert_eq!(
            parsed.expires_at().timestamp(),
            hash.expires_at().timestamp()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ForgotHash::parse("no-separator").is_none());
        assert!(ForgotHash::parse("not-a-number|abc").is_none());
        assert!(ForgotHash::parse("1234567890|").is_none());
    }

    #[test]
    fn test_expiry() {
        let hash = ForgotHash::generate(Duration::hours(1));
        assert!(!hash.is_expired(Utc::now()));
        assert!(hash.is_expired(Utc::now() + Duration::hours(2)));
    }
}
