/**
 * Who-Key Resolver
 *
 * This module derives the opaque "who" key used by the like ledger to
 * identify a requester. It is a pure function of the request context:
 * the same context always yields the same key, and the raw fingerprint
 * can never be recovered from it (one-way SHA-256, truncated).
 *
 * # Resolution Order
 *
 * 1. Owner credential present and valid -> the fixed `"owner"` key.
 *    All privileged callers intentionally collapse to one ledger slot.
 * 2. Any fingerprint signal present -> a stable pseudonymous key hashed
 *    from the caller context (see below).
 * 3. Nothing at all -> the fixed `"anon"` key.
 *
 * # Fingerprint Rule
 *
 * When the client supplies an identity header (`x-client-id`), it alone
 * forms the fingerprint, so the same logical user hashes to the same
 * who-key across different connections. Otherwise the network origin
 * (first `x-forwarded-for` hop) and the client signature (`user-agent`)
 * are combined. The hash is truncated to 16 hex chars to bound ledger
 * key size.
 */

use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// The fixed who-key for authenticated owner callers
pub const OWNER_KEY: &str = "owner";

/// The fixed who-key for callers with no usable fingerprint
pub const ANON_KEY: &str = "anon";

/// Truncated length of a pseudonymous who-key, in hex chars
const WHO_KEY_LEN: usize = 16;

/// Caller-context signals a who-key is derived from
///
/// All fields optional; extraction never fails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// Client-supplied identity header (`x-client-id`)
    pub client_id: Option<String>,
    /// Network origin: first hop of `x-forwarded-for`
    pub origin: Option<String>,
    /// Client signature (`user-agent`)
    pub signature: Option<String>,
}

impl Fingerprint {
    /// Extract fingerprint signals from request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };
        Self {
            client_id: header("x-client-id"),
            origin: header("x-forwarded-for")
                .map(|v| v.split(',').next().unwrap_or("").trim().to_string())
                .filter(|s| !s.is_empty()),
            signature: header("user-agent"),
        }
    }

    /// Whether any signal is present
    pub fn is_empty(&self) -> bool {
        self.client_id.is_none() && self.origin.is_none() && self.signature.is_none()
    }
}

/// Derive the who-key for a request
///
/// # Arguments
///
/// * `is_owner` - Whether the owner credential was verified (by the
///   boundary, not here)
/// * `fingerprint` - Caller-context signals
///
/// # Determinism
///
/// Same inputs always produce the same key; the function holds no state
/// and has no side effects.
pub fn resolve_who_key(is_owner: bool, fingerprint: &Fingerprint) -> String {
    if is_owner {
        return OWNER_KEY.to_string();
    }
    if fingerprint.is_empty() {
        return ANON_KEY.to_string();
    }

    // Client id, when present, is the whole fingerprint; the connection
    // signals only matter for clients that send no identity of their own.
    let material = match &fingerprint.client_id {
        Some(client_id) => format!("client:{}", client_id),
        None => format!(
            "conn:{}|{}",
            fingerprint.origin.as_deref().unwrap_or(""),
            fingerprint.signature.as_deref().unwrap_or(""),
        ),
    };

    let digest = Sha256::digest(material.as_bytes());
    hex::encode(digest)[..WHO_KEY_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(client_id: Option<&str>, origin: Option<&str>, signature: Option<&str>) -> Fingerprint {
        Fingerprint {
            client_id: client_id.map(String::from),
            origin: origin.map(String::from),
            signature: signature.map(String::from),
        }
    }

    #[test]
    fn test_owner_collapses_to_fixed_key() {
        let key = resolve_who_key(true, &fp(Some("abc"), Some("1.2.3.4"), None));
        assert_eq!(key, OWNER_KEY);
        // Owner wins regardless of fingerprint content
        assert_eq!(resolve_who_key(true, &Fingerprint::default()), OWNER_KEY);
    }

    #[test]
    fn test_empty_fingerprint_is_anonymous() {
        assert_eq!(resolve_who_key(false, &Fingerprint::default()), ANON_KEY);
    }

    #[test]
    fn test_deterministic_for_same_context() {
        let a = resolve_who_key(false, &fp(None, Some("1.2.3.4"), Some("curl/8")));
        let b = resolve_who_key(false, &fp(None, Some("1.2.3.4"), Some("curl/8")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_client_id_stable_across_connections() {
        let a = resolve_who_key(false, &fp(Some("me"), Some("1.2.3.4"), Some("curl/8")));
        let b = resolve_who_key(false, &fp(Some("me"), Some("9.9.9.9"), Some("Firefox")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_contexts_differ() {
        let a = resolve_who_key(false, &fp(None, Some("1.2.3.4"), Some("curl/8")));
        let b = resolve_who_key(false, &fp(None, Some("5.6.7.8"), Some("curl/8")));
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_is_truncated_hex() {
        let key = resolve_who_key(false, &fp(None, Some("1.2.3.4"), None));
        assert_eq!(key.len(), 16);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_key_does_not_leak_raw_fingerprint() {
        let key = resolve_who_key(false, &fp(None, Some("203.0.113.7"), Some("secret-agent")));
        assert!(!key.contains("203.0.113.7"));
        assert!(!key.contains("secret"));
    }

    #[test]
    fn test_from_headers_extracts_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4, 10.0.0.1".parse().unwrap());
        headers.insert("user-agent", "curl/8".parse().unwrap());
        let fingerprint = Fingerprint::from_headers(&headers);
        assert_eq!(fingerprint.origin.as_deref(), Some("1.2.3.4"));
        assert_eq!(fingerprint.signature.as_deref(), Some("curl/8"));
        assert!(fingerprint.client_id.is_none());
    }

    #[test]
    fn test_from_headers_empty() {
        let fingerprint = Fingerprint::from_headers(&HeaderMap::new());
        assert!(fingerprint.is_empty());
    }
}
