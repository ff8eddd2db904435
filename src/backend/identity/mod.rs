//! Identity Module
//!
//! This module derives the opaque who-key a like request is booked
//! under. It is deliberately not a user-identity system: the key is a
//! ledger slot, nothing more.
//!
//! # Module Structure
//!
//! ```text
//! identity/
//! ├── mod.rs      - Module exports and documentation
//! └── resolver.rs - Pure who-key derivation
//! ```
//!
//! # Key Classes
//!
//! - `"owner"` - All callers with the owner credential
//! - 16-hex-char hash - Pseudonymous public callers
//! - `"anon"` - Callers with no usable fingerprint

/// Pure who-key derivation
pub mod resolver;

// Re-export commonly used items
pub use resolver::{resolve_who_key, Fingerprint, ANON_KEY, OWNER_KEY};
