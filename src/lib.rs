//! SHA-256 written from first principles, and the length-extension attack it
//! enables against `SHA-256(key || message)`.
//!
//! ```
//! use mdforge::{digest, forge, PrefixMac};
//!
//! let mac = PrefixMac::new(b"key".to_vec());
//! let tag = mac.sign(b"secret");
//! assert_eq!(tag, digest(b"keysecret"));
//!
//! // Three bytes of key, never read by `forge`.
//! let forgery = forge(b"secret", &tag, b"altered", 3).unwrap();
//! assert!(mac.verify(&forgery.message, &forgery.digest));
//! ```

pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::security::{length_extension, prefix_mac, sha256};
pub use cs::security::{digest, forge, search_key_length, PrefixMac, State};
