pub mod length_extension;
pub mod prefix_mac;
pub mod sha256;

// Re-export SHA-256 functionality
pub use sha256::{digest, resume, sha256_digest, State, SHA256_HEX_LEN, SHA256_OUTPUT_SIZE};

// Re-export length-extension functionality
pub use length_extension::{
    forge, glue_padding, search_key_length, Forgery, KeyLengthMatch, KeyLengthSearchConfig,
};

// Re-export the vulnerable MAC
pub use prefix_mac::{PrefixMac, PrefixMacKeyGenConfig};
