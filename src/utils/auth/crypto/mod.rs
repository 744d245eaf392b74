//! Cryptographic utilities
//!
//! Password hashing lives in [`password`], random identifiers in [`tokens`].

pub mod password;
pub mod tokens;


pub use password::{CredentialHasher, HashCost};
pub use tokens::new_token;
