//! Password hashing and verification using Argon2

use crate::utils::error::{AuthError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashCost {
    /// Memory size in KiB
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl HashCost {
    /// Build Argon2 parameters, rejecting out-of-range values
    pub fn params(&self) -> Result<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::Config(format!("Invalid password hash cost: {}", e)))
    }
}

fn default_memory_kib() -> u32 {
    Params::DEFAULT_M_COST
}

fn default_iterations() -> u32 {
    Params::DEFAULT_T_COST
}

fn default_parallelism() -> u32 {
    Params::DEFAULT_P_COST
}

/// One-way salted password hasher.
///
/// Hashes are PHC strings: algorithm, cost and salt travel with the digest, so
/// verification works for hashes produced under an older cost.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl CredentialHasher {
    /// Create a hasher with the given cost
    pub fn new(cost: HashCost) -> Result<Self> {
        let params = cost.params()?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Crypto(format!("Failed to hash password: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored value that is not a valid PHC string never verifies.
    pub fn verify(&self, hash: &str, password: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Stored password hash could not be parsed: {}", e);
                return false;
            }
        };

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!("Password verification failed: {}", e);
                false
            }
        }
    }
}
