//! Opaque token generation

use uuid::Uuid;

/// Generate an opaque random identifier.
///
/// The value is a version 4 UUID in its 36 character hyphenated form, backed
/// by 122 bits from the operating system CSPRNG. Session ids, reset tokens and
/// user ids all come from here. Callers never check the store for a collision:
/// at 122 bits the probability is negligible for any realistic population.
pub fn new_token() -> String {
    Uuid::new_v4().to_string()
}
