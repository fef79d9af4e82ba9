//! Password collaborators: bcrypt hashing and the strength policy.

use bcrypt::BcryptError;
use bcrypt::DEFAULT_COST;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hashed)
}

/// Minimum bar for a new password: 8+ characters mixing lowercase,
/// uppercase, a digit and a symbol.
pub fn is_password_strong(plain: &str) -> bool {
    plain.chars().count() >= 8
        && plain.chars().any(|c| c.is_ascii_lowercase())
        && plain.chars().any(|c| c.is_ascii_uppercase())
        && plain.chars().any(|c| c.is_ascii_digit())
        && plain.chars().any(|c| !c.is_alphanumeric())
}
