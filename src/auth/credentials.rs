/**
 * Password Credentials
 *
 * Pure functions over bcrypt: hash on signup, verify on login. No state,
 * no I/O.
 *
 * # Contract
 *
 * - `hash_password` fails only on underlying resource/algorithm faults,
 *   which callers surface as a 500, never as a user error.
 * - `verify_password` returns `false` for any mismatch, including a
 *   malformed stored hash or attacker-controlled input. It never panics
 *   and never returns an error.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a password with bcrypt (per-hash salt, default work factor)
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored bcrypt hash
///
/// Any failure, including a hash that is not valid bcrypt output, counts
/// as a mismatch. bcrypt's comparison is constant-time.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    verify(password, stored_hash).unwrap_or(false)
}
