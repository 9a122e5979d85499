/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: HS256 token issuance and validation with a role claim
/// - [`middleware`]: the auth context attached to guarded requests and
///   the bearer-token extraction used by the role guard
///
/// Verification is deliberately decoupled from the database: the role
/// guard trusts the token's embedded claims and never re-checks account
/// existence, so a token stays valid until its expiry even if the account
/// behind it is deleted.

pub mod jwt;
pub mod middleware;
pub mod password;
