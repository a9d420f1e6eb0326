//! Credential-handling utilities library
//!
//! Provides the two security-critical primitives of the bookmark service:
//! - Password hashing (Argon2id)
//! - Access token issuance and verification (short-lived HS256 JWTs)
//!
//! The service crate defines its own domain traits and adapts these
//! implementations. Keeping them here avoids coupling domain logic to
//! specific crypto crates.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&hash, "my_password").unwrap());
//! assert!(!hasher.verify(&hash, "not_my_password").unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth_core::{Claims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_identity("user-1", "alice@example.com");
//! let token = issuer.issue(&claims).unwrap();
//!
//! let decoded = issuer.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "user-1");
//! assert_eq!(decoded.email, "alice@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TOKEN_TTL_MINUTES;
