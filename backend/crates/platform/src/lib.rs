//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Secret hashing and verification (Argon2id, self-describing PHC output)
//! - Password policy (NIST SP 800-63B compliant validation)
//! - Bearer token signing and verification (JWT, HS256)

pub mod password;
pub mod secret;
pub mod token;
