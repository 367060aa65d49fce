//! User Entity
//!
//! Account record created at signup. Never mutated afterwards by this
//! module; contact fields are exposed on listing detail views.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, phone::PhoneNumber, user_password::UserPassword, user_role::UserRole,
};

/// User account entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, assigned on creation
    pub user_id: UserId,
    /// Email address (unique, login identifier)
    pub email: Email,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: PhoneNumber,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Role (Buyer, Realtor, Admin)
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user account
    pub fn new(
        email: Email,
        name: String,
        phone: PhoneNumber,
        password_hash: UserPassword,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            name,
            phone,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this account may own listings
    pub fn can_own_listings(&self) -> bool {
        self.role.is_privileged()
    }
}
