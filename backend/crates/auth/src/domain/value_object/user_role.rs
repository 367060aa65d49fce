use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// Buyers sign up freely; Realtor and Admin signup is gated by a
/// product key. Only Realtor and Admin accounts own listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Buyer = 0,
    Realtor = 1,
    Admin = 2,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Buyer => "buyer",
            Realtor => "realtor",
            Admin => "admin",
        }
    }

    /// Roles that require a product key at signup and may own listings
    #[inline]
    pub const fn is_privileged(&self) -> bool {
        use UserRole::*;
        matches!(self, Realtor | Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use UserRole::*;
        match id {
            0 => Buyer,
            1 => Realtor,
            2 => Admin,
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                unreachable!("Invalid UserRole id: {}", id)
            }
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use UserRole::*;
        match s {
            "buyer" => Ok(Buyer),
            "realtor" => Ok(Realtor),
            "admin" => Ok(Admin),
            _ => Err(AppError::bad_request(format!("Invalid role: {}", s))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
