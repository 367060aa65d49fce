use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property a listing advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum PropertyType {
    Residential = 0,
    Condo = 1,
}

impl PropertyType {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use PropertyType::*;
        match self {
            Residential => "residential",
            Condo => "condo",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use PropertyType::*;
        match id {
            0 => Residential,
            1 => Condo,
            _ => {
                tracing::error!("Invalid PropertyType id: {}", id);
                unreachable!("Invalid PropertyType id: {}", id)
            }
        }
    }
}

impl FromStr for PropertyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use PropertyType::*;
        match s {
            "residential" => Ok(Residential),
            "condo" => Ok(Condo),
            _ => Err(AppError::bad_request(format!("Invalid property type: {}", s))),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
