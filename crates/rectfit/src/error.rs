//! Error type for the fallible entry points (`try_find`, `validate_polygon`,
//! recipe parsing). `find` itself never fails.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RectError {
    InvalidPolygon { reason: String },
    InvalidConfig { reason: String },
}

impl RectError {
    pub(crate) fn polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid subdivision config: {reason}"),
        }
    }
}

impl std::error::Error for RectError {}
