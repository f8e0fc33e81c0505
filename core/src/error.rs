use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KochError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("order {order} exceeds the maximum supported order {max}")]
    NumericOverflow { order: u32, max: u32 },
}

impl KochError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        KochError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KochError>;
