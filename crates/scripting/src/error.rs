use domain::DomainError;
use thiserror::Error;

/// Errors raised while marshaling values between Lua and the tag library
#[derive(Error, Debug)]
pub enum BindError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("tag key type is not number or string")]
    BadKeyType,

    #[error("tag value type is not string or boolean or 'tag' userdata")]
    BadValueType,

    #[error("{expected} expected, got {got}")]
    BadArgument {
        expected: &'static str,
        got: &'static str,
    },

    #[error("{value} is out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },

    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),
}

impl From<BindError> for mlua::Error {
    fn from(err: BindError) -> Self {
        match err {
            BindError::Lua(e) => e,
            other => mlua::Error::external(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
