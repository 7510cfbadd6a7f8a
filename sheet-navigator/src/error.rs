use thiserror::Error;

/// Transport limits hit while rendering a screen. Both are recovered from locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Action token is {bytes} bytes, limit is {limit}: {token}")]
    OptionTooLarge {
        token: String,
        bytes: usize,
        limit: usize,
    },

    #[error("Message is {chars} characters, limit is {limit}")]
    OutputTooLarge { chars: usize, limit: usize },
}
