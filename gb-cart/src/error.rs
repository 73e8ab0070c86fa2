use thiserror::Error;

use crate::HEADER_END;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DecodeError {
    #[error("ROM too small: {} bytes, need {}", .len, HEADER_END)]
    TooSmall { len: usize },
}
