/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum ParseError {
    #[error("invalid byte quantity: {0:?}")]
    Syntax(String),
    #[error("unhandled size suffix: {0:?}")]
    UnknownSuffix(String),
    #[error("byte quantity out of range: {0:?}")]
    OutOfRange(String),
}
