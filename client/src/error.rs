/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::error::Error as _;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "error sending request: {0} {}",
        .0.source().map(|c| format!("(cause: {c})")).unwrap_or_default()
    )]
    SendRequest(#[source] reqwest::Error),
    #[error("received unexpected status code {0} requesting {1}")]
    UnexpectedStatus(u16, String),
    #[error(
        "cannot deserialize response: {0} {}",
        .0.source().map(|c| format!("(cause: {c})")).unwrap_or_default()
    )]
    DeserializeResponse(#[source] reqwest::Error),
}
