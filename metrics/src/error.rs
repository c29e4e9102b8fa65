/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use fluentbit_client::InputName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error fetching storage snapshot: {0}")]
    Fetch(#[from] fluentbit_client::Error),
    #[error("invalid size for input {input}: {source}")]
    InvalidSize {
        input: InputName,
        #[source]
        source: humanize::ParseError,
    },
}
