//! Error taxonomy: transport, response, and data failures are distinct kinds.

use reqwest::StatusCode;

use crate::essent::models::EnergyType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport failed before a usable response arrived
    /// (DNS, connection refused, timeout, TLS).
    #[error("error communicating with the Essent API: {0}")]
    Connection(#[source] reqwest::Error),

    /// The API responded, but not with something worth parsing further.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The payload parsed, but is structurally or semantically unusable.
    #[error(transparent)]
    Data(#[from] DataError),
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("unexpected status {status} from the Essent API: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid JSON received from the Essent API")]
    InvalidJson(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("invalid data structure for current prices")]
    InvalidStructure(#[source] serde_json::Error),

    #[error("no price data available")]
    NoPriceData,

    #[error("response missing electricity or gas data")]
    MissingEnergyBlock,

    #[error("no tariffs found for {0}")]
    NoTariffs(EnergyType),

    #[error("no unit provided for {0}")]
    NoUnit(EnergyType),

    #[error("no usable tariff values for {0}")]
    NoUsableTariffs(EnergyType),
}
