//! Client for the public [Essent dynamic prices][1] API.
//!
//! The crate fetches the day-ahead tariff schedule and normalizes it into
//! per-energy-type tariff lists for today and tomorrow, with min/avg/max
//! price summaries and a canonicalized unit string.
//!
//! The HTTP client is injected by the caller and may be shared: every call is
//! independent and stateless, so concurrent calls are fine as long as the
//! underlying [`reqwest::Client`] is (it is).
//!
//! [1]: https://www.essent.nl/dynamische-energieprijzen

pub mod error;
pub mod essent;

mod prelude;

pub use self::{
    error::{DataError, Error, ResponseError},
    essent::{
        API_ENDPOINT,
        Api,
        DEFAULT_TIMEOUT,
        models::{EnergyBlock, EnergyData, EnergyType, PriceDay, PriceResponse, Prices, Tariff},
    },
};
