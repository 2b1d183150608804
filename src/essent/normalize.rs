//! The normalization pipeline: raw status and body in, [`Prices`] out.
//!
//! Kept free of any I/O so the whole error taxonomy is exercisable in tests.

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    error::{DataError, ResponseError},
    essent::models::{EnergyBlock, EnergyData, EnergyType, PriceDay, PriceResponse, Prices, Tariff},
    prelude::*,
};

/// Normalize a raw API response into [`Prices`].
///
/// `today` is the caller's local civil date and drives the day selection.
pub fn normalize(status: StatusCode, body: &str, today: NaiveDate) -> Result<Prices> {
    if status != StatusCode::OK {
        return Err(ResponseError::Status { status, body: body.to_string() }.into());
    }

    // Decode in two stages to keep «not JSON at all» (a response problem)
    // distinct from «JSON of the wrong shape» (a data problem):
    let value: Value = serde_json::from_str(body).map_err(ResponseError::InvalidJson)?;
    let response: PriceResponse =
        serde_json::from_value(value).map_err(DataError::InvalidStructure)?;

    if response.prices.is_empty() {
        return Err(DataError::NoPriceData.into());
    }

    let (today_prices, tomorrow_prices) = select_days(response.prices, today)?;
    debug!(date = %today_prices.date, "Selected the day");

    let PriceDay { electricity: Some(electricity), gas: Some(gas), .. } = today_prices else {
        return Err(DataError::MissingEnergyBlock.into());
    };
    let (electricity_tomorrow, gas_tomorrow) = match tomorrow_prices {
        Some(day) => (day.electricity, day.gas),
        None => (None, None),
    };

    Ok(Prices {
        electricity: normalize_energy_block(
            electricity,
            EnergyType::Electricity,
            electricity_tomorrow,
        )?,
        gas: normalize_energy_block(gas, EnergyType::Gas, gas_tomorrow)?,
    })
}

/// Find the entries for today and tomorrow in the price list.
///
/// The list is trusted to be roughly chronological: the first entry whose
/// `date` matches wins, and «tomorrow» is simply the entry right after it.
/// When no entry matches today, the first entry is used instead.
fn select_days(
    prices: Vec<PriceDay>,
    today: NaiveDate,
) -> Result<(PriceDay, Option<PriceDay>), DataError> {
    let today = today.to_string();
    let index = prices.iter().position(|day| day.date == today).unwrap_or(0);
    let mut days = prices.into_iter().skip(index);
    let Some(today_prices) = days.next() else {
        return Err(DataError::NoPriceData);
    };
    Ok((today_prices, days.next()))
}

/// Normalize one energy block: sort, resolve the unit, and aggregate.
///
/// Today's block is mandatory, tomorrow's is best-effort: its absence never
/// fails the call and just yields an empty tariff list.
fn normalize_energy_block(
    block: EnergyBlock,
    energy_type: EnergyType,
    tomorrow: Option<EnergyBlock>,
) -> Result<EnergyData, DataError> {
    let mut tariffs = block.tariffs;
    sort_tariffs(&mut tariffs);
    if tariffs.is_empty() {
        return Err(DataError::NoTariffs(energy_type));
    }

    let mut tariffs_tomorrow = tomorrow.map(|block| block.tariffs).unwrap_or_default();
    sort_tariffs(&mut tariffs_tomorrow);

    let unit = block
        .unit_of_measurement
        .as_deref()
        .filter(|unit| !unit.is_empty())
        .or(block.unit.as_deref())
        .unwrap_or_default()
        .trim();
    if unit.is_empty() {
        return Err(DataError::NoUnit(energy_type));
    }

    let amounts: Vec<f64> = tariffs.iter().filter_map(|tariff| tariff.total_amount).collect();
    let (min_price, max_price) = match amounts.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return Err(DataError::NoUsableTariffs(energy_type)),
        MinMaxResult::OneElement(amount) => (amount, amount),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    #[allow(clippy::cast_precision_loss)]
    let avg_price = amounts.iter().sum::<f64>() / amounts.len() as f64;

    Ok(EnergyData {
        tariffs,
        tariffs_tomorrow,
        unit: normalize_unit(unit),
        min_price,
        avg_price,
        max_price,
    })
}

/// Stable sort by start time; a tariff without a start time sorts first.
fn sort_tariffs(tariffs: &mut [Tariff]) {
    tariffs.sort_by(|left, right| {
        left.start.as_deref().unwrap_or_default().cmp(right.start.as_deref().unwrap_or_default())
    });
}

/// Canonicalize a unit string: `kwh` → `kWh`, `m3`/`m^3`/`m³` → `m³`,
/// anything else passes through verbatim.
fn normalize_unit(unit: &str) -> String {
    match unit.replace('³', "3").to_lowercase().as_str() {
        "kwh" => "kWh".to_string(),
        "m3" | "m^3" => "m³".to_string(),
        _ => unit.to_string(),
    }
}
