mod cli;
mod tables;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use essent_prices::{Api, EnergyData, EnergyType};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::Args,
    tables::{build_summary_table, build_tariff_table},
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let api = Api::builder()
        .client(reqwest::Client::builder().build()?)
        .endpoint(args.endpoint)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build();
    let prices = api.get_prices().await?;
    info!(
        n_electricity_tariffs = prices.electricity.tariffs.len(),
        n_gas_tariffs = prices.gas.tariffs.len(),
        "Fetched and normalized"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prices)?);
        return Ok(());
    }

    print_energy(EnergyType::Electricity, &prices.electricity);
    print_energy(EnergyType::Gas, &prices.gas);
    Ok(())
}

fn print_energy(energy_type: EnergyType, data: &EnergyData) {
    println!("\n{energy_type}:");
    println!("{}", build_summary_table(data));
    println!("{}", build_tariff_table(&data.tariffs, data));
    if !data.tariffs_tomorrow.is_empty() {
        println!("{energy_type}, tomorrow:");
        println!("{}", build_tariff_table(&data.tariffs_tomorrow, data));
    }
}
