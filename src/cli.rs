use clap::Parser;
use essent_prices::API_ENDPOINT;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// API endpoint override, mostly useful for testing.
    #[clap(long, env = "ESSENT_ENDPOINT", default_value = API_ENDPOINT)]
    pub endpoint: String,

    /// Total request timeout in seconds.
    #[clap(long = "timeout-secs", default_value = "10", env = "ESSENT_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Print the normalized prices as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}
