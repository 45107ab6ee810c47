use std::net::IpAddr;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "atelier",
    about = "Atelier Gateway - HTTP API fronting vision-analysis and image-generation upstreams",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[arg(short, long, env = "ATELIER_PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "ATELIER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
