use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdns_zone::{ClientConfig, PowerDnsClient, config::DEFAULT_VHOST};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// PowerDNS API URL (e.g. http://127.0.0.1:8081/api/v1)
    #[arg(long, value_name = "URL", env = "PDNS_URL")]
    base_url: String,
    /// PowerDNS server ID
    #[arg(long, value_name = "ID", env = "PDNS_VHOST", default_value = DEFAULT_VHOST)]
    vhost: String,
    /// Zone to manage (e.g. example.com)
    #[arg(long, value_name = "ZONE", env = "PDNS_ZONE")]
    zone: String,
    /// PowerDNS API key
    #[arg(long, value_name = "KEY", env = "PDNS_API_KEY", hide_env_values = true)]
    api_key: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every record of the zone, one per content value
    Records,
    /// List records grouped by name and type
    Combined,
    /// Replace the contents of a name/type pair
    Add {
        name: String,
        #[arg(value_name = "TYPE")]
        rrtype: String,
        ttl: u32,
        #[arg(required = true)]
        contents: Vec<String>,
    },
    /// Remove a name/type pair
    Delete {
        name: String,
        #[arg(value_name = "TYPE")]
        rrtype: String,
        #[arg(long, default_value_t = 0)]
        ttl: u32,
        contents: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url, cli.vhost, cli.zone, cli.api_key)?;
    let client = PowerDnsClient::new(config)?;

    match cli.command {
        Command::Records => {
            let records = client
                .get_records()
                .await
                .context("failed to fetch records")?;
            print_json(&records)?;
        }
        Command::Combined => {
            let records = client
                .get_combined_records()
                .await
                .context("failed to fetch records")?;
            print_json(&records)?;
        }
        Command::Add {
            name,
            rrtype,
            ttl,
            contents,
        } => {
            client
                .add_record(&name, &rrtype, ttl, &contents)
                .await
                .with_context(|| format!("failed to add {name} {rrtype}"))?;
            info!("replaced {} {} in {}", name, rrtype, client.config().zone());
        }
        Command::Delete {
            name,
            rrtype,
            ttl,
            contents,
        } => {
            client
                .delete_record(&name, &rrtype, ttl, &contents)
                .await
                .with_context(|| format!("failed to delete {name} {rrtype}"))?;
            info!("deleted {} {} from {}", name, rrtype, client.config().zone());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
