use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::core::app::App;
use crate::core::config::{AppConfig, EXAMPLE_CONFIG_FILE};
use crate::core::directory::MunicipalityDirectory;
use crate::utils::network::{resolve_addr, with_free_port};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (will find next available port if this one is in use)
    #[arg(short, long)]
    port: Option<u16>,

    /// Municipality dataset (JSON) to use instead of the bundled one
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Print suggestions for this text and exit instead of serving
    #[arg(short, long)]
    query: Option<String>,

    /// Maximum number of suggestions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print suggestions as JSON records
    #[arg(long, requires = "query")]
    json: bool,

    /// Open web browser automatically
    #[arg(short, long)]
    open: bool,

    /// Generate example configuration file
    #[arg(long)]
    generate_config: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        // Generate config file if requested
        if self.generate_config {
            AppConfig::save_example()?;
            println!("Generated example configuration file: {}", EXAMPLE_CONFIG_FILE);
            return Ok(());
        }

        let config = self.resolve_config();
        let directory = Arc::new(MunicipalityDirectory::from_path(config.dataset.path.clone()));

        if let Some(ref query) = self.query {
            let limit = config.search.effective_limit(self.limit);
            return self.print_suggestions(&directory, query, limit);
        }

        let addr = with_free_port(resolve_addr(&config.server.host, config.server.port)?);
        let app = App::new(addr, directory, config.search, config.ui.open_browser);

        app.run().await
    }

    /// Configuration file and environment, then command line flags on top.
    fn resolve_config(&self) -> AppConfig {
        let mut config = AppConfig::load().unwrap_or_else(|e| {
            info!("Using default configuration ({})", e);
            AppConfig::default()
        });

        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref dataset) = self.dataset {
            config.dataset.path = Some(dataset.clone());
        }
        if let Some(limit) = self.limit {
            config.search.max_limit = config.search.max_limit.max(limit);
        }
        if self.open {
            config.ui.open_browser = true;
        }

        config
    }

    fn print_suggestions(&self, directory: &MunicipalityDirectory, query: &str, limit: usize) -> Result<()> {
        let results = directory.search(query, limit)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else if results.is_empty() {
            println!("No municipalities match {:?}", query);
        } else {
            for record in results {
                println!("{}", record.label);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_flags() {
        let cli = Cli::parse_from(["yourroom-places", "--query", "mad", "--limit", "3", "--json"]);

        assert_eq!(cli.query.as_deref(), Some("mad"));
        assert_eq!(cli.limit, Some(3));
        assert!(cli.json);
        assert!(!cli.generate_config);
    }

    #[test]
    fn test_json_requires_query() {
        assert!(Cli::try_parse_from(["yourroom-places", "--json"]).is_err());
    }

    #[test]
    fn test_parse_server_flags() {
        let cli = Cli::parse_from(["yourroom-places", "-p", "9000", "-d", "/data/m.json", "--open"]);

        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.dataset, Some(PathBuf::from("/data/m.json")));
        assert!(cli.open);
        assert!(cli.query.is_none());
    }
}
