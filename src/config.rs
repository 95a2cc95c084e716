// src/config.rs

use crate::idx::IdxConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Serves the brokerage's listing pages.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "REALTY_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Worker threads for the HTTP server.
    #[arg(long, env = "REALTY_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Seed for the generated listing catalog. Random when omitted.
    #[arg(long, env = "REALTY_CATALOG_SEED")]
    pub catalog_seed: Option<u64>,

    /// IDX Broker REST endpoint.
    #[arg(long, env = "IDX_API_BASE", default_value = crate::idx::DEFAULT_API_BASE)]
    pub idx_api_base: String,

    /// IDX Broker access key. Live listings and /api/idx are disabled without it.
    #[arg(long, env = "IDX_API_KEY", hide_env_values = true)]
    pub idx_api_key: Option<String>,

    /// IDX account subdomain (<subdomain>.idxbroker.com).
    #[arg(long, env = "IDX_SUBDOMAIN", default_value = "realestate360")]
    pub idx_subdomain: String,

    /// Seconds before an IDX request is abandoned.
    #[arg(long, env = "IDX_TIMEOUT_SECS", default_value_t = 10)]
    pub idx_timeout_secs: u64,

    /// Widget id for the map search page.
    #[arg(long, env = "IDX_SEARCH_WIDGET", default_value_t = 135842)]
    pub search_widget_id: u32,

    /// Widget id for the sold/pending showcase page.
    #[arg(long, env = "IDX_SOLD_WIDGET", default_value_t = 135840)]
    pub sold_widget_id: u32,
}

/// Settings the request handlers need, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub idx: IdxConfig,
    pub idx_enabled: bool,
    pub search_widget_id: u32,
    pub sold_widget_id: u32,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        let access_key = args
            .idx_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Self {
            idx_enabled: access_key.is_some(),
            idx: IdxConfig {
                api_base: args.idx_api_base.clone(),
                access_key,
                subdomain: args.idx_subdomain.clone(),
                timeout: Duration::from_secs(args.idx_timeout_secs),
            },
            search_widget_id: args.search_widget_id,
            sold_widget_id: args.sold_widget_id,
        }
    }

    pub fn widget_script_url(&self, widget_id: u32) -> String {
        format!(
            "https://{}.idxbroker.com/idx/customshowcasejs.php?widgetid={widget_id}",
            self.idx.subdomain
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idx: IdxConfig::default(),
            idx_enabled: false,
            search_widget_id: 135842,
            sold_widget_id: 135840,
        }
    }
}
