//! Domain Inventory CLI
//!
//! Builds (or reuses) the local inventory cache of every configured registrar
//! account, then answers "who owns this domain?" queries interactively.

mod input;
mod render;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use domain_inventory_app::{AppState, BootstrapOptions, DEFAULT_CONFIG_DIR, DEFAULT_DATABASE_PATH};
use domain_inventory_core::CoreError;
use domain_inventory_core::services::LookupService;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use input::Input;

/// `domain-inventory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain-inventory",
    about = "Find which OVH / Cloudflare / GoDaddy / DonDominio account owns a domain",
    version
)]
struct Args {
    /// SQLite cache file.
    #[arg(long, env = "DOMAIN_INVENTORY_DB", default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// Directory holding the `*.list` credential files.
    #[arg(long, env = "DOMAIN_INVENTORY_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Force cache regeneration.
    #[arg(long)]
    regenerate: bool,

    /// Exit after startup without waiting for input.
    #[arg(long)]
    exit_immediately: bool,

    /// Answer a single query, then exit.
    #[arg(long)]
    once: bool,

    /// SOCKS5 proxy (`host:port`) used for DonDominio only.
    #[arg(long, env = "DOMAIN_INVENTORY_PROXY", value_name = "HOST:PORT")]
    proxy_address: Option<String>,

    /// Timeout for each live NS / WHOIS lookup, in seconds.
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    lookup_timeout: u64,

    /// Debug logging.
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            database_path: self.database.clone(),
            config_dir: self.config_dir.clone(),
            proxy_address: self.proxy_address.clone().filter(|p| !p.trim().is_empty()),
            regenerate: self.regenerate,
            lookup_timeout: Duration::from_secs(self.lookup_timeout),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the interactive output.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(args: Args) -> Result<()> {
    let mut stdout = std::io::stdout();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    render::banner(&mut stdout, &args.database.display().to_string())?;

    let state = match AppState::bootstrap(&args.bootstrap_options()).await {
        Ok(state) => state,
        Err(CoreError::RefreshIncomplete(outcome)) => {
            // 已拉取的记录留在库里，但退出码必须反映失败
            render::refresh_summary(&mut stdout, &outcome)?;
            bail!(
                "Startup failed: {} provider/account failure(s) during refresh",
                outcome.failures.len()
            );
        }
        Err(e) => return Err(e).context("Startup failed"),
    };
    render::startup_summary(&mut stdout, &state)?;

    if args.exit_immediately {
        return Ok(());
    }

    search_loop(&state.lookup_service, args.once).await
}

/// 读取 → 查询 → 输出，直到 EOF（`once` 时只处理一行）
async fn search_loop(lookup: &LookupService, once: bool) -> Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();
    let mut stdout = std::io::stdout();

    writeln!(stdout)?;
    loop {
        write!(stdout, "{}", render::PROMPT)?;
        stdout.flush()?;

        if !input::read_line(&mut reader, &mut line)
            .await
            .context("Failed to read input")?
        {
            writeln!(stdout)?;
            return Ok(());
        }

        match input::classify(&line) {
            Input::Skip => {}
            Input::TooLong => render::too_long(&mut stdout)?,
            Input::Query(query) => match lookup.lookup(query).await {
                Ok(outcome) => render::outcome(&mut stdout, &outcome)?,
                Err(e) => {
                    tracing::error!("Lookup failed: {e}");
                    render::lookup_error(&mut stdout, &e)?;
                }
            },
        }

        if once {
            return Ok(());
        }
    }
}
