use std::sync::Arc;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use rusty_fetch::{run, HttpFetcher, Mode, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "rusty-fetch", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// `--without-concurrent` or `--with-concurrent`
    #[arg(allow_hyphen_values = true)]
    mode: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => return,
    };

    let mode = match args.mode.as_deref() {
        None | Some("") => {
            println!("arguments are missing");
            return;
        }
        Some(arg) => match Mode::from_arg(arg) {
            Some(mode) => mode,
            None => return,
        },
    };

    let config = RunConfig::default();
    let fetcher = match HttpFetcher::new(config.clone()) {
        Ok(fetcher) => Arc::new(fetcher),
        Err(e) => {
            error!(error = %e, "failed to set up fetcher");
            return;
        }
    };

    println!("{}", mode.banner());
    let summary = run(mode, fetcher, &config).await;
    println!("{}", summary);
}
