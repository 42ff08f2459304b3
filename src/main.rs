use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use linkform::{
    api,
    config::{parse_base_url, Config},
    form::Notice,
    logging, session,
    state::AppState,
    HttpShortener, ShortenForm, SystemClipboard,
};
use tokio::{io::BufReader, net::TcpListener};

#[derive(Debug, Parser)]
#[command(name = "linkform", version, about = "Shorten links through a shortening service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive prompt (default)
    Form,
    /// Shorten a single URL and print the short link
    Shorten {
        url: String,
        /// Also copy the short link to the clipboard
        #[arg(long)]
        copy: bool,
        /// Seconds to keep owning the clipboard before exiting (Linux)
        #[arg(long, default_value_t = 30)]
        hold_secs: u64,
    },
    /// Run the in-memory development shortening endpoint
    Serve {
        /// Bind address, overrides SERVER_ADDRESS
        #[arg(long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _log_guard = logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => {
            let form = build_form(&config, SystemClipboard::new())?;
            let mut stdout = std::io::stdout();
            session::run(&form, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
        }
        Command::Shorten {
            url,
            copy,
            hold_secs,
        } => {
            let hold = Duration::from_secs(hold_secs);
            let form = build_form(&config, SystemClipboard::holding_for(hold))?;
            let result = form.submit(&url).await;
            eprintln!("{}", Notice::for_submission(&result));
            let link = result?;
            println!("{}", link);
            if copy {
                if cfg!(target_os = "linux") && !hold.is_zero() {
                    eprintln!(
                        "[info] Keeping the short URL on the clipboard for up to {}s",
                        hold.as_secs()
                    );
                }
                eprintln!("{}", Notice::for_copy(&form.copy_to_clipboard()));
            }
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.server_addr.clone());
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            let base_url = match std::env::var("BACKEND_URL") {
                Ok(value) => parse_base_url("BACKEND_URL", &value)?,
                Err(_) => format!("http://{}", listener.local_addr()?),
            };
            api::serve(listener, AppState::new(base_url)).await?;
        }
    }

    Ok(())
}

fn build_form(
    config: &Config,
    clipboard: SystemClipboard,
) -> anyhow::Result<ShortenForm<HttpShortener, SystemClipboard>> {
    let service = HttpShortener::new(&config.base_url, config.request_timeout)
        .context("failed to build HTTP client")?;
    Ok(
        ShortenForm::new(config.base_url.clone(), service, clipboard)
            .with_timeout(config.request_timeout),
    )
}
