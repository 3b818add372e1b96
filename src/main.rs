use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use difftime::format::format_relative_time_str;
use difftime::live::{DiffTime, RenderContext};
use difftime::util::config::{AppConfig, WatchTarget};
use difftime::util::time::{parse_instant, to_iso8601};

#[derive(Parser, Debug)]
#[command(name = "difftime", version, about = "Human-readable relative times")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print TARGET relative to now, e.g. "2 hours ago"
    Format {
        /// RFC 3339 timestamp
        target: String,

        /// Reference time instead of the current time
        #[arg(long)]
        now: Option<String>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print an HTML element showing TARGET relative to now
    Render {
        /// RFC 3339 timestamp
        target: String,

        /// Reference time instead of the current time
        #[arg(long)]
        now: Option<String>,

        /// Element name (default from config, else "span")
        #[arg(short, long)]
        element: Option<String>,

        /// Extra attribute, repeatable
        #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,

        /// Mark the element for in-browser refresh and include the updater script
        #[arg(long)]
        auto_update: bool,
    },
    /// Show targets in a terminal view that refreshes every minute
    Watch {
        /// Timestamps to watch, optionally as LABEL=TIMESTAMP
        targets: Vec<String>,
    },
}

#[derive(Serialize)]
struct FormatOutput {
    target: String,
    now: String,
    text: String,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("difftime starting");

    match cli.command {
        Command::Format { target, now, json } => {
            let now = now.unwrap_or_else(|| to_iso8601(&Utc::now()));
            let text = match format_relative_time_str(&target, &now) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Invalid input: {e}");
                    std::process::exit(1);
                }
            };
            if json {
                let output = FormatOutput { target, now, text };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{text}");
            }
        }
        Command::Render {
            target,
            now,
            element,
            attrs,
            auto_update,
        } => {
            let (target_at, now_at) = match (
                parse_instant(&target),
                now.as_deref().map(parse_instant).transpose(),
            ) {
                (Ok(t), Ok(n)) => (t, n.unwrap_or_else(Utc::now)),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("Invalid input: {e}");
                    std::process::exit(1);
                }
            };

            let mut diff_time = DiffTime::new(target_at)
                .element(element.unwrap_or(config.render.element.clone()))
                .auto_update(auto_update || config.render.auto_update);
            for (key, value) in attrs {
                diff_time = diff_time.attr(key, value);
            }
            println!(
                "{}",
                diff_time.render(&now_at, &mut RenderContext::new()).into_string()
            );
        }
        Command::Watch { targets } => {
            let mut all = config.watch.targets.clone();
            all.extend(targets.iter().enumerate().map(|(i, arg)| watch_target(i, arg)));
            difftime::app::event_loop::run(all).await?;
        }
    }

    Ok(())
}

fn watch_target(index: usize, arg: &str) -> WatchTarget {
    match arg.split_once('=') {
        Some((label, at)) => WatchTarget {
            label: label.to_string(),
            at: at.to_string(),
        },
        None => WatchTarget {
            label: format!("#{}", index + 1),
            at: arg.to_string(),
        },
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "difftime.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(config.log.filter.as_str())
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
