//! `qr-brand` command-line front end.
//!
//! Collects the URL and output name (from arguments or an interactive
//! prompt), resolves theme and config, and runs one generation request.

mod args;
mod config;
mod prompt;
mod request;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Args;
use config::AppConfig;
use prompt::PromptPlan;
use qr_brand::Theme;

fn main() -> anyhow::Result<()> {
    // Step 1: Tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.list_themes {
        print_themes();
        return Ok(());
    }
    if args.list_settings {
        print_settings();
        return Ok(());
    }

    // Step 2: Config
    config::load_dotenv();
    let config = AppConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    // Step 3: Input
    let plan = PromptPlan::new(
        args.url.is_some(),
        args.output.is_some(),
        args.name_from_url,
        args.interactive,
    );
    let (url, filename) = if plan.needs_prompt() {
        let answers = prompt::ask(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            args.url.as_deref(),
            plan.ask_filename,
        )
        .context("Failed to read input")?;
        (answers.url, answers.filename.or_else(|| args.output.clone()))
    } else {
        (args.url.clone().unwrap_or_default(), args.output.clone())
    };

    // Step 4: Generate
    let request = request::build_request(&args, &url, filename.as_deref(), &config)?;
    println!("Generating ...");
    let path = qr_brand::generate(request)
        .with_context(|| format!("Failed to generate QR code for {url}"))?;

    println!("***  QR code saved to: {}  ***", path.display());
    Ok(())
}

fn print_themes() {
    for theme in Theme::ALL {
        println!(
            "{:<16} {:<26} fg={} bg={} logo={}",
            theme.slug(),
            theme.label(),
            theme.foreground(),
            theme.background(),
            theme.logo_file()
        );
    }
}

fn print_settings() {
    for def in config::defaults::DEFAULT_SETTINGS {
        let default = if def.default.is_empty() { "-" } else { def.default };
        println!("{:<26} {:<14} {}", def.key, default, def.description);
    }
}
