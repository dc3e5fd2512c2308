use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use shipnote::cli::orchestration::{run_release_workflow, ReleaseWorkflowArgs, DEFAULT_PR_TITLE};
use shipnote::config::{load_config, Config};
use shipnote::server::{create_app, Server};
use shipnote::sink::EnvFileSink;
use shipnote::ui;

#[derive(Parser)]
#[command(
    name = "shipnote",
    version,
    about = "Bump versions and write changelogs from conventional commits"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump the manifest version and write the changelog and release notes
    Release(ReleaseArgs),
    /// Run the HTTP scaffold
    Serve(ServeArgs),
}

#[derive(Args)]
struct ReleaseArgs {
    #[arg(long, default_value = "patch", help = "Version bump: major, minor or patch")]
    bump_type: String,

    #[arg(long, conflicts_with = "commits_file", help = "JSON array of commit messages")]
    commits: Option<String>,

    #[arg(long, help = "File holding a JSON array of commit messages")]
    commits_file: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_PR_TITLE, help = "Title of the merged pull request")]
    pr_title: String,

    #[arg(long, help = "Number of the merged pull request")]
    pr_number: Option<String>,

    #[arg(long, help = "Release date as YYYY-MM-DD (defaults to today, UTC)")]
    date: Option<String>,

    #[arg(long, help = "Preview what would happen without writing any file")]
    dry_run: bool,
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long, help = "Address to bind")]
    host: Option<String>,

    #[arg(short, long, env = "PORT", help = "Port to listen on")]
    port: Option<u16>,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Release(args) => {
            init_tracing("warn");
            let config = match load_config(cli.config.as_deref()) {
                Ok(cfg) => cfg,
                Err(e) => {
                    ui::display_error(&format!("Error loading config: {}", e));
                    std::process::exit(1);
                }
            };
            release(args, &config);
            Ok(())
        }
        Command::Serve(args) => {
            init_tracing("info");
            let config = load_config(cli.config.as_deref()).context("loading configuration")?;
            serve(args, config)
        }
    }
}

fn release(args: ReleaseArgs, config: &Config) {
    let workflow_args = ReleaseWorkflowArgs {
        bump_type: args.bump_type,
        commits_json: args.commits,
        commits_file: args.commits_file,
        pr_title: args.pr_title,
        pr_number: args.pr_number,
        date: args.date,
        dry_run: args.dry_run,
    };

    let sink = EnvFileSink::from_env(&config.files.env_file, &config.env.github_env_var);

    match run_release_workflow(&workflow_args, config, &sink) {
        Ok(result) => ui::display_release_report(&result),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn serve(args: ServeArgs, config: Config) -> Result<()> {
    let mut server_config = config.server;
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime.block_on(async {
        let app = create_app(&server_config)?;
        Server::bind(&server_config.host, server_config.port)?
            .serve(app)
            .await
    })?;
    Ok(())
}
