// arrviz: step-by-step array operation visualizer

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use arrviz::command::{parse_command, parse_operand};
use arrviz::config::Config;
use arrviz::session::Visualizer;
use arrviz::ui::App;

/// Animate array operations step by step
#[derive(Debug, Parser)]
#[command(name = "arrviz", version, about)]
struct Cli {
    /// Initial array, comma separated (overrides the config file)
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_operand,
        allow_negative_numbers = true
    )]
    array: Option<Vec<i64>>,

    /// Autoplay interval in milliseconds (overrides the config file)
    #[arg(long)]
    interval: Option<u64>,

    /// Configuration file (default: ~/.config/arrviz/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the operation's steps as text and exit
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print the operation's steps as JSON and exit
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Operation to run first, e.g. `push 60` or `slice 1 4`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    operation: Vec<String>,
}

fn init_tracing(verbose: u8, default_level: &str) {
    let level = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(cli.verbose, &config.log_level);

    let array = cli.array.clone().unwrap_or_else(|| config.initial_array.clone());
    let interval = cli
        .interval
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.playback.interval());
    tracing::debug!(?array, interval_ms = interval.as_millis() as u64, "starting");

    let mut visualizer = Visualizer::new(array, interval, config.playback.limits());

    if !cli.operation.is_empty() {
        let line = cli.operation.join(" ");
        let command =
            parse_command(&line).with_context(|| format!("Invalid operation '{}'", line))?;
        visualizer.execute(&command);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(visualizer.playback().timeline())?;
        println!("{}", json);
        return Ok(());
    }

    if cli.print {
        let timeline = visualizer.playback().timeline();
        for (i, snapshot) in timeline.iter().enumerate() {
            println!("{}/{} {}", i + 1, timeline.len(), snapshot);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(visualizer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("TUI error")
}
