mod cli;

use cli::{Args, Command, LicenseCommand};
use hizzle_updater::application::dto::{ComponentState, UpdateReport};
use hizzle_updater::application::factories::UpdaterFactory;
use hizzle_updater::application::use_cases::{Updater, FAILED_CHECK_TTL};
use hizzle_updater::adapters::outbound::console::StderrProgressReporter;
use hizzle_updater::config::{discover_config, load_config_from_path, UpdaterConfig};
use hizzle_updater::ports::outbound::ProgressReporter;
use hizzle_updater::shared::error::{ExitCode, UpdaterError};
use hizzle_updater::shared::Result;
use hizzle_updater::update_check::domain::License;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(&args.log_level);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    tracing::debug!(state_dir = %config.state_dir.display(), inventory = %config.inventory.display(), "configuration loaded");

    let updater = UpdaterFactory::create(&config)?;
    let reporter = StderrProgressReporter::new();
    let palette = Palette::detect();

    match args.command {
        Command::Check {
            force,
            fail_on_updates,
        } => {
            let report = with_spinner(
                &reporter,
                "Checking for updates...",
                "✅ Update check complete",
                || updater.check_updates(force),
            )?;

            print_report(&report, &palette);

            if fail_on_updates && report.has_updates() {
                return Ok(ExitCode::UpdatesAvailable);
            }
        }
        Command::Status => print_status(&updater, &palette)?,
        Command::License(LicenseCommand::Show) => {
            let license = with_spinner(
                &reporter,
                "Validating license...",
                "✅ License checked",
                || updater.licenses().get_license_details(true),
            )?;
            match license {
                Some(license) => print_license(&license, &palette),
                None => println!("No active license"),
            }
        }
        Command::License(LicenseCommand::Activate { key }) => {
            let outcome = with_spinner(
                &reporter,
                "Activating license...",
                "✅ License activated",
                || updater.activate_license(&key),
            )?;
            if outcome.is_membership {
                println!("Membership license: all components are covered");
            }
            print_license(&outcome.license, &palette);
        }
        Command::License(LicenseCommand::Deactivate) => {
            with_spinner(
                &reporter,
                "Deactivating license...",
                "✅ License deactivated",
                || updater.deactivate_license(),
            )?;
            println!("License deactivated");
        }
        Command::Flush => {
            updater.on_update_applied()?;
            println!("Cached version data cleared");
        }
    }

    Ok(ExitCode::Success)
}

/// Runs a blocking call behind a spinner, reporting how it ended.
fn with_spinner<T>(
    reporter: &dyn ProgressReporter,
    waiting: &str,
    done: &str,
    call: impl FnOnce() -> std::result::Result<T, UpdaterError>,
) -> std::result::Result<T, UpdaterError> {
    reporter.start_waiting(waiting);
    match call() {
        Ok(value) => {
            reporter.report_completion(done);
            Ok(value)
        }
        Err(e) => {
            reporter.report_error(&format!("❌ {} failed", waiting.trim_end_matches("...")));
            Err(e)
        }
    }
}

fn load_config(args: &Args) -> Result<UpdaterConfig> {
    let file = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    let mut config = UpdaterConfig::try_from(file)?;
    if let Some(dir) = &args.state_dir {
        config.state_dir = dir.clone();
    }
    if let Some(path) = &args.inventory {
        config.inventory = path.clone();
    }
    Ok(config)
}

fn print_report(report: &UpdateReport, palette: &Palette) {
    if report.statuses.is_empty() {
        println!("No components installed");
        return;
    }

    let width = report
        .statuses
        .iter()
        .map(|status| status.identifier.len())
        .max()
        .unwrap_or(0);

    for status in &report.statuses {
        let state = match &status.state {
            ComponentState::UpToDate { .. } => palette.green("up to date"),
            ComponentState::UpdateAvailable {
                new_version,
                downloadable,
            } => {
                let note = if *downloadable {
                    ""
                } else {
                    " (license required to download)"
                };
                palette.yellow(&format!("update available: {}{}", new_version, note))
            }
            ComponentState::Failed { message } => palette.red(&format!("error: {}", message)),
            ComponentState::Unknown => palette.dim("no version data"),
        };
        println!(
            "{:<width$}  {:<12}  {}",
            status.identifier,
            status.installed_version,
            state,
            width = width
        );
    }

    if report
        .statuses
        .iter()
        .all(|status| status.state == ComponentState::Unknown)
    {
        println!(
            "Version data is unavailable; the check will be retried within {} minutes",
            FAILED_CHECK_TTL.as_secs() / 60
        );
    }

    println!();
    println!("{} update(s) available", report.update_count);
}

fn print_status(updater: &Updater, palette: &Palette) -> Result<()> {
    match updater.licenses().get_license_details(false)? {
        Some(license) => println!("License: {}", mask_key(license.key())),
        None => println!("License: {}", palette.dim("none")),
    }

    let count = updater.updates().get_update_count()?;
    println!("Updates available: {}", count);

    for update in updater.updates().pending_updates()? {
        let download = match &update.package {
            Some(_) => String::new(),
            None => format!(" {}", palette.dim("(license required to download)")),
        };
        println!(
            "  {} {} -> {}{}",
            update.identifier, update.installed_version, update.new_version, download
        );
    }
    Ok(())
}

fn print_license(license: &License, palette: &Palette) {
    println!("Key: {}", mask_key(license.key()));
    let active = if license.is_active_on_site() {
        palette.green("yes")
    } else {
        palette.red("no")
    };
    println!("Active on this site: {}", active);

    if let Value::Object(details) = license.raw_details() {
        for (field, value) in details {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            if field == "license_key" || field == "is_active_on_site" {
                continue;
            }
            println!("{}: {}", field, text);
        }
    }
}

/// Shows only the last four characters of a license key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Colors stdout only when it is a terminal
struct Palette {
    enabled: bool,
}

impl Palette {
    fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    fn green(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    fn red(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}
