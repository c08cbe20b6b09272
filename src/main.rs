mod app;
mod cli;
mod ui;

use retro_tasks::config;
use retro_tasks::todo;
use retro_tasks::utils;

use anyhow::{Result, anyhow};
use app::AppState;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::event::DisableMouseCapture;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::panic;
use todo::view::remaining_count;
use todo::{Category, Task, TaskStore};
use utils::paths::{get_config_path, get_crash_log_path, get_logs_dir};

/// Install a panic hook that restores the terminal and writes crash
/// information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode first so the report is readable
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);

        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {timestamp} ===\n");

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                let _ = writeln!(crash_report, "Message: {message}");
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                let _ = writeln!(crash_report, "Message: {message}");
            }

            if let Some(location) = panic_info.location() {
                let _ = writeln!(
                    crash_report,
                    "Location: {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                );
            }

            let _ = writeln!(
                crash_report,
                "\nBacktrace:\n{}",
                std::backtrace::Backtrace::force_capture()
            );
            crash_report.push('\n');

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to ~/.retro-tasks/logs/retrotasks.log.<date>
/// Log level can be controlled with RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {e}");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "retrotasks.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show { json }) => {
            handle_show(cli.category.as_deref(), json)?;
        }
        Some(Commands::InitConfig) => {
            handle_init_config()?;
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            let mut config = Config::load()?;
            if cli.dark {
                config.theme = "dark".to_string();
            }
            if let Some(category) = cli.category {
                config.default_category = category;
            }

            let store = TaskStore::seeded();
            if store.category(&config.default_category).is_none() {
                tracing::warn!(
                    category = %config.default_category,
                    "unknown default category, using the first one"
                );
            }

            tracing::info!(
                theme = %config.theme,
                category = %config.default_category,
                tasks = store.tasks().len(),
                "retrotasks starting"
            );

            let state = AppState::new(store, &config);
            ui::run_tui(state)?;

            tracing::info!("retrotasks exiting gracefully");
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct Snapshot<'a> {
    categories: Vec<&'a Category>,
    tasks: Vec<&'a Task>,
}

/// Categories to print: all of them, or the one named by `filter`.
fn selected_categories<'a>(store: &'a TaskStore, filter: Option<&str>) -> Result<Vec<&'a Category>> {
    match filter {
        Some(id) => {
            let category = store.category(id).ok_or_else(|| {
                let known: Vec<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
                anyhow!("Unknown category '{}'. Known categories: {}", id, known.join(", "))
            })?;
            Ok(vec![category])
        }
        None => Ok(store.categories().iter().collect()),
    }
}

fn format_checklist(store: &TaskStore, categories: &[&Category], date_format: &str) -> String {
    let mut out = String::new();
    for category in categories {
        let tasks = store.tasks_in_category(&category.id);
        let _ = writeln!(
            out,
            "\n{} ({} remaining)",
            category.label(),
            remaining_count(&tasks)
        );
        if tasks.is_empty() {
            let _ = writeln!(out, "  (no tasks)");
        }
        for (idx, task) in tasks.iter().enumerate() {
            let due = task
                .due_date
                .map(|d| format!("  Due: {}", d.format(date_format)))
                .unwrap_or_default();
            let _ = writeln!(out, "  {}. {} {}{}", idx + 1, task.checkbox(), task.title, due);
        }
    }
    out
}

fn handle_show(category: Option<&str>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let store = TaskStore::seeded();
    let categories = selected_categories(&store, category)?;

    if json {
        let tasks = categories
            .iter()
            .flat_map(|c| store.tasks_in_category(&c.id))
            .collect();
        let snapshot = Snapshot { categories, tasks };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", format_checklist(&store, &categories, &config.validated_date_format()));
    Ok(())
}

fn handle_init_config() -> Result<()> {
    let config_path = get_config_path()?;

    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Created config file: {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selected_categories_all() {
        let store = TaskStore::seeded();
        let categories = selected_categories(&store, None).unwrap();
        assert_eq!(categories.len(), 7);
    }

    #[test]
    fn test_selected_categories_filter() {
        let store = TaskStore::seeded();
        let categories = selected_categories(&store, Some("shopping")).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "shopping");
    }

    #[test]
    fn test_selected_categories_unknown() {
        let store = TaskStore::seeded();
        let err = selected_categories(&store, Some("garden")).unwrap_err();
        assert!(err.to_string().contains("Unknown category 'garden'"));
        assert!(err.to_string().contains("work"));
    }

    #[test]
    fn test_format_checklist() {
        let store = TaskStore::seeded();
        let categories = selected_categories(&store, Some("work")).unwrap();
        let out = format_checklist(&store, &categories, "%Y-%m-%d");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                "💼 Work (3 remaining)",
                "  1. [ ] Complete quarterly report  Due: 2025-04-15",
                "  2. [x] Review team presentations",
                "  3. [ ] Schedule client meeting  Due: 2025-04-20",
                "  4. [ ] Prepare for conference",
            ]
        );
    }

    #[test]
    fn test_format_checklist_empty_category() {
        let store = TaskStore::seeded();
        let categories = selected_categories(&store, Some("home")).unwrap();
        let out = format_checklist(&store, &categories, "%Y-%m-%d");
        assert!(out.contains("(no tasks)"));
    }

    #[test]
    fn test_snapshot_json() {
        let store = TaskStore::seeded();
        let categories = selected_categories(&store, Some("health")).unwrap();
        let tasks = store.tasks_in_category("health");
        let json = serde_json::to_value(Snapshot { categories, tasks }).unwrap();

        assert_eq!(json["categories"][0]["id"], "health");
        assert_eq!(json["tasks"].as_array().map(|t| t.len()), Some(3));
        assert_eq!(json["tasks"][0]["category_id"], "health");
    }
}
