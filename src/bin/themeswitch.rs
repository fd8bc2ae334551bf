//! Command line front-end: inspect, set and toggle a persisted theme.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use themeswitch::{
    default_store_path, ClassList, ColorMode, FileStorage, OsColorScheme, Theme, ThemeChildren,
    ThemeConfig, ThemeStore, ThemeToggle, DEFAULT_STORAGE_KEY,
};

#[derive(Debug, Parser)]
#[command(name = "themeswitch", version, about = "Inspect and switch the persisted UI theme")]
struct Cli {
    /// JSON file the preference is stored in [default: $THEMESWITCH_FILE or .themeswitch.json]
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Key the preference is stored under
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Theme used when nothing valid is stored
    #[arg(long = "default", global = true, default_value = "system")]
    default_theme: Theme,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored theme and the mode it resolves to (default)
    Show,
    /// Store a theme
    Set {
        /// One of: light, dark, system
        theme: Theme,
    },
    /// Advance to the next theme in the rotation
    Toggle {
        /// Rotate through light, dark and system instead of light and dark
        #[arg(long)]
        system: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let path = cli.file.clone().unwrap_or_else(default_store_path);
    tracing::debug!(path = %path.display(), key = %cli.key, "opening theme store");

    let root = Rc::new(ClassList::new());
    let store = ThemeStore::new(
        ThemeConfig::new(cli.default_theme, cli.key.clone()),
        Rc::new(FileStorage::new(&path)),
        Rc::new(OsColorScheme::new()),
        root.clone(),
    );

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Set { theme } => {
            store.set_theme(theme);
            tracing::info!(%theme, "stored theme");
        }
        Command::Toggle { system } => {
            let mut toggle = ThemeToggle::<&str>::builder(store.clone())
                .include_system_preference(system)
                .build();
            let next = toggle.activate(());
            tracing::info!(theme = %next, mode = %toggle.store().color_mode(), "toggled theme");
        }
    }

    let mode = root
        .color_mode()
        .context("presentation root has no color marker")?;
    print_theme(store.theme(), mode, system_label(&store));
    Ok(())
}

fn system_label(store: &ThemeStore) -> String {
    let toggle = ThemeToggle::<String>::builder(store.clone())
        .include_system_preference(true)
        .theme_children(ThemeChildren::new().system(format!("system ({})", store.color_mode())))
        .build();
    toggle.to_string()
}

fn print_theme(theme: Theme, mode: ColorMode, label: String) {
    let marker = match mode {
        ColorMode::Dark => style(mode.marker()).white().on_black().bold(),
        ColorMode::Light => style(mode.marker()).black().on_white().bold(),
    };
    let label = if theme.is_system() {
        style(label).cyan()
    } else {
        style(label).green()
    };
    println!("{label} {marker}");
}
