//! Terminal UI (TUI) app for keeping a shopping list
//!
//! Items live in memory for the lifetime of the process. Only UI preferences
//! (theme, notification timeout) are saved to disk.
//!
//! # Features:
//!
//! - Add items with a name, quantity and unit (gm, kg, pkt)
//! - Edit the name and quantity of an item in place
//! - Delete items
//! - Cycle color themes
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! shoplist --help
//!
//! # launch application
//! shoplist
//!
//! # launch with debug logs written to a file
//! shoplist --debug --log-file /tmp/shoplist.log
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use config::{Config, ConfigManager};
use directories::ProjectDirs;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{cell::RefCell, fs, io, path::PathBuf, rc::Rc};

use crate::{
    renderer::Renderer,
    store::{Store, effect::Effect, reducer::StoreReducer, state::State},
    ui::colors::Theme,
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level instead of info
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Write logs to this file. Logging is disabled when omitted
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme for this run (Blue, Emerald, Indigo, Red)
    #[arg(short, long)]
    theme: Option<Theme>,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let Some(path) = args.log_file.as_ref() else {
        // the terminal is owned by the UI so there is nowhere else to log
        return Ok(());
    };

    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let file = fs::File::create(path)?;

    simplelog::WriteLogger::init(filter, simplelog::Config::default(), file)?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path() -> Result<String> {
    let project_dir = ProjectDirs::from("", "", "shoplist")
        .ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn resolve_config_path(args: &Args) -> Result<String> {
    match args.config.as_ref() {
        Some(path) => path
            .to_str()
            .map(String::from)
            .ok_or(eyre!("unable to use config file path {:?}", path)),
        None => get_project_config_path(),
    }
}

#[doc(hidden)]
fn create_config_manager(path: String) -> Result<ConfigManager> {
    ConfigManager::builder().path(path).build()
}

#[doc(hidden)]
fn get_current_config(config_manager: &ConfigManager, args: &Args) -> Config {
    let mut config = config_manager.get();

    // a theme from the command line only applies to this run
    if let Some(theme) = args.theme {
        config.theme = theme.to_string();
    }

    config
}

#[doc(hidden)]
fn register_effect_handler(
    config_manager: Rc<RefCell<ConfigManager>>,
    store: &mut Store,
) {
    store.set_effect_handler(move |effect: Effect| match effect {
        Effect::SaveConfig(config) => {
            log::info!("saving config");
            config_manager.borrow_mut().update(config)
        }
        Effect::None => Ok(()),
    });
}

#[doc(hidden)]
fn init(args: &Args) -> Result<Store> {
    let config_path = resolve_config_path(args)?;
    log::info!("using config file {config_path}");

    let config_manager = create_config_manager(config_path)?;
    let config = get_current_config(&config_manager, args);

    let true_color_enabled = supports_color::on(supports_color::Stream::Stdout)
        .is_some_and(|level| level.has_16m);

    let mut store = Store::new(
        State::new(config, true_color_enabled),
        StoreReducer::boxed(),
    );

    register_effect_handler(Rc::new(RefCell::new(config_manager)), &mut store);

    Ok(store)
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let store = Rc::new(init(&args)?);

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let renderer = Renderer::new(terminal, store);

    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
