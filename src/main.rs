// LeadDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Either a headless load-filter-export run, or the eframe GUI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can keep using
// `crate::app::...`, `crate::core::...` etc.
pub use leaddeck::app;
pub use leaddeck::core;
pub use leaddeck::platform;
pub use leaddeck::ui;
pub use leaddeck::util;

use app::loader::{HttpLeadSource, LeadSource};
use app::state::LeadStore;
use clap::Parser;
use crate::core::model::TagFilter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// LeadDeck - lead-management dashboard.
///
/// Loads leads from a remote source, lets you search, filter and select
/// them, and exports the filtered view to CSV.
#[derive(Parser, Debug)]
#[command(name = "LeadDeck", version, about)]
struct Cli {
    /// Lead source URL (overrides config.toml).
    #[arg(short = 'u', long = "source-url")]
    source_url: Option<String>,

    /// Seed for reproducible tag assignment (overrides config.toml).
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Directory receiving CSV exports (overrides config.toml).
    #[arg(short = 'o', long = "export-dir")]
    export_dir: Option<PathBuf>,

    /// Load, filter and export once without opening a window.
    #[arg(long = "headless")]
    headless: bool,

    /// Search term applied in headless mode.
    #[arg(long = "search", requires = "headless")]
    search: Option<String>,

    /// Tag filter applied in headless mode: All, NoTags, or a tag name.
    #[arg(long = "tag", requires = "headless")]
    tag: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Load once, apply the CLI criteria, export the visible set.
fn run_headless(
    source: &dyn LeadSource,
    tag_seed: Option<u64>,
    export_dir: &std::path::Path,
    search: Option<String>,
    tag: Option<String>,
) -> util::error::Result<()> {
    let mut store = LeadStore::new();
    store.begin_load();
    match source.fetch() {
        Ok(records) => {
            let mut policy = crate::core::tagging::policy_for_seed(tag_seed);
            store.finish_load(records, policy.as_mut());
        }
        Err(e) => {
            store.fail_load(&e);
            return Err(e.into());
        }
    }

    if let Some(term) = search {
        store.set_search_term(term);
    }
    if let Some(tag) = tag {
        store.set_tag_filter(TagFilter::parse(&tag));
    }

    let now = chrono::Local::now().naive_local();
    let outcome = app::export::export_visible(&store, export_dir, now)?;
    println!("{}", outcome.path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take part in the
    // filter; its warnings are replayed once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    let level = config.log_level.as_deref();
    let _log_guard = match util::logging::init(cli.debug, level, config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            // Nothing was installed; fall back to stderr only.
            let _ = util::logging::init(cli.debug, level, None);
            tracing::warn!(error = %e, "Log file unavailable; logging to stderr only");
            None
        }
    };
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        headless = cli.headless,
        "LeadDeck starting"
    );

    let source_url = cli.source_url.unwrap_or_else(|| config.source_url.clone());
    let tag_seed = cli.seed.or(config.tag_seed);
    let export_dir = cli
        .export_dir
        .or_else(|| config.export_dir.clone())
        .unwrap_or_else(|| platform_paths.export_dir.clone());
    let connection_seed = tag_seed.unwrap_or(util::constants::DEFAULT_DRAW_SEED);

    let source = HttpLeadSource::new(
        source_url,
        Duration::from_secs(config.source_timeout_secs),
        connection_seed,
    );

    if cli.headless {
        if let Err(e) = run_headless(&source, tag_seed, &export_dir, cli.search, cli.tag) {
            tracing::error!(error = %e, "Headless run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            cc.egui_ctx.style_mut(|style| {
                if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
                    body.size = font_size;
                }
            });
            Ok(Box::new(gui::LeadDeckApp::new(
                LeadStore::new(),
                Arc::new(source),
                tag_seed,
                export_dir,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LeadDeck GUI: {e}");
        std::process::exit(1);
    }
}
