// LeadDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and owns the load and export lifecycles.

use crate::app::export;
use crate::app::loader::{LeadSource, LoadManager, LoadProgress};
use crate::app::state::LeadStore;
use crate::core::model::DashboardTab;
use crate::core::tagging;
use crate::platform;
use crate::ui;
use crate::ui::panels::toolbar::ToolbarAction;
use crate::util::constants;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The LeadDeck application.
pub struct LeadDeckApp {
    pub store: LeadStore,
    pub load_manager: LoadManager,
    source: Arc<dyn LeadSource>,
    tag_seed: Option<u64>,
    export_dir: PathBuf,

    /// Search box buffer; pushed to the store on every edit.
    search_draft: String,
    /// Highlighted sidebar entry.
    nav_active: usize,
    /// Path of the last export and when its notice expires.
    export_notice: Option<(PathBuf, Instant)>,
    /// Blocking message shown in a small window (e.g. empty export).
    alert: Option<String>,
}

impl LeadDeckApp {
    /// Create the application and kick off the initial load.
    pub fn new(
        store: LeadStore,
        source: Arc<dyn LeadSource>,
        tag_seed: Option<u64>,
        export_dir: PathBuf,
    ) -> Self {
        let mut app = Self {
            store,
            load_manager: LoadManager::new(),
            source,
            tag_seed,
            export_dir,
            search_draft: String::new(),
            nav_active: 0,
            export_notice: None,
            alert: None,
        };
        app.request_load();
        app
    }

    /// Start a load unless one is already outstanding.
    fn request_load(&mut self) {
        if self.store.begin_load() {
            self.load_manager.start_load(Arc::clone(&self.source));
        }
    }

    fn apply_load_progress(&mut self) -> bool {
        let messages = self.load_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                LoadProgress::Started { source } => {
                    self.store.status_message = format!("Loading leads from {source}...");
                }
                LoadProgress::Completed { records } => {
                    let mut policy = tagging::policy_for_seed(self.tag_seed);
                    self.store.finish_load(records, policy.as_mut());
                }
                LoadProgress::Failed { error } => {
                    self.store.fail_load(&error);
                }
            }
        }
        had_messages
    }

    fn export(&mut self) {
        let now = chrono::Local::now().naive_local();
        match export::export_visible(&self.store, &self.export_dir, now) {
            Ok(outcome) => {
                self.store.status_message = format!(
                    "Exported {} leads to {} ({}).",
                    outcome.count,
                    outcome.path.display(),
                    constants::CSV_MIME_TYPE
                );
                self.export_notice = Some((
                    outcome.path,
                    Instant::now() + Duration::from_secs(constants::EXPORT_NOTICE_SECS),
                ));
            }
            Err(crate::util::error::ExportError::NothingToExport) => {
                self.alert = Some("No data to export!".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                self.store.status_message = format!("Export failed: {e}");
            }
        }
    }
}

impl eframe::App for LeadDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let had_messages = self.apply_load_progress();
        if had_messages || self.store.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(constants::LOAD_POLL_INTERVAL_MS));
        }

        let notice_expired = self
            .export_notice
            .as_ref()
            .map(|(_, until)| Instant::now() >= *until);
        match notice_expired {
            Some(true) => self.export_notice = None,
            Some(false) => ctx.request_repaint_after(Duration::from_millis(250)),
            None => {}
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add_enabled(!self.store.is_loading(), egui::Button::new("Reload Leads"))
                        .clicked()
                    {
                        self.request_load();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Choose Export Folder\u{2026}").clicked() {
                        if let Some(dir) = rfd::FileDialog::new()
                            .set_directory(&self.export_dir)
                            .pick_folder()
                        {
                            tracing::info!(dir = %dir.display(), "Export folder changed");
                            self.export_dir = dir;
                        }
                        ui.close_menu();
                    }
                    if ui.button("Open Export Folder").clicked() {
                        platform::fs::open_dir(&self.export_dir);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.store.status_message);
                if let Some((path, _)) = &self.export_notice {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "\u{2714} Export complete: {}",
                            path.file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default()
                        ))
                        .color(ui::theme::SUCCESS_TEXT),
                    );
                    if ui.small_button("Show").clicked() {
                        platform::fs::reveal_in_file_manager(path);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.store.leads().len();
                    if total > 0 {
                        ui.label(format!(
                            "{}/{} leads \u{00b7} {} selected",
                            self.store.visible_count(),
                            total,
                            self.store.selected_count()
                        ));
                    }
                });
            });
        });

        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::sidebar::render(ui, &mut self.nav_active);
            });

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = ui::panels::toolbar::render(ui, &mut self.store);
            ui.separator();
            ui::panels::filters::render(ui, &mut self.store, &mut self.search_draft);

            match self.store.active_tab {
                DashboardTab::Leads => ui::panels::leads_table::render(ui, &mut self.store),
                tab => ui::panels::placeholder::render(ui, tab),
            }
        });

        match action {
            Some(ToolbarAction::Export) => self.export(),
            Some(ToolbarAction::Reload) => self.request_load(),
            None => {}
        }

        if let Some(message) = self.alert.clone() {
            egui::Window::new("Export")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.alert = None;
                    }
                });
        }
    }
}
