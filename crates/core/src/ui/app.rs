//! Main share window.
//!
//! `QuickShareApp` owns the [`Session`] and implements `eframe::App`. Caption
//! requests run on a background thread and report back over a channel that
//! is drained at the start of every frame.

use super::rendering::{
    draw_drop_zone, draw_file_list, draw_generate_button, draw_header, draw_share_card,
    draw_toast, draw_totals, ERROR, MUTED,
};
use super::state::ShareAction;
use crate::clipboard::ClipboardSink;
use crate::error::{AppError, Result};
use crate::files::{guess_mime_type, SelectedFile};
use crate::gemini::CaptionService;
use crate::session::Session;
use crate::share::CopyConfirmation;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

const COPIED_MESSAGE: &str = "Copied to clipboard!";

pub struct QuickShareApp {
    session: Session,

    // Caption requests
    service: Arc<dyn CaptionService>,
    rx: Receiver<Result<String>>,
    tx: Sender<Result<String>>,

    // Share presentation
    clipboard: Box<dyn ClipboardSink>,
    confirmation: CopyConfirmation,

    // Selection input
    path_input: String,
    notice: Option<String>,
}

impl QuickShareApp {
    /// Creates the window state around an existing session.
    pub fn new(
        session: Session,
        service: Arc<dyn CaptionService>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (tx, rx) = channel();
        Self {
            session,
            service,
            rx,
            tx,
            clipboard,
            confirmation: CopyConfirmation::default(),
            path_input: String::new(),
            notice: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies a user action to the session.
    pub fn apply(&mut self, action: ShareAction, ctx: &egui::Context) {
        match action {
            ShareAction::None => {}
            ShareAction::AddPath(path) => self.add_paths(&[PathBuf::from(path.trim())]),
            ShareAction::Browse => self.browse(),
            ShareAction::AddPaths(paths) => self.add_paths(&paths),
            ShareAction::RemoveFile(index) => {
                if let Err(e) = self.session.remove_file(index) {
                    warn!("remove ignored: {}", e);
                }
            }
            ShareAction::Generate => self.submit_request(ctx),
            ShareAction::Copy => self.copy_payload(),
            ShareAction::Reset => {
                if self.session.reset() {
                    self.notice = None;
                    info!("session reset");
                }
            }
        }
    }

    /// Opens the native multi-file picker. Does nothing while loading.
    fn browse(&mut self) {
        if self.session.is_loading() {
            return;
        }
        let picked = rfd::FileDialog::new()
            .set_title("Select files to share")
            .pick_files();
        if let Some(paths) = picked {
            self.add_paths(&paths);
        }
    }

    /// Adds every readable path as one batch; unreadable ones end up in the notice.
    fn add_paths(&mut self, paths: &[PathBuf]) {
        let mut batch = Vec::with_capacity(paths.len());
        let mut failed = Vec::new();
        for path in paths {
            match SelectedFile::from_path(path) {
                Ok(file) => batch.push(file),
                Err(e) => {
                    warn!(path = %path.display(), "could not add file: {}", e);
                    failed.push(format!("{}: {}", path.display(), e));
                }
            }
        }

        self.select(batch);
        if !failed.is_empty() {
            self.notice = Some(format!("Could not add {}", failed.join("; ")));
        }
    }

    fn select(&mut self, batch: Vec<SelectedFile>) {
        if batch.is_empty() {
            return;
        }
        match self.session.select_files(batch) {
            Ok(()) => self.notice = None,
            Err(e) => warn!("selection ignored: {}", e),
        }
    }

    /// Starts a caption request on a background thread.
    fn submit_request(&mut self, ctx: &egui::Context) {
        let file_names = match self.session.begin_generate() {
            Ok(names) => names,
            // Session is already showing the validation error
            Err(_) => return,
        };

        let tx = self.tx.clone();
        let service = Arc::clone(&self.service);
        let ctx = ctx.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build();

            let outcome = match runtime {
                Ok(rt) => rt.block_on(service.generate_caption(&file_names)),
                Err(e) => Err(AppError::generation(format!(
                    "Failed to create async runtime: {}",
                    e
                ))),
            };

            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Applies any finished caption request. Returns true if one arrived.
    pub fn poll_generation(&mut self) -> bool {
        let mut received = false;
        while let Ok(outcome) = self.rx.try_recv() {
            // Failures are logged by the session
            let _ = self.session.finish_generate(outcome);
            received = true;
        }
        received
    }

    fn copy_payload(&mut self) {
        let Some(payload) = self.session.payload() else {
            return;
        };
        match self.clipboard.write_text(&payload.clipboard_text()) {
            Ok(()) => self.confirmation.trigger(Instant::now()),
            Err(e) => {
                warn!("{}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.confirmation.is_visible(Instant::now())
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let batch = dropped
            .into_iter()
            .filter_map(|file| match &file.path {
                Some(path) => match SelectedFile::from_path(path) {
                    Ok(selected) => Some(selected),
                    Err(e) => {
                        warn!(path = %path.display(), "skipping dropped file: {}", e);
                        None
                    }
                },
                // Web-style drops carry bytes instead of a path
                None => {
                    let size = file.bytes.as_ref().map_or(0, |b| b.len() as u64);
                    let mime = if file.mime.is_empty() {
                        guess_mime_type(Path::new(&file.name)).to_string()
                    } else {
                        file.mime.clone()
                    };
                    Some(SelectedFile::new(file.name.clone(), size, mime))
                }
            })
            .collect();

        self.select(batch);
    }

    fn render_selection(&mut self, ui: &mut egui::Ui, hovering: bool) -> ShareAction {
        let loading = self.session.is_loading();

        let mut action = draw_drop_zone(ui, &mut self.path_input, hovering, !loading);

        if let Some(error) = self.session.error_message() {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(error).color(ERROR));
            });
        }

        if !self.session.files().is_empty() {
            ui.add_space(10.0);
            action = action.or(draw_file_list(ui, self.session.files(), !loading));
            ui.separator();
            draw_totals(ui, &self.session);
        }

        ui.add_space(10.0);
        action.or(draw_generate_button(ui, loading))
    }
}

impl eframe::App for QuickShareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Enforce dark mode
        ctx.set_visuals(egui::Visuals::dark());

        self.poll_generation();
        self.collect_dropped_files(ctx);

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let mut action = ShareAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            draw_header(ui);
            ui.add_space(16.0);

            action = match self.session.payload() {
                Some(payload) => draw_share_card(ui, payload),
                None => self.render_selection(ui, hovering),
            };

            if let Some(notice) = &self.notice {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(notice).small().color(MUTED));
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("Powered by Gemini").small().color(MUTED));
            });
        });

        self.apply(action, ctx);

        let now = Instant::now();
        self.confirmation.expire(now);
        if let Some(left) = self.confirmation.remaining(now) {
            draw_toast(ctx, COPIED_MESSAGE);
            ctx.request_repaint_after(left);
        }
    }
}

/// Opens the share window and blocks until it is closed.
pub fn run(
    session: Session,
    service: Arc<dyn CaptionService>,
    clipboard: Box<dyn ClipboardSink>,
) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quick Share AI")
            .with_inner_size([480.0, 640.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Quick Share AI",
        options,
        Box::new(move |_cc| {
            let app = QuickShareApp::new(session, service, clipboard);
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| AppError::ui(format!("Failed to run UI: {}", e)))
}
