//! Drawing helpers for the share window.
//!
//! Each helper draws one part of the window from read-only data and reports
//! what the user clicked as a [`ShareAction`].

use super::state::ShareAction;
use crate::files::{format_bytes, FileKind, SelectedFile};
use crate::session::Session;
use crate::share::SharePayload;
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);

fn kind_color(kind: FileKind) -> egui::Color32 {
    let [r, g, b] = kind.color();
    egui::Color32::from_rgb(r, g, b)
}

/// Title and tagline.
pub fn draw_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("⚡ Quick Share AI").strong().color(ACCENT));
        ui.label(
            egui::RichText::new("Add files and get an AI-crafted share message.").color(MUTED),
        );
    });
}

/// Drop target with a browse button, plus a path entry for adding files by hand.
///
/// `hovering` is true while files are dragged over the window.
pub fn draw_drop_zone(
    ui: &mut egui::Ui,
    path_input: &mut String,
    hovering: bool,
    enabled: bool,
) -> ShareAction {
    let stroke_color = if hovering { ACCENT } else { egui::Color32::from_gray(90) };
    let mut action = ShareAction::None;

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("⬆").size(28.0).color(MUTED));
                let browse = egui::Button::new(
                    egui::RichText::new("Click to browse").strong().color(ACCENT),
                )
                .frame(false);
                if ui.add_enabled(enabled, browse).clicked() {
                    action = ShareAction::Browse;
                }
                ui.label(egui::RichText::new("or drag and drop files here").color(MUTED));
                ui.label(egui::RichText::new("Any files, any size").small().color(MUTED));
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let response = ui.add_enabled(
                    enabled,
                    egui::TextEdit::singleline(path_input)
                        .desired_width(ui.available_width() - 60.0)
                        .hint_text("or paste a file path"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui.add_enabled(enabled, egui::Button::new("Add")).clicked();

                if (submitted || clicked) && !path_input.trim().is_empty() {
                    action = ShareAction::AddPath(std::mem::take(path_input));
                }
            });
        });

    action
}

/// One row per pending file, each with a remove button.
pub fn draw_file_list(ui: &mut egui::Ui, files: &[SelectedFile], enabled: bool) -> ShareAction {
    let mut action = ShareAction::None;

    egui::ScrollArea::vertical()
        .max_height(240.0)
        .id_salt("file_list")
        .show(ui, |ui| {
            for (index, file) in files.iter().enumerate() {
                let kind = file.kind();
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(kind.glyph()).color(kind_color(kind)));
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&file.name).strong());
                        ui.label(
                            egui::RichText::new(format_bytes(file.byte_size, 2))
                                .small()
                                .color(MUTED),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(enabled, egui::Button::new("🗑"))
                            .on_hover_text("Remove")
                            .clicked()
                        {
                            action = ShareAction::RemoveFile(index);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

    action
}

/// File count and combined size, right aligned.
pub fn draw_totals(ui: &mut egui::Ui, session: &Session) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.label(
            egui::RichText::new(format!(
                "Total Files: {}, Total Size: {}",
                session.file_count(),
                format_bytes(session.total_size(), 2)
            ))
            .color(MUTED),
        );
    });
}

/// The generate button; shows a spinner while a request is in flight.
pub fn draw_generate_button(ui: &mut egui::Ui, loading: bool) -> ShareAction {
    if loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Generating...");
        });
        return ShareAction::None;
    }

    let button = egui::Button::new(egui::RichText::new("Generate Share Link").strong())
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(button).clicked() {
        ShareAction::Generate
    } else {
        ShareAction::None
    }
}

/// The generated message and link with copy / share-more buttons.
pub fn draw_share_card(ui: &mut egui::Ui, payload: &SharePayload) -> ShareAction {
    let mut action = ShareAction::None;

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Link Generated!").strong().color(SUCCESS));
    });
    ui.add_space(6.0);

    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(format!("\"{}\"", payload.message)).italics());
        ui.add_space(6.0);
        ui.hyperlink_to(
            egui::RichText::new(&payload.link).monospace().color(ACCENT),
            &payload.link,
        );
    });

    ui.add_space(8.0);
    ui.columns(2, |columns| {
        if columns[0].button("📋 Copy").clicked() {
            action = ShareAction::Copy;
        }
        if columns[1].button("↺ Share More").clicked() {
            action = ShareAction::Reset;
        }
    });

    action
}

/// Floating confirmation banner at the bottom of the window.
pub fn draw_toast(ctx: &egui::Context, message: &str) {
    egui::Area::new(egui::Id::new("copy_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -20.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgb(34, 197, 94))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                });
        });
}
