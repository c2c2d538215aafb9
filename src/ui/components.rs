//! Reusable UI components
//!
//! Standalone widgets used by the page render loop: the validated form
//! field and the nav link.

use crate::form::FormField;
use crate::theme;
use eframe::egui;

/// Labeled single-line input with inline validation.
///
/// Validates on focus loss; editing clears the inline error until the
/// next blur.
pub fn form_field(ui: &mut egui::Ui, field: &mut FormField) {
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    ui.label(
        egui::RichText::new(label)
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_MUTED),
    );
    ui.add_space(theme::SPACING_SM);

    let stroke = if field.error.is_some() {
        theme::error_stroke(ui.ctx())
    } else {
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT)
    };

    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(stroke)
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut field.value)
                    .hint_text(egui::RichText::new(field.hint).color(theme::TEXT_DIM))
                    .desired_width(f32::INFINITY)
                    .frame(false),
            );
            if response.changed() {
                field.clear_error();
            }
            if response.lost_focus() {
                field.validate();
            }
        });

    if let Some(error) = &field.error {
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, error))
                .size(theme::FONT_SMALL)
                .color(theme::STATUS_ERROR),
        );
    }
}

/// Borderless nav bar / menu link.
pub fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let color = if active {
        theme::ACCENT_LIGHT
    } else {
        theme::TEXT_SECONDARY
    };
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(color),
        )
        .frame(false),
    )
}
