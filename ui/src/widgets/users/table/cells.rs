//! Cell rendering functions for the users table.

use egui::{Align2, Color32, FontId, RichText, Sense, Ui};

use crate::utils::colors::{COLOR_AVATAR_BG, COLOR_GREEN, COLOR_RED};

/// Diameter of the avatar circle (in pixels)
const AVATAR_SIZE: f32 = 28.0;

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the avatar as the name's initial in a circle.
///
/// The image reference is shown on hover.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, name: &str, picture: &str) {
    ui.centered_and_justified(|ui| {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());

        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, COLOR_AVATAR_BG);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            avatar_initial(name),
            FontId::proportional(14.0),
            Color32::BLACK,
        );

        if !picture.is_empty() {
            response.on_hover_text(picture);
        }
    });
}

fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Renders a boolean as a green check or a red cross.
#[inline]
pub fn render_flag_cell(ui: &mut Ui, flag: bool) {
    let (glyph, color) = flag_glyph(flag);
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(glyph).color(color));
    });
}

#[inline]
fn flag_glyph(flag: bool) -> (&'static str, Color32) {
    if flag {
        ("✔", COLOR_GREEN)
    } else {
        ("✖", COLOR_RED)
    }
}

/// Renders the delete link.
///
/// Returns `true` if the link was clicked.
#[inline]
pub fn render_delete_link(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| {
        ui.add(egui::Link::new(RichText::new("Delete").color(COLOR_RED)))
            .on_hover_text("Delete this student")
            .clicked()
    })
    .inner
}
