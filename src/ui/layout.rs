use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Reiniciar partida").clicked() {
                app.empezar();
                ctx.request_repaint();
            }
            if ui.button("Volver al menú").clicked() {
                app.volver_al_menu();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un ancho de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let content_width = ui.available_width().min(max_width);
                ui.set_width(content_width);
                ui.vertical_centered(|ui| inner(ui));
            });
        ui.add_space(extra);
    });
}

/// Devuelve (clicked_izquierda, clicked_derecha).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left: &str, right: &str) -> (bool, bool) {
    let button_width = (panel_width - 8.0) / 2.0;
    let button_height = 36.0;
    let mut clicked = (false, false);
    ui.horizontal(|ui| {
        if ui
            .add_sized([button_width, button_height], Button::new(left))
            .clicked()
        {
            clicked.0 = true;
        }
        if ui
            .add_sized([button_width, button_height], Button::new(right))
            .clicked()
        {
            clicked.1 = true;
        }
    });
    clicked
}
