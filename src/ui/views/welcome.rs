use egui::{Button, Context};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.heading("📊 Quiz de proporcionalidad");
        ui.add_space(10.0);
        ui.label("Cada tabla relaciona dos magnitudes con y = k·x.");
        ui.label(format!(
            "Encuentra el valor que falta en cada una de las {} preguntas.",
            app.session.question_count()
        ));
        ui.add_space(18.0);

        let btn_w = 260.0;
        let btn_h = 40.0;

        let btn_start = ui.add_sized([btn_w, btn_h], Button::new("▶ Empezar"));
        ui.add_space(5.0);
        let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("❌ Salir"));

        if btn_start.clicked() {
            app.empezar();
        }
        if btn_exit.clicked() {
            std::process::exit(0);
        }
    });
}
