use egui::{Button, Color32, Context, Grid, Key, RichText, TextEdit, Ui};

use crate::QuizApp;
use crate::model::TargetUnknown;
use crate::ui::layout::centered_panel;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let question = match app.session.current_question() {
        Ok(q) => q.clone(),
        Err(err) => {
            // Estado incoherente entre UI y sesión: vuelta al menú.
            log::error!("no hay pregunta en curso: {err}");
            app.volver_al_menu();
            return;
        }
    };
    let number = app.session.current_number().unwrap_or(1);
    let total = app.session.question_count();
    let points = app.session.config().points_per_question;
    let answered = app.session.is_current_answered();

    centered_panel(ctx, 420.0, 600.0, |ui| {
        ui.heading(format!("Pregunta {number} de {total} ({points} puntos)"));
        ui.add_space(4.0);
        ui.label("Encuentra el valor que falta en la tabla.");
        ui.add_space(12.0);

        let mut enviar = false;

        Grid::new("question_table")
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new(format!("{} (x)", question.x_label)).strong());
                ui.label(RichText::new(format!("{} (y)", question.y_label)).strong());
                ui.end_row();

                ui.label(format!("{}", question.known_x));
                ui.label(format!("{:.2}", question.known_y));
                ui.end_row();

                // La celda desconocida es el campo de respuesta.
                match question.target {
                    TargetUnknown::YUnknown { x } => {
                        ui.label(format!("{x}"));
                        enviar |= answer_field(ui, app, answered);
                    }
                    TargetUnknown::XUnknown { y } => {
                        enviar |= answer_field(ui, app, answered);
                        ui.label(format!("{y:.2}"));
                    }
                }
                ui.end_row();
            });

        ui.add_space(10.0);

        if !app.message.is_empty() {
            let color = match app.last_eval {
                Some(eval) if eval.correct => Color32::LIGHT_GREEN,
                Some(_) => Color32::LIGHT_RED,
                None => Color32::YELLOW,
            };
            ui.label(RichText::new(&app.message).color(color));
            ui.add_space(6.0);
        }

        let btn_w = 260.0;
        let btn_h = 36.0;
        if !answered {
            let comprobar = ui.add_sized([btn_w, btn_h], Button::new("✔ Comprobar"));
            if comprobar.clicked() || enviar {
                app.procesar_respuesta();
            }
        } else {
            let label = if number == total {
                "➡ Terminar y ver la nota"
            } else {
                "➡ Siguiente pregunta"
            };
            if ui.add_sized([btn_w, btn_h], Button::new(label)).clicked() {
                app.avanzar();
            }
        }
    });
}

/// Campo de la coordenada desconocida. Devuelve true si el usuario
/// envió con Enter desde dentro del campo.
fn answer_field(ui: &mut Ui, app: &mut QuizApp, answered: bool) -> bool {
    let field = TextEdit::singleline(&mut app.input)
        .hint_text("?")
        .desired_width(80.0);
    let response = ui.add_enabled(!answered, field);
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
