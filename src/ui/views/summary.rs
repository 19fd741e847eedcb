use egui::{CentralPanel, Context, Grid, RichText, ScrollArea, Sense};

use crate::QuizApp;
use crate::plot;
use crate::ui::layout::two_button_row;

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let report = match app.session.final_report() {
        Ok(report) => report,
        Err(err) => {
            log::error!("resumen sin sesión terminada: {err}");
            app.volver_al_menu();
            return;
        }
    };
    let rows = app.session.summary_rows().unwrap_or_default();
    let first_question = app.session.bank().questions()[0].clone();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading(format!(
                    "Nota final: {} / {}",
                    report.score, report.total_possible
                ));
                ui.add_space(8.0);

                let feedback = if report.score == report.total_possible {
                    "🏆 ¡Impecable! Puntuación perfecta.".to_owned()
                } else if report.score * 10 >= report.total_possible * 7 {
                    "👍 ¡Muy buen trabajo! Dominas casi todas las relaciones.".to_owned()
                } else if report.score > 0 {
                    format!(
                        "⚠ Te falta algo de práctica. Repasa las preguntas: {}.",
                        report
                            .wrong_question_numbers
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                } else {
                    "😔 ¡Sigue intentándolo! Proporcionalidad es multiplicar o dividir.".to_owned()
                };
                ui.label(feedback);
                ui.add_space(12.0);

                ui.label(RichText::new("Repaso de respuestas").strong());
                ui.add_space(5.0);

                Grid::new("quiz_results_grid")
                    .striped(true)
                    .spacing([8.0, 2.0])
                    .show(ui, |ui| {
                        ui.label("Pregunta");
                        ui.label("Tu respuesta");
                        ui.label("Valor exacto");
                        ui.label("Estado");
                        ui.end_row();

                        for row in &rows {
                            ui.label(row.number.to_string());
                            ui.label(row.answer_label());
                            ui.label(format!("{:.2}", row.expected));
                            ui.label(row.status_label());
                            ui.end_row();
                        }
                    });

                ui.add_space(16.0);
                ui.label(RichText::new("Gráfica de la pregunta 1").strong());
                ui.add_space(4.0);

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(plot::PLOT_SIZE, plot::PLOT_SIZE),
                    Sense::hover(),
                );
                plot::draw_plot(ui.painter(), rect, &first_question);

                ui.add_space(12.0);
                let (again, menu) =
                    two_button_row(ui, 420.0, "🔄 Volver a jugar", "🔙 Menú principal");
                if again {
                    app.empezar();
                }
                if menu {
                    app.volver_al_menu();
                }
                ui.add_space(10.0);
            });
        });
    });
}
