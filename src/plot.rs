use eframe::egui;

use crate::evaluator;
use crate::model::{Question, TargetUnknown};

/// Lado del lienzo cuadrado del resumen, en píxeles lógicos.
pub const PLOT_SIZE: f32 = 400.0;
/// Margen interior entre el borde del lienzo y los ejes.
pub const PLOT_PADDING: f64 = 40.0;

/// Fila objetivo con la coordenada que faltaba ya resuelta.
pub fn resolved_target(q: &Question) -> (f64, f64) {
    let expected = evaluator::solve(q);
    match q.target {
        TargetUnknown::YUnknown { x } => (x, expected),
        TargetUnknown::XUnknown { y } => (expected, y),
    }
}

/// Factores de escala de una pregunta sobre un lienzo cuadrado.
///
/// Toda la matemática de proyección vive aquí, sin tocar el painter:
/// ambos ejes arrancan en el origen y el punto más lejano toca el
/// borde interior del margen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScale {
    size: f64,
    padding: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl PlotScale {
    /// `None` si algún máximo no es positivo: no hay nada razonable
    /// que dibujar y el lienzo se deja vacío.
    pub fn for_question(q: &Question, size: f64, padding: f64) -> Option<Self> {
        let (target_x, target_y) = resolved_target(q);
        let max_x = q.known_x.max(target_x);
        let max_y = q.known_y.max(target_y);
        if max_x <= 0.0 || max_y <= 0.0 {
            return None;
        }
        let chart_area = size - 2.0 * padding;
        Some(Self {
            size,
            padding,
            max_x,
            max_y,
            scale_x: chart_area / max_x,
            scale_y: chart_area / max_y,
        })
    }

    /// De coordenadas de datos a píxeles, con el eje y invertido
    /// respecto al matemático.
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.padding + x * self.scale_x,
            self.size - self.padding - y * self.scale_y,
        )
    }
}

/// Dibuja ejes, recta de proporcionalidad y los dos puntos con sus
/// etiquetas dentro de `rect`. El orden de dibujo es fijo: los puntos
/// van al final para que ni los ejes ni la recta los tapen.
pub fn draw_plot(painter: &egui::Painter, rect: egui::Rect, q: &Question) {
    let size = f64::from(rect.width().min(rect.height()));
    let Some(scale) = PlotScale::for_question(q, size, PLOT_PADDING) else {
        return;
    };

    let to_screen =
        |(x, y): (f64, f64)| rect.min + egui::vec2(x as f32, y as f32);
    let font = egui::FontId::proportional(10.0);
    let axis_color = egui::Color32::GRAY;

    // Ejes desde el origen
    let origin = to_screen(scale.project(0.0, 0.0));
    let axis_stroke = egui::Stroke::new(1.0, axis_color);
    painter.line_segment(
        [origin, egui::pos2(rect.min.x + size as f32, origin.y)],
        axis_stroke,
    );
    painter.line_segment([origin, egui::pos2(origin.x, rect.min.y)], axis_stroke);

    // Rótulos de ejes y origen
    painter.text(
        egui::pos2(rect.min.x + size as f32 / 2.0, rect.min.y + size as f32 - 10.0),
        egui::Align2::CENTER_CENTER,
        format!("{} (x)", q.x_label),
        font.clone(),
        axis_color,
    );
    painter.text(
        egui::pos2(origin.x, rect.min.y + 10.0),
        egui::Align2::LEFT_CENTER,
        format!("{} (y)", q.y_label),
        font.clone(),
        axis_color,
    );
    painter.text(
        origin + egui::vec2(-5.0, 15.0),
        egui::Align2::RIGHT_CENTER,
        "(0, 0)",
        font.clone(),
        axis_color,
    );

    // Recta de proporcionalidad: del origen al punto más lejano
    let far = to_screen(scale.project(scale.max_x, scale.max_y));
    painter.line_segment([origin, far], egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE));

    // Los dos puntos de datos, con sus coordenadas al lado
    for (x, y) in [(q.known_x, q.known_y), resolved_target(q)] {
        let point = to_screen(scale.project(x, y));
        painter.circle_filled(point, 4.0, egui::Color32::RED);
        painter.text(
            point + egui::vec2(6.0, -2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("({x}, {y:.2})"),
            font.clone(),
            egui::Color32::RED,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(known_x: f64, known_y: f64, target: TargetUnknown, k: f64) -> Question {
        Question {
            x_label: "Hours".into(),
            y_label: "Distance (km)".into(),
            known_x,
            known_y,
            target,
            k,
        }
    }

    #[test]
    fn resolves_missing_coordinate_on_both_sides() {
        let missing_y = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        assert_eq!(resolved_target(&missing_y), (5.0, 250.0));

        let missing_x = question(2.0, 36.0, TargetUnknown::XUnknown { y: 72.0 }, 18.0);
        assert_eq!(resolved_target(&missing_x), (4.0, 72.0));
    }

    #[test]
    fn scale_stretches_furthest_point_to_inner_edge() {
        let q = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        let scale = PlotScale::for_question(&q, 400.0, 40.0).expect("escala definida");

        assert_eq!(scale.max_x, 5.0);
        assert_eq!(scale.max_y, 250.0);
        assert_eq!(scale.project(scale.max_x, scale.max_y), (360.0, 40.0));
    }

    #[test]
    fn known_point_lands_inside_padding_band() {
        let q = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        let scale = PlotScale::for_question(&q, 400.0, 40.0).expect("escala definida");

        let (px, py) = scale.project(q.known_x, q.known_y);
        assert!((40.0..=360.0).contains(&px));
        assert!((40.0..=360.0).contains(&py));
    }

    #[test]
    fn origin_projects_to_bottom_left_corner() {
        let q = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        let scale = PlotScale::for_question(&q, 400.0, 40.0).expect("escala definida");
        // Eje y invertido: el origen matemático queda abajo a la izquierda.
        assert_eq!(scale.project(0.0, 0.0), (40.0, 360.0));
    }

    #[test]
    fn degenerate_maxima_yield_empty_plot() {
        let q = question(-3.0, 150.0, TargetUnknown::YUnknown { x: -5.0 }, -50.0);
        assert_eq!(PlotScale::for_question(&q, 400.0, 40.0), None);
    }
}
