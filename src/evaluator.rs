use thiserror::Error;

use crate::model::{Question, TargetUnknown};

/// Errores de entrada del usuario. Se reintentan en el propio campo de
/// respuesta y nunca tocan la sesión.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("escribe una respuesta antes de enviar")]
    Empty,
    #[error("«{0}» no es un número válido")]
    NotANumber(String),
}

/// Veredicto de una respuesta junto con el valor exacto, para que la
/// UI pueda enseñar la corrección.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub correct: bool,
    pub expected: f64,
}

/// Valor exacto de la coordenada que falta.
///
/// Con `k != 0` (garantizado por `QuestionBank::new`) siempre está
/// definido, también para k negativa.
pub fn solve(q: &Question) -> f64 {
    match q.target {
        TargetUnknown::YUnknown { x } => q.k * x,
        TargetUnknown::XUnknown { y } => y / q.k,
    }
}

/// Convierte el texto del campo de respuesta en un número.
/// Corta antes de cualquier comparación numérica y acepta coma decimal.
pub fn parse_candidate(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber(trimmed.to_string())),
    }
}

pub fn evaluate(q: &Question, candidate: f64, tolerance: f64) -> Evaluation {
    let expected = solve(q);
    Evaluation {
        correct: (candidate - expected).abs() < tolerance,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(known_x: f64, known_y: f64, target: TargetUnknown, k: f64) -> Question {
        Question {
            x_label: "x".into(),
            y_label: "y".into(),
            known_x,
            known_y,
            target,
            k,
        }
    }

    #[test]
    fn solve_missing_y_multiplies_by_k() {
        let q = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        assert_eq!(solve(&q), 250.0);
    }

    #[test]
    fn solve_missing_x_divides_by_k() {
        let q = question(2.0, 36.0, TargetUnknown::XUnknown { y: 72.0 }, 18.0);
        assert_eq!(solve(&q), 4.0);
    }

    #[test]
    fn solve_works_with_negative_constant() {
        let q = question(2.0, -6.0, TargetUnknown::XUnknown { y: -9.0 }, -3.0);
        assert_eq!(solve(&q), 3.0);
    }

    #[test]
    fn evaluate_is_symmetric_around_tolerance() {
        let q = question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0);
        let tolerance = 0.02;

        assert!(evaluate(&q, 250.0 + (tolerance - 0.001), tolerance).correct);
        assert!(evaluate(&q, 250.0 - (tolerance - 0.001), tolerance).correct);
        assert!(!evaluate(&q, 250.0 + (tolerance + 0.001), tolerance).correct);
        assert!(!evaluate(&q, 250.0 - (tolerance + 0.001), tolerance).correct);
    }

    #[test]
    fn evaluate_reports_expected_value() {
        let q = question(5.0, 80.0, TargetUnknown::XUnknown { y: 144.0 }, 16.0);
        let eval = evaluate(&q, 1.0, 0.02);
        assert!(!eval.correct);
        assert_eq!(eval.expected, 9.0);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(parse_candidate(""), Err(InputError::Empty));
        assert_eq!(parse_candidate("   "), Err(InputError::Empty));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert_eq!(
            parse_candidate("doscientos"),
            Err(InputError::NotANumber("doscientos".into()))
        );
        assert_eq!(
            parse_candidate("NaN"),
            Err(InputError::NotANumber("NaN".into()))
        );
    }

    #[test]
    fn parse_accepts_decimal_comma() {
        assert_eq!(parse_candidate("3,5"), Ok(3.5));
        assert_eq!(parse_candidate("  250 "), Ok(250.0));
    }
}
