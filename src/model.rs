use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coordenada que falta en la fila objetivo de la tabla.
/// Siempre falta exactamente una; la otra viene con la variante.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum TargetUnknown {
    /// Falta la x; la y objetivo es conocida.
    XUnknown { y: f64 },
    /// Falta la y; la x objetivo es conocida.
    YUnknown { x: f64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub x_label: String, // Etiqueta del eje x
    pub y_label: String, // Etiqueta del eje y
    pub known_x: f64,
    pub known_y: f64,
    pub target: TargetUnknown,
    pub k: f64, // Constante de proporcionalidad: y = k·x
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("el banco de preguntas está vacío")]
    Empty,
    #[error("la pregunta {number} tiene constante de proporcionalidad 0")]
    ZeroConstant { number: usize },
    #[error("la pregunta {number} no cumple y = k·x en su par conocido")]
    InconsistentPair { number: usize },
    #[error("la pregunta {number} tiene alguna coordenada no positiva y no se podría dibujar")]
    NonPositivePoint { number: usize },
}

/// Banco de preguntas: secuencia fija e inmutable, validada al construirla.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Valida el banco entero antes de aceptarlo. Ninguna pregunta
    /// degenerada (k = 0, par inconsistente, punto fuera del primer
    /// cuadrante) llega nunca a la sesión ni a la gráfica.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (i, q) in questions.iter().enumerate() {
            let number = i + 1;
            if q.k == 0.0 {
                return Err(BankError::ZeroConstant { number });
            }
            if (q.known_y - q.k * q.known_x).abs() > 1e-9 {
                return Err(BankError::InconsistentPair { number });
            }
            let (target_x, target_y) = match q.target {
                TargetUnknown::YUnknown { x } => (x, q.k * x),
                TargetUnknown::XUnknown { y } => (y / q.k, y),
            };
            if q.known_x <= 0.0 || q.known_y <= 0.0 || target_x <= 0.0 || target_y <= 0.0 {
                return Err(BankError::NonPositivePoint { number });
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// Parámetros de corrección compartidos por toda la sesión.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    /// Margen absoluto admitido entre la respuesta y el valor exacto.
    pub tolerance: f64,
    pub points_per_question: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.02,
            points_per_question: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AppState {
    Welcome,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
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
    fn bank_accepts_consistent_questions() {
        let bank = QuestionBank::new(vec![
            question(3.0, 150.0, TargetUnknown::YUnknown { x: 5.0 }, 50.0),
            question(2.0, 36.0, TargetUnknown::XUnknown { y: 72.0 }, 18.0),
        ]);
        assert_eq!(bank.expect("banco válido").len(), 2);
    }

    #[test]
    fn bank_rejects_zero_constant() {
        let result = QuestionBank::new(vec![question(
            3.0,
            0.0,
            TargetUnknown::YUnknown { x: 5.0 },
            0.0,
        )]);
        assert_eq!(result, Err(BankError::ZeroConstant { number: 1 }));
    }

    #[test]
    fn bank_rejects_inconsistent_known_pair() {
        let result = QuestionBank::new(vec![question(
            3.0,
            151.0,
            TargetUnknown::YUnknown { x: 5.0 },
            50.0,
        )]);
        assert_eq!(result, Err(BankError::InconsistentPair { number: 1 }));
    }

    #[test]
    fn bank_rejects_points_outside_first_quadrant() {
        // k negativa es válida para el modelo pero deja la fila objetivo
        // con y negativa, que no cabe en la gráfica.
        let result = QuestionBank::new(vec![question(
            -3.0,
            150.0,
            TargetUnknown::YUnknown { x: 5.0 },
            -50.0,
        )]);
        assert_eq!(result, Err(BankError::NonPositivePoint { number: 1 }));
    }

    #[test]
    fn bank_rejects_empty_list() {
        assert_eq!(QuestionBank::new(vec![]), Err(BankError::Empty));
    }

    #[test]
    fn bank_tolerates_rounding_noise_in_known_pair() {
        // 400 · 0.02 no es exacto en coma flotante; tiene que pasar igual.
        let bank = QuestionBank::new(vec![question(
            400.0,
            8.0,
            TargetUnknown::XUnknown { y: 15.0 },
            0.02,
        )]);
        assert!(bank.is_ok());
    }
}
