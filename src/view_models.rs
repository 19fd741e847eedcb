// src/view_models.rs

/// Fila de la tabla de repaso del resumen final.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub number: usize,       // número "humano" (1,2,3…)
    pub answer: Option<f64>, // respuesta registrada, si la hubo
    pub expected: f64,
    pub correct: bool,
}

impl SummaryRow {
    pub fn status_label(&self) -> &'static str {
        if self.correct {
            "✅ Correcta"
        } else if self.answer.is_some() {
            "❌ Fallida"
        } else {
            "❌ Sin responder"
        }
    }

    pub fn answer_label(&self) -> String {
        match self.answer {
            Some(answer) => format!("{answer}"),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_distinguishes_missing_from_wrong() {
        let wrong = SummaryRow {
            number: 1,
            answer: Some(3.0),
            expected: 4.0,
            correct: false,
        };
        let missing = SummaryRow {
            number: 2,
            answer: None,
            expected: 4.0,
            correct: false,
        };
        assert_eq!(wrong.status_label(), "❌ Fallida");
        assert_eq!(missing.status_label(), "❌ Sin responder");
        assert_eq!(missing.answer_label(), "-");
    }
}
