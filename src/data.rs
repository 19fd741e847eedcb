// src/data.rs

use crate::model::{Question, QuestionBank};

/// Carga el banco de preguntas desde el YAML embebido.
///
/// Un banco embebido que no parsea o no valida es un defecto de
/// compilación, no un error de ejecución: aquí se corta en seco.
pub fn read_questions_embedded() -> QuestionBank {
    let file_content = include_str!("data/quiz_questions.yaml");
    let questions: Vec<Question> =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML");
    QuestionBank::new(questions).expect("El banco de preguntas embebido no es válido")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetUnknown;

    #[test]
    fn embedded_bank_loads_and_validates() {
        let bank = read_questions_embedded();
        assert_eq!(bank.len(), 10);

        let first = bank.get(0).expect("hay primera pregunta");
        assert_eq!(first.x_label, "Hours");
        assert_eq!(first.known_x, 3.0);
        assert_eq!(first.known_y, 150.0);
        assert_eq!(first.k, 50.0);
        assert_eq!(first.target, TargetUnknown::YUnknown { x: 5.0 });
    }

    #[test]
    fn embedded_bank_mixes_both_unknown_kinds() {
        let bank = read_questions_embedded();
        let missing_y = bank
            .questions()
            .iter()
            .filter(|q| matches!(q.target, TargetUnknown::YUnknown { .. }))
            .count();
        assert_eq!(missing_y, 6);
        assert_eq!(bank.len() - missing_y, 4);
    }
}
