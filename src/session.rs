use thiserror::Error;

use crate::evaluator::{self, Evaluation};
use crate::model::{Question, QuestionBank, QuizConfig};
use crate::view_models::SummaryRow;

/// Errores de secuencia: señalan un uso incorrecto por parte del
/// adaptador de UI, no un fallo del usuario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("la sesión no está en curso")]
    OutOfSequence,
    #[error("la pregunta {number} ya tiene una respuesta registrada")]
    AlreadyAnswered { number: usize },
    #[error("la sesión aún no ha terminado")]
    NotFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { current: usize },
    Finished,
}

/// Resultado de una partida completa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub score: u32,
    pub total_possible: u32,
    /// Posiciones 1-based de las preguntas sin responder o falladas.
    pub wrong_question_numbers: Vec<usize>,
}

/// Una partida sobre el banco de preguntas, recorrida en orden.
///
/// La puntuación sube al registrar cada acierto; el registro de
/// respuestas se escribe una sola vez por pregunta y queda disponible
/// para el repaso final.
pub struct QuizSession {
    bank: QuestionBank,
    config: QuizConfig,
    state: SessionState,
    score: u32,
    answers: Vec<Option<f64>>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        let count = bank.len();
        Self {
            bank,
            config,
            state: SessionState::NotStarted,
            score: 0,
            answers: vec![None; count],
        }
    }

    /// Arranca (o reinicia) la partida. Llamarlo a mitad de sesión
    /// descarta las respuestas registradas y pone la puntuación a 0.
    pub fn start(&mut self) {
        self.score = 0;
        self.answers = vec![None; self.bank.len()];
        self.state = SessionState::InProgress { current: 0 };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished)
    }

    /// Número de pregunta 1-based para mostrar en pantalla.
    pub fn current_number(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current } => Some(current + 1),
            _ => None,
        }
    }

    /// true si la pregunta actual ya tiene respuesta registrada.
    /// Decide qué botón enseña la UI (Comprobar o Siguiente).
    pub fn is_current_answered(&self) -> bool {
        match self.state {
            SessionState::InProgress { current } => self.answers[current].is_some(),
            _ => false,
        }
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        match self.state {
            SessionState::InProgress { current } => Ok(&self.bank.questions()[current]),
            _ => Err(SessionError::OutOfSequence),
        }
    }

    /// Registra y puntúa la respuesta de la pregunta actual. La
    /// respuesta queda guardada aunque sea incorrecta, para el repaso.
    ///
    /// No avanza: el adaptador decide cuándo pasar de pregunta, para
    /// poder enseñar la corrección antes de cambiar de pantalla.
    pub fn submit(&mut self, candidate: f64) -> Result<Evaluation, SessionError> {
        let current = match self.state {
            SessionState::InProgress { current } => current,
            _ => return Err(SessionError::OutOfSequence),
        };
        if self.answers[current].is_some() {
            return Err(SessionError::AlreadyAnswered {
                number: current + 1,
            });
        }

        let question = &self.bank.questions()[current];
        let evaluation = evaluator::evaluate(question, candidate, self.config.tolerance);
        self.answers[current] = Some(candidate);
        if evaluation.correct {
            self.score += self.config.points_per_question;
        }
        Ok(evaluation)
    }

    /// Pasa a la siguiente pregunta; tras la última, la sesión queda
    /// terminada y la puntuación es definitiva.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress { current } => {
                let next = current + 1;
                self.state = if next == self.bank.len() {
                    SessionState::Finished
                } else {
                    SessionState::InProgress { current: next }
                };
                Ok(())
            }
            _ => Err(SessionError::OutOfSequence),
        }
    }

    pub fn final_report(&self) -> Result<FinalReport, SessionError> {
        let rows = self.summary_rows()?;
        let wrong_question_numbers = rows
            .iter()
            .filter(|row| !row.correct)
            .map(|row| row.number)
            .collect();
        Ok(FinalReport {
            score: self.score,
            total_possible: self.bank.len() as u32 * self.config.points_per_question,
            wrong_question_numbers,
        })
    }

    /// Filas para la tabla de repaso del resumen.
    pub fn summary_rows(&self) -> Result<Vec<SummaryRow>, SessionError> {
        if !self.is_finished() {
            return Err(SessionError::NotFinished);
        }
        Ok(self
            .bank
            .questions()
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(i, (question, answer))| {
                let expected = evaluator::solve(question);
                let correct = answer
                    .map(|a| evaluator::evaluate(question, a, self.config.tolerance).correct)
                    .unwrap_or(false);
                SummaryRow {
                    number: i + 1,
                    answer: *answer,
                    expected,
                    correct,
                }
            })
            .collect())
    }
}
