use crate::cues::{CuePlayer, SilentCues};
use crate::data::read_questions_embedded;
use crate::evaluator::Evaluation;
use crate::model::{AppState, QuizConfig};
use crate::session::QuizSession;

// Submódulos
pub mod actions;

// Re-export de view models
pub use crate::view_models::SummaryRow;

/// Estado de la aplicación: una única sesión viva, el texto del campo
/// de respuesta y el mensaje de feedback. Todo lo específico de la
/// plataforma (paneles, painter, sonido) queda fuera del núcleo.
pub struct QuizApp {
    pub session: QuizSession,
    pub input: String,
    pub message: String,
    pub last_eval: Option<Evaluation>,
    pub state: AppState,
    pub cues: Box<dyn CuePlayer>,
}

impl QuizApp {
    pub fn new() -> Self {
        let bank = read_questions_embedded();
        Self {
            session: QuizSession::new(bank, QuizConfig::default()),
            input: String::new(),
            message: String::new(),
            last_eval: None,
            state: AppState::Welcome,
            cues: Box::new(SilentCues),
        }
    }

    pub fn with_cues(mut self, cues: Box<dyn CuePlayer>) -> Self {
        self.cues = cues;
        self
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
