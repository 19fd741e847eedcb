use super::*;
use crate::cues::Cue;
use crate::evaluator;
use crate::session::SessionError;

impl QuizApp {
    /// Arranca una partida nueva desde cualquier estado.
    pub fn empezar(&mut self) {
        self.session.start();
        self.input.clear();
        self.message.clear();
        self.last_eval = None;
        self.state = AppState::Quiz;
    }

    /// Corrige la respuesta del campo de texto y deja el resultado en
    /// `message`. No cambia de pregunta: eso lo hace `avanzar`, para
    /// que el usuario vea la corrección antes de seguir.
    pub fn procesar_respuesta(&mut self) {
        let candidate = match evaluator::parse_candidate(&self.input) {
            Ok(value) => value,
            Err(err) => {
                // Entrada inválida: se reintenta sin tocar la sesión.
                self.last_eval = None;
                self.message = format!("⚠ {err}");
                return;
            }
        };

        match self.session.submit(candidate) {
            Ok(eval) => {
                self.last_eval = Some(eval);
                if eval.correct {
                    self.message = format!(
                        "✅ ¡Correcto! +{} puntos",
                        self.session.config().points_per_question
                    );
                    self.cues.play(Cue::Correct);
                } else {
                    self.message = format!("❌ Incorrecto. El valor exacto era {:.2}.", eval.expected);
                    self.cues.play(Cue::Incorrect);
                }
            }
            Err(err @ SessionError::AlreadyAnswered { .. }) => {
                log::warn!("envío duplicado: {err}");
                self.message = "Esta pregunta ya está respondida. Pulsa «Siguiente».".into();
            }
            Err(err) => {
                log::error!("envío fuera de secuencia: {err}");
                self.message = "Error interno: no hay pregunta seleccionada.".into();
            }
        }
    }

    /// Pasa a la siguiente pregunta, o al resumen si era la última.
    pub fn avanzar(&mut self) {
        if let Err(err) = self.session.advance() {
            log::error!("avance fuera de secuencia: {err}");
            self.volver_al_menu();
            return;
        }
        self.input.clear();
        self.message.clear();
        self.last_eval = None;
        if self.session.is_finished() {
            self.state = AppState::Summary;
        }
    }

    pub fn volver_al_menu(&mut self) {
        self.input.clear();
        self.message.clear();
        self.last_eval = None;
        self.state = AppState::Welcome;
    }
}
