/// Señal sonora opcional al corregir una respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Incorrect,
}

/// Reproductor de señales. Es un colaborador externo: la interfaz no
/// puede fallar, así que cada implementación se traga sus propios
/// errores en vez de propagarlos.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Sin sonido. Reproductor por defecto.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Deja constancia en el log; útil al depurar sin hardware de audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCues;

impl CuePlayer for LogCues {
    fn play(&mut self, cue: Cue) {
        log::debug!("señal sonora: {cue:?}");
    }
}
