pub mod app;
pub mod cues;
pub mod data;
pub mod evaluator;
pub mod model;
pub mod plot;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
