// src/config.rs

use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub window_title: String,
    pub questions_file: String,
    pub max_questions: usize,
    pub max_score: u32,
    pub feedback_duration_ms: u64,
    pub restart_cooldown_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            window_title: "Cute Quiz".to_owned(),
            questions_file: "questions.csv".to_owned(),
            max_questions: 3,
            max_score: 100,
            feedback_duration_ms: 1500,
            restart_cooldown_ms: 500,
        }
    }
}

impl QuizConfig {
    /// Carga la configuración embebida; si el YAML no es válido se usan los valores por defecto.
    pub fn embedded() -> Self {
        let file_content = include_str!("data/quiz_config.yaml");
        Self::from_yaml(file_content).unwrap_or_else(|err| {
            log::warn!("Configuración embebida inválida, usando valores por defecto: {err}");
            Self::default()
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }

    pub fn restart_cooldown(&self) -> Duration {
        Duration::from_millis(self.restart_cooldown_ms)
    }
}
