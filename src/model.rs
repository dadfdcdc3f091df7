use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de opción tal y como aparece en la columna `correct`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OptionId {
    A,
    B,
    C,
}

impl OptionId {
    pub const ALL: [OptionId; 3] = [OptionId::A, OptionId::B, OptionId::C];

    /// Comparación sensible a mayúsculas: "a" no es una opción válida.
    pub fn parse(raw: &str) -> Option<OptionId> {
        match raw.trim() {
            "A" => Some(OptionId::A),
            "B" => Some(OptionId::B),
            "C" => Some(OptionId::C),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            OptionId::A => 0,
            OptionId::B => 1,
            OptionId::C => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            OptionId::A => 'A',
            OptionId::B => 'B',
            OptionId::C => 'C',
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub const QUESTION_MISSING: &str = "Error de carga: pregunta perdida";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Question {
    pub prompt: Option<String>, // Enunciado
    pub options: [Option<String>; 3],
    pub correct: Option<OptionId>,
}

impl Question {
    pub fn prompt_text(&self) -> &str {
        self.prompt.as_deref().unwrap_or(QUESTION_MISSING)
    }

    /// Texto de la opción o un marcador visible si falta en el CSV.
    pub fn option_text(&self, id: OptionId) -> String {
        match &self.options[id.index()] {
            Some(text) => text.clone(),
            None => format!("Opción {id} perdida"),
        }
    }

    pub fn is_correct(&self, chosen: OptionId) -> bool {
        self.correct == Some(chosen)
    }
}

pub type QuestionBank = Vec<Question>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Error,
    Start,
    Quiz,
    Feedback,
    Result,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Correct => "¡Correcto!",
            Outcome::Incorrect => "¡Oh no! No pasa nada, ¡sigue intentándolo!",
        }
    }
}
