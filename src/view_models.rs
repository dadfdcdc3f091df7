// src/view_models.rs

use crate::model::{OptionId, Question};

#[derive(Clone, Debug, PartialEq)]
pub struct OptionLabel {
    pub id: OptionId,
    pub text: String,
}

impl OptionLabel {
    pub fn for_question(question: &Question) -> Vec<OptionLabel> {
        OptionId::ALL
            .iter()
            .map(|&id| OptionLabel {
                id,
                text: question.option_text(id),
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.text)
    }
}

/// Marcador "Pregunta i / n" (i empieza en 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionCounter {
    pub number: usize,
    pub total: usize,
}

impl QuestionCounter {
    pub fn label(&self) -> String {
        format!("Pregunta {} de {}", self.number, self.total)
    }
}
