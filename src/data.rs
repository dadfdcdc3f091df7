// src/data.rs

use crate::model::{OptionId, Question, QuestionBank};
use serde::Deserialize;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Io { path: String, message: String },
    Fetch(String),
    Malformed(String),
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "No se pudo leer '{path}': {message}"),
            Self::Fetch(message) => write!(f, "No se pudo descargar el banco de preguntas: {message}"),
            Self::Malformed(message) => write!(f, "CSV con formato inválido: {message}"),
            Self::Empty => write!(f, "El banco de preguntas está vacío"),
        }
    }
}

impl Error for LoadError {}

/// Fila tal y como viene en el CSV (`question,optionA,optionB,optionC,correct`).
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(default)]
    question: Option<String>,
    #[serde(default, rename = "optionA")]
    option_a: Option<String>,
    #[serde(default, rename = "optionB")]
    option_b: Option<String>,
    #[serde(default, rename = "optionC")]
    option_c: Option<String>,
    #[serde(default)]
    correct: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Question {
            prompt: non_empty(record.question),
            options: [
                non_empty(record.option_a),
                non_empty(record.option_b),
                non_empty(record.option_c),
            ],
            correct: record.correct.as_deref().and_then(OptionId::parse),
        }
    }
}

/// Parsea el CSV completo. Cero filas es un error: sin preguntas no hay quiz.
pub fn parse_questions(csv_text: &str) -> Result<QuestionBank, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut questions = Vec::new();
    for result in rdr.deserialize::<QuestionRecord>() {
        let record = result.map_err(|e| LoadError::Malformed(e.to_string()))?;
        questions.push(Question::from(record));
    }

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(questions)
}

/// Banco de preguntas embebido en el binario
pub fn read_questions_embedded() -> Result<QuestionBank, LoadError> {
    parse_questions(include_str!("data/questions.csv"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_questions_file(path: &std::path::Path) -> Result<QuestionBank, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_questions(&text)
}

/// En escritorio: el CSV junto al ejecutable manda; si no existe, el embebido.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_questions_native(questions_file: &str) -> Result<QuestionBank, LoadError> {
    let path = std::path::Path::new(questions_file);
    if path.exists() {
        log::info!("Cargando preguntas desde {}", path.display());
        read_questions_file(path)
    } else {
        log::info!("'{questions_file}' no existe, usando el banco embebido");
        read_questions_embedded()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str) -> Result<QuestionBank, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("No existe window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| LoadError::Fetch(format!("No se pudo crear request fetch: {:?}", err)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Fetch(format!("{:?}", err)))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("La respuesta fetch no es un Response válido".into()))?;

    if !response.ok() {
        return Err(LoadError::Fetch(format!("HTTP {} en {url}", response.status())));
    }

    let promise = response
        .text()
        .map_err(|err| LoadError::Fetch(format!("{:?}", err)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| LoadError::Fetch(format!("{:?}", err)))?
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response.text() no devolvió string".into()))?;

    parse_questions(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_by_header_name() {
        let csv = "correct,question,optionC,optionB,optionA\nB,¿Dos más dos?,5,4,3\n";
        let bank = parse_questions(csv).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].prompt_text(), "¿Dos más dos?");
        assert_eq!(bank[0].option_text(OptionId::A), "3");
        assert_eq!(bank[0].option_text(OptionId::B), "4");
        assert_eq!(bank[0].correct, Some(OptionId::B));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "question,optionA,optionB,optionC,correct\n";
        assert_eq!(parse_questions(csv), Err(LoadError::Empty));
        assert_eq!(parse_questions(""), Err(LoadError::Empty));
    }

    #[test]
    fn empty_and_missing_cells_become_placeholders() {
        let csv = "question,optionA,optionB,optionC,correct\n,Sí,,\n";
        let bank = parse_questions(csv).unwrap();
        let q = &bank[0];
        assert_eq!(q.prompt, None);
        assert_eq!(q.options[0].as_deref(), Some("Sí"));
        assert_eq!(q.options[1], None);
        assert_eq!(q.options[2], None);
        assert_eq!(q.correct, None);
    }

    #[test]
    fn lowercase_answer_is_not_accepted() {
        let csv = "question,optionA,optionB,optionC,correct\nx,a,b,c,a\n";
        let bank = parse_questions(csv).unwrap();
        assert_eq!(bank[0].correct, None);
    }

    #[test]
    fn embedded_bank_has_enough_questions() {
        let bank = read_questions_embedded().unwrap();
        assert!(bank.len() >= 3);
        assert!(bank.iter().all(|q| q.correct.is_some()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_reports_io_error() {
        let err = read_questions_file(std::path::Path::new("no/existe/questions.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
