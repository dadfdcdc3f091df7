use crate::model::Question;
use rand::Rng;

/// Una partida: las preguntas sorteadas, la posición y los aciertos.
#[derive(Clone, Debug, Default)]
pub struct QuizSession {
    pub selected: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub can_restart: bool,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(bank: &[Question], max_questions: usize, rng: &mut R) -> Self {
        Self {
            selected: sample_questions(bank, max_questions, rng),
            current_index: 0,
            score: 0,
            can_restart: false,
        }
    }

    pub fn total(&self) -> usize {
        self.selected.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.selected.get(self.current_index)
    }

    /// true si la pregunta actual es la última (o ya no queda ninguna)
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.selected.len()
    }

    pub fn award_point(&mut self) {
        if self.score < self.selected.len() {
            self.score += 1;
        }
    }

    pub fn advance(&mut self) {
        if self.current_index < self.selected.len() {
            self.current_index += 1;
        }
    }

    /// floor(score / total * max_score); una partida vacía puntúa 0.
    pub fn display_score(&self, max_score: u32) -> u32 {
        let total = self.selected.len();
        if total == 0 {
            return 0;
        }
        (self.score as u64 * max_score as u64 / total as u64) as u32
    }
}

/// Muestreo sin reemplazo: se saca un índice al azar del resto y se quita del montón.
pub fn sample_questions<R: Rng + ?Sized>(
    bank: &[Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool: Vec<&Question> = bank.iter().collect();
    let wanted = count.min(pool.len());
    let mut selected = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let idx = rng.gen_range(0..pool.len());
        selected.push(pool.swap_remove(idx).clone());
    }
    selected
}
