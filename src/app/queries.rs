use super::*;
use crate::model::Question;

impl QuizApp {
    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn can_restart(&self) -> bool {
        self.state == AppState::Result && self.session.can_restart
    }

    /// Los botones de opción sólo existen durante `Quiz`.
    pub fn options_visible(&self) -> bool {
        self.state == AppState::Quiz
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current()
    }

    pub fn display_score(&self) -> u32 {
        self.session.display_score(self.config.max_score)
    }

    pub fn option_labels(&self) -> Vec<OptionLabel> {
        match self.current_question() {
            Some(q) => OptionLabel::for_question(q),
            None => OptionLabel::for_question(&Question::default()),
        }
    }

    pub fn question_counter(&self) -> QuestionCounter {
        QuestionCounter {
            number: self.session.current_index + 1,
            total: self.session.total(),
        }
    }

    /// Tiempo transcurrido desde la respuesta, acotado a la duración del feedback.
    pub fn feedback_elapsed(&self, now: Duration) -> Option<Duration> {
        self.feedback.map(|f| {
            now.saturating_sub(f.started_at)
                .min(self.config.feedback_duration())
        })
    }

    /// Próximo instante en que hace falta un frame aunque no haya input.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }
}
