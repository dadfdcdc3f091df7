use super::*;
use crate::model::OptionId;

impl QuizApp {
    /// Recibe el resultado del DataSource. Sólo tiene efecto mientras se está cargando.
    pub fn load(&mut self, result: Result<QuestionBank, LoadError>) {
        if self.state != AppState::Loading {
            log::warn!("Banco de preguntas recibido fuera de Loading ({:?}), se ignora", self.state);
            return;
        }
        match result {
            Ok(bank) => {
                let available = bank.len();
                self.bank = bank;
                self.dispatch(Event::Loaded { available }, Duration::ZERO);
            }
            Err(err) => {
                self.load_error = Some(err);
                self.dispatch(Event::LoadFailed, Duration::ZERO);
            }
        }
    }

    /// Clic en cualquier parte: empieza desde Start o reinicia desde Result.
    pub fn activate(&mut self, now: Duration) {
        self.dispatch(Event::Activate, now);
    }

    pub fn submit_answer(&mut self, option: OptionId, now: Duration) {
        self.dispatch(Event::Answer(option), now);
    }

    /// Avanza el reloj: dispara los temporizadores vencidos.
    pub fn tick(&mut self, now: Duration) {
        for timer in self.scheduler.drain_due(now) {
            self.dispatch(Event::Timer(timer), now);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.layout.width != width || self.layout.height != height {
            self.layout = ScreenLayout::for_viewport(width, height);
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            correct: self.session.current().and_then(|q| q.correct),
            is_last: self.session.is_last(),
            can_restart: self.session.can_restart,
            target: self.config.max_questions,
        }
    }

    fn dispatch(&mut self, event: Event, now: Duration) {
        let step = transition(&self.snapshot(), event);
        if step.next != self.state {
            log::debug!("{:?} -> {:?} ({:?})", self.state, step.next, event);
        }
        self.state = step.next;
        for effect in step.effects {
            self.apply(effect, now);
        }
    }

    fn apply(&mut self, effect: Effect, now: Duration) {
        match effect {
            Effect::WarnShortBank { available, target } => {
                log::warn!("El banco tiene menos de {target} preguntas, se usarán {available}");
            }
            Effect::ReportLoadFailure => match &self.load_error {
                Some(err) => log::error!("No se pudo cargar el quiz: {err}"),
                None => log::error!("No se pudo cargar el quiz: {}", LoadError::Empty),
            },
            Effect::StartSession => {
                self.session =
                    QuizSession::new(&self.bank, self.config.max_questions, &mut self.rng);
                self.feedback = None;
                self.scheduler.clear();
                log::info!("Nueva partida con {} preguntas", self.session.total());
            }
            Effect::AwardPoint => self.session.award_point(),
            Effect::ShowFeedback(outcome) => {
                self.feedback = Some(Feedback {
                    outcome,
                    started_at: now,
                });
            }
            Effect::AdvanceQuestion => {
                self.session.advance();
                self.feedback = None;
            }
            Effect::Schedule(timer) => {
                let delay = match timer {
                    Timer::FeedbackEnd => self.config.feedback_duration(),
                    Timer::RestartCooldown => self.config.restart_cooldown(),
                };
                self.scheduler.schedule(timer, now + delay);
            }
            Effect::EnableRestart => self.session.can_restart = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    const FEEDBACK: Duration = Duration::from_millis(1500);
    const COOLDOWN: Duration = Duration::from_millis(500);

    fn question(n: usize, correct: OptionId) -> Question {
        Question {
            prompt: Some(format!("Pregunta {n}")),
            options: [Some("a".into()), Some("b".into()), Some("c".into())],
            correct: Some(correct),
        }
    }

    fn app_with(bank: QuestionBank, seed: u64) -> QuizApp {
        let mut app = QuizApp::with_rng(QuizConfig::default(), StdRng::seed_from_u64(seed));
        app.load(Ok(bank));
        app
    }

    /// Responde la pregunta actual y deja pasar el feedback.
    fn answer_and_wait(app: &mut QuizApp, option: OptionId, now: &mut Duration) {
        app.submit_answer(option, *now);
        assert_eq!(app.state(), AppState::Feedback);
        *now += FEEDBACK;
        app.tick(*now);
    }

    #[test]
    fn perfect_run_ends_with_full_score() {
        let bank = vec![
            question(0, OptionId::A),
            question(1, OptionId::B),
            question(2, OptionId::C),
        ];
        let mut app = app_with(bank, 11);
        assert_eq!(app.state(), AppState::Start);
        assert_eq!(app.session.total(), 3);

        let mut now = Duration::from_secs(1);
        app.activate(now);
        assert_eq!(app.state(), AppState::Quiz);

        while app.state() == AppState::Quiz {
            let correct = app.current_question().and_then(|q| q.correct).unwrap();
            answer_and_wait(&mut app, correct, &mut now);
        }

        assert_eq!(app.state(), AppState::Result);
        assert_eq!(app.session.score, 3);
        assert_eq!(app.display_score(), 100);
    }

    #[test]
    fn empty_bank_stays_in_error() {
        let mut app = QuizApp::with_rng(QuizConfig::default(), StdRng::seed_from_u64(0));
        app.load(Err(LoadError::Empty));
        assert_eq!(app.state(), AppState::Error);

        let mut now = Duration::ZERO;
        for _ in 0..5 {
            now += Duration::from_secs(1);
            app.activate(now);
            app.submit_answer(OptionId::A, now);
            app.tick(now);
            app.load(Ok(vec![question(0, OptionId::A)]));
            assert_eq!(app.state(), AppState::Error);
            assert!(!app.options_visible());
        }
        assert!(app.load_error().is_some());
    }

    #[test]
    fn zero_rows_without_error_is_still_error() {
        let app = app_with(Vec::new(), 0);
        assert_eq!(app.state(), AppState::Error);
    }

    #[test]
    fn single_question_goes_straight_to_result() {
        for option in OptionId::ALL {
            let mut app = app_with(vec![question(0, OptionId::B)], 5);
            assert_eq!(app.session.total(), 1);
            let mut now = Duration::ZERO;
            app.activate(now);
            answer_and_wait(&mut app, option, &mut now);
            assert_eq!(app.state(), AppState::Result);
            let expected = if option == OptionId::B { 100 } else { 0 };
            assert_eq!(app.display_score(), expected);
        }
    }

    #[test]
    fn double_submit_counts_once() {
        let mut app = app_with(
            vec![question(0, OptionId::A), question(1, OptionId::A)],
            9,
        );
        let now = Duration::from_secs(2);
        app.activate(now);
        app.submit_answer(OptionId::A, now);
        app.submit_answer(OptionId::A, now + Duration::from_millis(10));
        app.submit_answer(OptionId::B, now + Duration::from_millis(20));
        assert_eq!(app.state(), AppState::Feedback);
        assert_eq!(app.session.score, 1);
        assert_eq!(app.feedback().map(|f| f.started_at), Some(now));
    }

    #[test]
    fn feedback_lasts_its_full_duration() {
        let mut app = app_with(
            vec![question(0, OptionId::A), question(1, OptionId::A)],
            2,
        );
        let start = Duration::from_secs(3);
        app.activate(start);
        app.submit_answer(OptionId::C, start);
        app.tick(start + FEEDBACK - Duration::from_millis(1));
        assert_eq!(app.state(), AppState::Feedback);
        app.tick(start + FEEDBACK);
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.session.current_index, 1);
        assert!(app.feedback().is_none());
    }

    #[test]
    fn restart_is_gated_by_cooldown() {
        let mut app = app_with(vec![question(0, OptionId::A), question(1, OptionId::B)], 4);
        let mut now = Duration::ZERO;
        app.activate(now);
        answer_and_wait(&mut app, OptionId::A, &mut now);
        answer_and_wait(&mut app, OptionId::A, &mut now);
        assert_eq!(app.state(), AppState::Result);
        assert!(app.session.score >= 1);

        app.activate(now);
        app.activate(now + COOLDOWN - Duration::from_millis(1));
        assert_eq!(app.state(), AppState::Result);
        assert!(!app.can_restart());

        now += COOLDOWN;
        app.tick(now);
        assert!(app.can_restart());
        app.activate(now);
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.current_index, 0);
        assert_eq!(app.session.total(), 2);
        assert!(!app.can_restart());
    }

    #[test]
    fn restart_draws_a_new_sample() {
        let bank: QuestionBank = (0..10).map(|i| question(i, OptionId::A)).collect();
        let mut app = app_with(bank, 21);
        let first: Vec<_> = app.session.selected.clone();

        let mut now = Duration::ZERO;
        app.activate(now);
        let mut samples = vec![first];
        for _ in 0..5 {
            while app.state() == AppState::Quiz {
                answer_and_wait(&mut app, OptionId::A, &mut now);
            }
            now += COOLDOWN;
            app.tick(now);
            app.activate(now);
            assert_eq!(app.state(), AppState::Quiz);
            samples.push(app.session.selected.clone());
        }
        assert!(samples.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn options_visible_only_in_quiz() {
        let mut app = QuizApp::with_rng(QuizConfig::default(), StdRng::seed_from_u64(8));
        assert!(!app.options_visible());
        app.load(Ok(vec![question(0, OptionId::A), question(1, OptionId::A)]));
        assert!(!app.options_visible());

        let mut now = Duration::ZERO;
        app.activate(now);
        assert!(app.options_visible());
        app.submit_answer(OptionId::A, now);
        assert!(!app.options_visible());
        now += FEEDBACK;
        app.tick(now);
        assert!(app.options_visible());
        answer_and_wait(&mut app, OptionId::B, &mut now);
        assert_eq!(app.state(), AppState::Result);
        assert!(!app.options_visible());
    }

    #[test]
    fn resize_recomputes_layout() {
        let mut app = app_with(vec![question(0, OptionId::A)], 1);
        app.resize(300.0, 500.0);
        assert_eq!(app.layout(), &ScreenLayout::for_viewport(300.0, 500.0));
        app.resize(1200.0, 900.0);
        assert_eq!(app.layout().text_size, 25.0);
    }
}
