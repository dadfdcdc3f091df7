use crate::config::QuizConfig;
use crate::data::LoadError;
use crate::layout::ScreenLayout;
use crate::model::{AppState, Outcome, QuestionBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;
use std::time::Duration;

// Submódulos
pub mod actions;
pub mod loading;
pub mod machine;
pub mod queries;
pub mod scheduler;
pub mod session;

pub use machine::{Effect, Event, Snapshot, Step, transition};
pub use scheduler::{Scheduler, Timer};
pub use session::{QuizSession, sample_questions};

// Re-export de view models
pub use crate::view_models::{OptionLabel, QuestionCounter};

/// Mensaje de acierto/fallo que se anima durante `Feedback`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub started_at: Duration,
}

pub struct QuizApp {
    pub config: QuizConfig,
    pub(crate) bank: QuestionBank,
    pub(crate) session: QuizSession,
    pub(crate) state: AppState,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) layout: ScreenLayout,
    pub(crate) load_error: Option<LoadError>,
    pub(crate) scheduler: Scheduler,
    pub(crate) pending_load: Option<Receiver<Result<QuestionBank, LoadError>>>,
    rng: StdRng,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Igual que `new` pero con un generador fijo (tests y partidas reproducibles).
    pub fn with_rng(config: QuizConfig, rng: StdRng) -> Self {
        Self {
            config,
            bank: Vec::new(),
            session: QuizSession::default(),
            state: AppState::Loading,
            feedback: None,
            layout: ScreenLayout::default(),
            load_error: None,
            scheduler: Scheduler::new(),
            pending_load: None,
            rng,
        }
    }
}
