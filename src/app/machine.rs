// src/app/machine.rs
//
// Transiciones puras: (estado, evento) -> nuevo estado + efectos.
// QuizApp aplica los efectos; aquí no se toca nada mutable.

use super::scheduler::Timer;
use crate::model::{AppState, OptionId, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Loaded { available: usize },
    LoadFailed,
    Activate,
    Answer(OptionId),
    Timer(Timer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    WarnShortBank { available: usize, target: usize },
    ReportLoadFailure,
    StartSession,
    AwardPoint,
    ShowFeedback(Outcome),
    AdvanceQuestion,
    Schedule(Timer),
    EnableRestart,
}

/// Lo que la máquina necesita saber de la partida en curso.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    pub state: AppState,
    pub correct: Option<OptionId>,
    pub is_last: bool,
    pub can_restart: bool,
    pub target: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: AppState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn stay(state: AppState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }

    fn to(next: AppState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }
}

pub fn transition(snapshot: &Snapshot, event: Event) -> Step {
    use AppState as S;

    match (snapshot.state, event) {
        (S::Loading, Event::Loaded { available: 0 }) | (S::Loading, Event::LoadFailed) => {
            Step::to(S::Error, vec![Effect::ReportLoadFailure])
        }
        (S::Loading, Event::Loaded { available }) => {
            let mut effects = Vec::new();
            if available < snapshot.target {
                effects.push(Effect::WarnShortBank {
                    available,
                    target: snapshot.target,
                });
            }
            effects.push(Effect::StartSession);
            Step::to(S::Start, effects)
        }

        (S::Start, Event::Activate) => Step::to(S::Quiz, Vec::new()),

        // Salimos de Quiz antes de animar nada: un segundo clic ya no llega aquí.
        (S::Quiz, Event::Answer(chosen)) => {
            let outcome = if snapshot.correct == Some(chosen) {
                Outcome::Correct
            } else {
                Outcome::Incorrect
            };
            let mut effects = Vec::with_capacity(3);
            if outcome == Outcome::Correct {
                effects.push(Effect::AwardPoint);
            }
            effects.push(Effect::ShowFeedback(outcome));
            effects.push(Effect::Schedule(Timer::FeedbackEnd));
            Step::to(S::Feedback, effects)
        }

        (S::Feedback, Event::Timer(Timer::FeedbackEnd)) => {
            if snapshot.is_last {
                Step::to(
                    S::Result,
                    vec![
                        Effect::AdvanceQuestion,
                        Effect::Schedule(Timer::RestartCooldown),
                    ],
                )
            } else {
                Step::to(S::Quiz, vec![Effect::AdvanceQuestion])
            }
        }

        (S::Result, Event::Timer(Timer::RestartCooldown)) => {
            Step::to(S::Result, vec![Effect::EnableRestart])
        }
        (S::Result, Event::Activate) if snapshot.can_restart => {
            Step::to(S::Quiz, vec![Effect::StartSession])
        }

        // Error es terminal; el resto de combinaciones (temporizadores tardíos incluidos) se ignoran.
        (state, _) => Step::stay(state),
    }
}
