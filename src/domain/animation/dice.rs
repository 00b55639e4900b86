//! Dice driver: up to six dice tumble, then the first die lands on the winner.

use std::time::Duration;

use serde::Serialize;

use super::driver::{AnimationDriver, StartOutcome};
use super::frame::AnimationFrame;
use super::kind::AnimationKind;
use super::phase::AnimationPhase;
use super::timeline::Timeline;
use crate::domain::options::{position_of, Choice};
use crate::ports::RandomSource;

pub const MAX_DICE: usize = 6;

/// How often tumbling dice show a new face.
pub const REROLL_INTERVAL: Duration = Duration::from_millis(100);

/// Unicode die faces, one pip through six.
pub const FACE_GLYPHS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// Zero-based die face; `0` shows one pip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DieFace(u8);

impl DieFace {
    pub fn new(index: usize) -> Self {
        Self((index % MAX_DICE) as u8)
    }

    pub fn random(rng: &dyn RandomSource) -> Self {
        Self::new(rng.next_index(MAX_DICE))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn pips(&self) -> u8 {
        self.0 + 1
    }

    pub fn glyph(&self) -> char {
        FACE_GLYPHS[self.index()]
    }
}

/// Maps a face to the option it stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub glyph: char,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiceFrame {
    pub faces: Vec<DieFace>,
    pub rolling: bool,
    pub legend: Vec<LegendEntry>,
    /// Legend row for the winner, once the dice have landed.
    pub highlighted: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct DiceDriver {
    faces: Vec<DieFace>,
    legend: Vec<LegendEntry>,
    winner_index: Option<usize>,
    since_reroll: Duration,
    armed: bool,
    timeline: Timeline,
}

impl DiceDriver {
    pub fn new() -> Self {
        Self {
            faces: Vec::new(),
            legend: Vec::new(),
            winner_index: None,
            since_reroll: Duration::ZERO,
            armed: false,
            timeline: Self::fresh_timeline(),
        }
    }

    fn fresh_timeline() -> Timeline {
        Timeline::new(AnimationKind::Dice.duration(), Duration::ZERO)
    }

    pub fn faces(&self) -> &[DieFace] {
        &self.faces
    }

    fn reroll(&mut self, rng: &dyn RandomSource) {
        for face in self.faces.iter_mut() {
            *face = DieFace::random(rng);
        }
    }
}

impl Default for DiceDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for DiceDriver {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Dice
    }

    fn phase(&self) -> AnimationPhase {
        self.timeline.phase()
    }

    fn start(
        &mut self,
        options: &[Choice],
        winner: &Choice,
        rng: &dyn RandomSource,
    ) -> StartOutcome {
        self.timeline = Self::fresh_timeline();
        self.armed = false;
        self.winner_index = None;

        let index = match position_of(options, winner) {
            Some(index) if AnimationKind::Dice.driver_accepts(options.len()) => index,
            _ => return StartOutcome::Placeholder,
        };

        let dice = options.len().min(MAX_DICE);
        self.faces = vec![DieFace::default(); dice];
        self.reroll(rng);
        self.legend = options
            .iter()
            .take(MAX_DICE)
            .enumerate()
            .map(|(i, choice)| LegendEntry {
                glyph: FACE_GLYPHS[i],
                text: choice.text.clone(),
            })
            .collect();
        self.winner_index = Some(index);
        self.since_reroll = Duration::ZERO;

        match self.timeline.start() {
            Ok(()) => {
                self.armed = true;
                StartOutcome::Started
            }
            Err(_) => StartOutcome::Placeholder,
        }
    }

    fn tick(&mut self, dt: Duration, rng: &dyn RandomSource) -> AnimationPhase {
        let step = self.timeline.advance(dt);

        if step.entered_settling {
            self.reroll(rng);
            if let (Some(first), Some(index)) = (self.faces.first_mut(), self.winner_index) {
                *first = DieFace::new(index);
            }
        } else if self.timeline.phase() == AnimationPhase::Running {
            self.since_reroll += dt;
            while self.since_reroll >= REROLL_INTERVAL {
                self.since_reroll -= REROLL_INTERVAL;
                self.reroll(rng);
            }
        }
        self.timeline.phase()
    }

    fn abort(&mut self) -> bool {
        self.timeline.abort()
    }

    fn frame(&self) -> AnimationFrame {
        if !self.armed {
            return AnimationFrame::placeholder(AnimationKind::Dice);
        }
        let landed = matches!(
            self.timeline.phase(),
            AnimationPhase::Settling | AnimationPhase::Done
        );
        AnimationFrame::Dice(DiceFrame {
            faces: self.faces.clone(),
            rolling: self.timeline.phase() == AnimationPhase::Running,
            legend: self.legend.clone(),
            highlighted: self
                .winner_index
                .filter(|i| landed && *i < self.legend.len()),
        })
    }
}
