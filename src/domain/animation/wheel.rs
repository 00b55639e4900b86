//! Spinning wheel driver.
//!
//! Angles are in degrees, measured clockwise. In wheel-local terms slice `i`
//! spans `[i·w, (i+1)·w)` from the pointer's rest position, `w = 360/N`.
//! Rotating the wheel clockwise by `R` brings wheel-local angle
//! `(−R) mod 360` under the fixed pointer at the top.

use std::time::Duration;

use serde::Serialize;

use super::driver::{AnimationDriver, StartOutcome};
use super::easing::{ease_out_cubic, lerp};
use super::frame::AnimationFrame;
use super::kind::AnimationKind;
use super::phase::AnimationPhase;
use super::timeline::Timeline;
use crate::domain::options::{position_of, Choice};
use crate::ports::RandomSource;

pub const MIN_EXTRA_TURNS: u32 = 5;
pub const MAX_EXTRA_TURNS: u32 = 8;

/// Characters of a label drawn on its slice.
pub const LABEL_MAX_CHARS: usize = 12;

/// Slice layout for an `N`-option wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    slices: usize,
}

impl WheelGeometry {
    pub fn new(slices: usize) -> Option<Self> {
        (slices > 0).then_some(Self { slices })
    }

    pub fn slice_count(&self) -> usize {
        self.slices
    }

    pub fn slice_width(&self) -> f64 {
        360.0 / self.slices as f64
    }

    /// Wheel-local `[start, end)` of slice `index`.
    pub fn slice_bounds(&self, index: usize) -> (f64, f64) {
        let w = self.slice_width();
        (index as f64 * w, (index + 1) as f64 * w)
    }

    /// Rotation in `[0, 360)` that centres slice `index` under the pointer.
    pub fn target_angle(&self, index: usize) -> f64 {
        let w = self.slice_width();
        (360.0 - (index as f64 * w + w / 2.0)).rem_euclid(360.0)
    }

    /// Slice under the pointer after rotating the wheel by `rotation`.
    pub fn slice_at_pointer(&self, rotation: f64) -> usize {
        let local = (-rotation).rem_euclid(360.0);
        ((local / self.slice_width()).floor() as usize).min(self.slices - 1)
    }
}

/// Absolute rotation to land on `target_angle` after `extra_turns` full turns.
///
/// Always spins forward from `current`, so repeated spins keep accumulating.
pub fn final_rotation(current: f64, target_angle: f64, extra_turns: u32) -> f64 {
    let offset = (target_angle - current).rem_euclid(360.0);
    current + extra_turns as f64 * 360.0 + offset
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelFrame {
    pub rotation_deg: f64,
    pub pointer_slice: usize,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub spinning: bool,
    /// Set once the wheel has stopped on the winner.
    pub winner_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct WheelDriver {
    geometry: Option<WheelGeometry>,
    labels: Vec<String>,
    colors: Vec<String>,
    winner_index: Option<usize>,
    rotation: f64,
    from: f64,
    to: f64,
    timeline: Timeline,
}

impl WheelDriver {
    pub fn new() -> Self {
        Self {
            geometry: None,
            labels: Vec::new(),
            colors: Vec::new(),
            winner_index: None,
            rotation: 0.0,
            from: 0.0,
            to: 0.0,
            timeline: Self::fresh_timeline(),
        }
    }

    fn fresh_timeline() -> Timeline {
        Timeline::new(AnimationKind::Wheel.duration(), Duration::ZERO)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation the current run will stop at.
    pub fn target_rotation(&self) -> f64 {
        self.to
    }

    pub fn geometry(&self) -> Option<WheelGeometry> {
        self.geometry
    }
}

impl Default for WheelDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for WheelDriver {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Wheel
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
        self.winner_index = None;

        let index = match position_of(options, winner) {
            Some(index) if AnimationKind::Wheel.driver_accepts(options.len()) => index,
            _ => {
                self.geometry = None;
                return StartOutcome::Placeholder;
            }
        };
        let Some(geometry) = WheelGeometry::new(options.len()) else {
            return StartOutcome::Placeholder;
        };

        self.geometry = Some(geometry);
        self.labels = options.iter().map(|c| c.display_label(LABEL_MAX_CHARS)).collect();
        self.colors = options.iter().map(|c| c.color.clone()).collect();
        self.winner_index = Some(index);

        let turns = rng.range_inclusive(MIN_EXTRA_TURNS, MAX_EXTRA_TURNS);
        self.from = self.rotation;
        self.to = final_rotation(self.rotation, geometry.target_angle(index), turns);

        match self.timeline.start() {
            Ok(()) => StartOutcome::Started,
            Err(_) => StartOutcome::Placeholder,
        }
    }

    fn tick(&mut self, dt: Duration, _rng: &dyn RandomSource) -> AnimationPhase {
        let step = self.timeline.advance(dt);
        if step.entered_settling {
            self.rotation = self.to;
        } else if self.timeline.phase() == AnimationPhase::Running {
            self.rotation = lerp(self.from, self.to, ease_out_cubic(step.progress));
        }
        self.timeline.phase()
    }

    fn abort(&mut self) -> bool {
        self.timeline.abort()
    }

    fn frame(&self) -> AnimationFrame {
        let Some(geometry) = self.geometry else {
            return AnimationFrame::placeholder(AnimationKind::Wheel);
        };
        let settled = matches!(
            self.timeline.phase(),
            AnimationPhase::Settling | AnimationPhase::Done
        );
        AnimationFrame::Wheel(WheelFrame {
            rotation_deg: self.rotation,
            pointer_slice: geometry.slice_at_pointer(self.rotation),
            labels: self.labels.clone(),
            colors: self.colors.clone(),
            spinning: self.timeline.phase() == AnimationPhase::Running,
            winner_index: if settled { self.winner_index } else { None },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRandomSource, SeededRandomSource};
    use proptest::prelude::*;

    fn options(count: usize) -> Vec<Choice> {
        (0..count)
            .map(|i| Choice::new(format!("{}", i), format!("Option {}", i), "#FF006E"))
            .collect()
    }

    fn run_to_end(driver: &mut WheelDriver, rng: &dyn RandomSource) {
        while driver.phase().is_active() {
            driver.tick(Duration::from_millis(16), rng);
        }
    }

    #[test]
    fn target_angle_matches_the_documented_formula() {
        let geometry = WheelGeometry::new(4).unwrap();
        assert_eq!(geometry.target_angle(0), 315.0);
        assert_eq!(geometry.target_angle(1), 225.0);
        assert_eq!(geometry.target_angle(3), 45.0);
    }

    #[test]
    fn final_rotation_adds_whole_turns_and_lands_on_target() {
        let rotation = final_rotation(0.0, 315.0, 5);
        assert_eq!(rotation, 5.0 * 360.0 + 315.0);

        let again = final_rotation(rotation, 45.0, 6);
        assert!(again > rotation + 6.0 * 360.0 - 1e-9);
        assert!((again.rem_euclid(360.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn wheel_stops_on_the_winner() {
        let rng = SeededRandomSource::new(17);
        let opts = options(5);
        let mut driver = WheelDriver::new();

        assert_eq!(driver.start(&opts, &opts[3], &rng), StartOutcome::Started);
        run_to_end(&mut driver, &rng);

        assert_eq!(driver.phase(), AnimationPhase::Done);
        assert_eq!(driver.rotation(), driver.target_rotation());
        match driver.frame() {
            AnimationFrame::Wheel(frame) => {
                assert_eq!(frame.pointer_slice, 3);
                assert_eq!(frame.winner_index, Some(3));
                assert!(!frame.spinning);
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn extra_turns_come_from_the_random_source() {
        let rng = FixedRandomSource::constant(7);
        let opts = options(2);
        let mut driver = WheelDriver::new();
        driver.start(&opts, &opts[0], &rng);
        // Slice 0 of 2 centres at 270°.
        assert_eq!(driver.target_rotation(), 7.0 * 360.0 + 270.0);
    }

    #[test]
    fn rotation_follows_cubic_ease_out() {
        let rng = FixedRandomSource::constant(5);
        let opts = options(4);
        let mut driver = WheelDriver::new();
        driver.start(&opts, &opts[0], &rng);

        driver.tick(Duration::from_millis(2000), &rng);
        let expected = driver.target_rotation() * 0.875;
        assert!((driver.rotation() - expected).abs() < 1e-9);
    }

    #[test]
    fn second_spin_starts_from_the_resting_angle() {
        let rng = SeededRandomSource::new(4);
        let opts = options(6);
        let mut driver = WheelDriver::new();
        driver.start(&opts, &opts[1], &rng);
        run_to_end(&mut driver, &rng);
        let rest = driver.rotation();

        driver.start(&opts, &opts[4], &rng);
        assert_eq!(driver.rotation(), rest);
        assert!(driver.target_rotation() > rest);
        run_to_end(&mut driver, &rng);
        assert_eq!(driver.geometry().unwrap().slice_at_pointer(driver.rotation()), 4);
    }

    #[test]
    fn labels_are_truncated_for_the_slices() {
        let rng = SeededRandomSource::new(1);
        let opts = vec![
            Choice::new("a", "A remarkably long option", "#FF006E"),
            Choice::new("b", "Short", "#8338EC"),
        ];
        let mut driver = WheelDriver::new();
        driver.start(&opts, &opts[1], &rng);
        match driver.frame() {
            AnimationFrame::Wheel(frame) => {
                assert_eq!(frame.labels, vec!["A remarkably...", "Short"]);
                assert_eq!(frame.winner_index, None);
                assert!(frame.spinning || driver.phase() == AnimationPhase::Running);
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn target_rotation_lies_within_the_winner_slice(
            slices in 2usize..64,
            pick in 0usize..64,
            current in 0.0f64..100_000.0,
            turns in MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS,
        ) {
            let geometry = WheelGeometry::new(slices).unwrap();
            let winner = pick % slices;
            let rotation = final_rotation(current, geometry.target_angle(winner), turns);

            prop_assert!(rotation >= current);
            prop_assert_eq!(geometry.slice_at_pointer(rotation), winner);

            let local = (-rotation).rem_euclid(360.0);
            let (start, end) = geometry.slice_bounds(winner);
            prop_assert!(local >= start && local < end);
        }
    }
}
