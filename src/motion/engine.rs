//! Coordinated stepping with cooperative cancellation.

use crate::axis::{AxisId, AxisSet, CoilDrive, Direction};
use crate::config::units::Steps;
use crate::state::RunState;

/// Per-axis signed step counts for a synchronized move.
///
/// Counts are logical: each axis's wiring-polarity sign is applied inside
/// [`move_all`]. A zero count is legal and contributes no motion on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    /// Signed logical step count for axis A.
    pub a: Steps,
    /// Signed logical step count for axis B.
    pub b: Steps,
    /// Signed logical step count for axis C.
    pub c: Steps,
}

impl MoveRequest {
    /// Build a request from three signed logical counts.
    pub const fn new(a: Steps, b: Steps, c: Steps) -> Self {
        Self { a, b, c }
    }

    /// The same signed count on every axis.
    pub const fn uniform(steps: Steps) -> Self {
        Self {
            a: steps,
            b: steps,
            c: steps,
        }
    }
}

/// How a move ended.
///
/// A cancelled move completed some unreported number of steps before the
/// run/stop flag cut it short and the coils were released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// Every requested step was issued.
    Completed,
    /// The run/stop flag went false; coils were released.
    Cancelled,
}

/// Execute a relative move on one axis.
///
/// `steps` is a physical count: the caller applies the axis's wiring-polarity
/// sign first (the dispatcher's single-axis verbs do). Before each step the
/// run/stop flag is checked; when it is false, all coils are released and the
/// move returns early. That per-step check is the only preemption point during
/// a long move.
pub fn move_one<D: CoilDrive>(
    axes: &mut AxisSet<D>,
    id: AxisId,
    steps: Steps,
    state: &RunState,
) -> MoveOutcome {
    let direction = Direction::from_steps(steps);
    for _ in 0..steps.magnitude() {
        if !state.enabled() {
            axes.release_all();
            return MoveOutcome::Cancelled;
        }
        axes.axis_mut(id).step(direction);
    }
    MoveOutcome::Completed
}

/// Execute a synchronized move across all axes.
///
/// Each axis's wiring-polarity sign is applied to its requested count first,
/// then a single interleaved loop advances every axis that still has remaining
/// steps by exactly one physical step per iteration. Axes requested with equal
/// counts stay mechanically synchronized step for step; axes with smaller
/// counts simply finish early while the others continue. This is deliberate
/// round-robin, not proportional interpolation.
pub fn move_all<D: CoilDrive>(
    axes: &mut AxisSet<D>,
    request: MoveRequest,
    state: &RunState,
) -> MoveOutcome {
    let signed = [
        axes.axis(AxisId::A).signed(request.a),
        axes.axis(AxisId::B).signed(request.b),
        axes.axis(AxisId::C).signed(request.c),
    ];
    let directions = signed.map(Direction::from_steps);
    let mut remaining = signed.map(Steps::magnitude);

    while remaining.iter().any(|&r| r > 0) {
        if !state.enabled() {
            axes.release_all();
            return MoveOutcome::Cancelled;
        }
        for (i, id) in AxisId::ALL.into_iter().enumerate() {
            if remaining[i] > 0 {
                axes.axis_mut(id).step(directions[i]);
                remaining[i] -= 1;
            }
        }
    }
    MoveOutcome::Completed
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use proptest::prelude::*;

    use crate::config::units::Rpm;
    use crate::config::RigConfig;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Step(AxisId, Direction),
        Release(AxisId),
    }

    /// Records every drive call into a log shared by all three axes, so tests
    /// can check interleaving across the whole set.
    struct RecordingDrive {
        id: AxisId,
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl CoilDrive for RecordingDrive {
        fn step(&mut self, direction: Direction) {
            self.log.borrow_mut().push(Event::Step(self.id, direction));
        }

        fn set_speed(&mut self, _speed: Rpm) {}

        fn release(&mut self) {
            self.log.borrow_mut().push(Event::Release(self.id));
        }
    }

    fn recording_axes() -> (AxisSet<RecordingDrive>, Rc<RefCell<Vec<Event>>>) {
        // Polarity-neutral wiring so engine tests see logical == physical.
        let mut config = RigConfig::default();
        config.axes.a.invert_direction = false;

        let log = Rc::new(RefCell::new(Vec::new()));
        let drive = |id| RecordingDrive {
            id,
            log: Rc::clone(&log),
        };
        let axes = AxisSet::from_config(
            &config,
            drive(AxisId::A),
            drive(AxisId::B),
            drive(AxisId::C),
        );
        (axes, log)
    }

    fn steps_for(log: &[Event], id: AxisId) -> Vec<Direction> {
        log.iter()
            .filter_map(|e| match e {
                Event::Step(axis, dir) if *axis == id => Some(*dir),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_move_one_issues_exact_count() {
        let (mut axes, log) = recording_axes();
        let state = RunState::new();

        let outcome = move_one(&mut axes, AxisId::B, Steps::new(-7), &state);

        assert_eq!(outcome, MoveOutcome::Completed);
        let steps = steps_for(&log.borrow(), AxisId::B);
        assert_eq!(steps.len(), 7);
        assert!(steps.iter().all(|&d| d == Direction::Backward));
        assert!(steps_for(&log.borrow(), AxisId::A).is_empty());
    }

    #[test]
    fn test_move_one_stopped_releases_without_stepping() {
        let (mut axes, log) = recording_axes();
        let mut state = RunState::new();
        state.stop();

        let outcome = move_one(&mut axes, AxisId::A, Steps::new(10), &state);

        assert_eq!(outcome, MoveOutcome::Cancelled);
        let log = log.borrow();
        assert!(steps_for(&log, AxisId::A).is_empty());
        assert!(log.contains(&Event::Release(AxisId::A)));
        assert!(log.contains(&Event::Release(AxisId::B)));
        assert!(log.contains(&Event::Release(AxisId::C)));
    }

    #[test]
    fn test_move_one_zero_steps_is_noop() {
        let (mut axes, log) = recording_axes();
        let state = RunState::new();

        let outcome = move_one(&mut axes, AxisId::C, Steps::ZERO, &state);

        assert_eq!(outcome, MoveOutcome::Completed);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_move_all_equal_counts_stay_lockstep() {
        let (mut axes, log) = recording_axes();
        let state = RunState::new();

        let outcome = move_all(
            &mut axes,
            MoveRequest::uniform(Steps::new(5)),
            &state,
        );

        assert_eq!(outcome, MoveOutcome::Completed);
        let log = log.borrow();
        assert_eq!(log.len(), 15);
        // Each iteration contributes one step per axis, A then B then C.
        for chunk in log.chunks(3) {
            assert_eq!(
                chunk,
                [
                    Event::Step(AxisId::A, Direction::Forward),
                    Event::Step(AxisId::B, Direction::Forward),
                    Event::Step(AxisId::C, Direction::Forward),
                ]
            );
        }
    }

    #[test]
    fn test_move_all_shorter_axis_finishes_early() {
        let (mut axes, log) = recording_axes();
        let state = RunState::new();

        let request = MoveRequest::new(Steps::new(4), Steps::new(-2), Steps::ZERO);
        let outcome = move_all(&mut axes, request, &state);

        assert_eq!(outcome, MoveOutcome::Completed);
        let log = log.borrow();
        assert_eq!(steps_for(&log, AxisId::A).len(), 4);
        assert_eq!(steps_for(&log, AxisId::B).len(), 2);
        assert!(steps_for(&log, AxisId::C).is_empty());
        // B contributes only in the first two iterations.
        assert_eq!(
            &log[..4],
            [
                Event::Step(AxisId::A, Direction::Forward),
                Event::Step(AxisId::B, Direction::Backward),
                Event::Step(AxisId::A, Direction::Forward),
                Event::Step(AxisId::B, Direction::Backward),
            ]
        );
        assert_eq!(
            &log[4..],
            [
                Event::Step(AxisId::A, Direction::Forward),
                Event::Step(AxisId::A, Direction::Forward),
            ]
        );
    }

    #[test]
    fn test_move_all_applies_wiring_polarity() {
        // Default config: axis A inverted.
        let log = Rc::new(RefCell::new(Vec::new()));
        let drive = |id| RecordingDrive {
            id,
            log: Rc::clone(&log),
        };
        let config = RigConfig::default();
        let mut axes = AxisSet::from_config(
            &config,
            drive(AxisId::A),
            drive(AxisId::B),
            drive(AxisId::C),
        );
        let state = RunState::new();

        move_all(
            &mut axes,
            MoveRequest::new(Steps::new(3), Steps::new(3), Steps::ZERO),
            &state,
        );

        let log = log.borrow();
        assert!(steps_for(&log, AxisId::A)
            .iter()
            .all(|&d| d == Direction::Backward));
        assert!(steps_for(&log, AxisId::B)
            .iter()
            .all(|&d| d == Direction::Forward));
    }

    #[test]
    fn test_move_all_stopped_releases_immediately() {
        let (mut axes, log) = recording_axes();
        let mut state = RunState::new();
        state.stop();

        let outcome = move_all(
            &mut axes,
            MoveRequest::uniform(Steps::new(100)),
            &state,
        );

        assert_eq!(outcome, MoveOutcome::Cancelled);
        let log = log.borrow();
        assert!(log
            .iter()
            .all(|e| matches!(e, Event::Release(_))));
        assert_eq!(log.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_move_one_count_and_direction(n in -300i64..=300) {
            let (mut axes, log) = recording_axes();
            let state = RunState::new();

            move_one(&mut axes, AxisId::A, Steps::new(n), &state);

            let steps = steps_for(&log.borrow(), AxisId::A);
            prop_assert_eq!(steps.len() as u64, n.unsigned_abs());
            let expected = Direction::from_steps(Steps::new(n));
            prop_assert!(steps.iter().all(|&d| d == expected));
        }
    }
}
