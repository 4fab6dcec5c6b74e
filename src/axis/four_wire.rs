//! Four-wire unipolar stepper drive (ULN2003 + 28BYJ-48 class).
//!
//! Generic over embedded-hal 1.0 pin types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::config::units::Rpm;

use super::drive::{CoilDrive, Direction};

/// Two-coil-on full-step phase table, one row per phase, IN1..IN4 order.
const PHASES: [[bool; 4]; 4] = [
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
    [true, false, false, true],
];

/// Full-step drive for a four-wire unipolar stepper behind a ULN2003 darlington
/// array.
///
/// Generic over:
/// - `IN1`..`IN4`: coil control pins (must implement `OutputPin`)
/// - `DELAY`: delay provider for inter-step timing (must implement `DelayNs`)
///
/// Coil outputs are push-pull GPIO; pin write failures are not observable at
/// this layer (see [`CoilDrive`]).
pub struct FourWireDrive<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
    delay: DELAY,

    /// Current row in the phase table.
    phase: u8,

    /// Steps per full output-shaft revolution, for speed conversion.
    steps_per_revolution: u32,

    /// Inter-step interval in microseconds, derived from the current speed.
    step_interval_us: u32,
}

impl<IN1, IN2, IN3, IN4, DELAY> FourWireDrive<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Create a drive with the given coil pins and initial speed.
    ///
    /// The pins are not touched until the first `step` or `release` call.
    pub fn new(
        in1: IN1,
        in2: IN2,
        in3: IN3,
        in4: IN4,
        delay: DELAY,
        steps_per_revolution: u32,
        speed: Rpm,
    ) -> Self {
        Self {
            in1,
            in2,
            in3,
            in4,
            delay,
            phase: 0,
            steps_per_revolution,
            step_interval_us: interval_us(steps_per_revolution, speed),
        }
    }

    /// Current inter-step interval in microseconds.
    #[inline]
    pub fn step_interval_us(&self) -> u32 {
        self.step_interval_us
    }

    fn write_phase(&mut self, pattern: [bool; 4]) {
        let _ = self.in1.set_state(PinState::from(pattern[0]));
        let _ = self.in2.set_state(PinState::from(pattern[1]));
        let _ = self.in3.set_state(PinState::from(pattern[2]));
        let _ = self.in4.set_state(PinState::from(pattern[3]));
    }
}

/// Microseconds between steps for a given speed.
fn interval_us(steps_per_revolution: u32, speed: Rpm) -> u32 {
    let steps_per_minute = (steps_per_revolution as u64) * (speed.value().max(1) as u64);
    (60_000_000u64 / steps_per_minute.max(1)).min(u32::MAX as u64) as u32
}

impl<IN1, IN2, IN3, IN4, DELAY> CoilDrive for FourWireDrive<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    fn step(&mut self, direction: Direction) {
        self.phase = match direction {
            Direction::Forward => (self.phase + 1) % 4,
            Direction::Backward => (self.phase + 3) % 4,
        };
        self.write_phase(PHASES[self.phase as usize]);
        self.delay.delay_us(self.step_interval_us);
    }

    fn set_speed(&mut self, speed: Rpm) {
        self.step_interval_us = interval_us(self.steps_per_revolution, speed);
    }

    fn release(&mut self) {
        // Phase index is kept so the next step continues the sequence.
        self.write_phase([false; 4]);
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    use super::*;

    #[test]
    fn test_single_forward_step_writes_phase_one() {
        // Phase advances 0 -> 1, pattern 0110.
        let in1 = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let in2 = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let in3 = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let in4 = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        let mut drive =
            FourWireDrive::new(in1, in2, in3, in4, NoopDelay::new(), 2048, Rpm::new(12));
        drive.step(Direction::Forward);

        let FourWireDrive {
            mut in1,
            mut in2,
            mut in3,
            mut in4,
            ..
        } = drive;
        in1.done();
        in2.done();
        in3.done();
        in4.done();
    }

    #[test]
    fn test_backward_step_reverses_sequence() {
        // Phase goes 0 -> 3, pattern 1001.
        let in1 = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let in2 = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let in3 = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let in4 = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut drive =
            FourWireDrive::new(in1, in2, in3, in4, NoopDelay::new(), 2048, Rpm::new(12));
        drive.step(Direction::Backward);

        let FourWireDrive {
            mut in1,
            mut in2,
            mut in3,
            mut in4,
            ..
        } = drive;
        in1.done();
        in2.done();
        in3.done();
        in4.done();
    }

    #[test]
    fn test_release_drives_all_coils_low() {
        let low = [PinTransaction::set(PinState::Low)];
        let in1 = PinMock::new(&low);
        let in2 = PinMock::new(&low);
        let in3 = PinMock::new(&low);
        let in4 = PinMock::new(&low);

        let mut drive =
            FourWireDrive::new(in1, in2, in3, in4, NoopDelay::new(), 2048, Rpm::new(12));
        drive.release();

        let FourWireDrive {
            mut in1,
            mut in2,
            mut in3,
            mut in4,
            ..
        } = drive;
        in1.done();
        in2.done();
        in3.done();
        in4.done();
    }

    #[test]
    fn test_step_interval_from_speed() {
        // 2048 steps/rev at 12 RPM -> 60e6 / 24576 = 2441 us.
        assert_eq!(interval_us(2048, Rpm::new(12)), 2441);
        // Doubling the speed halves the interval.
        assert_eq!(interval_us(2048, Rpm::new(24)), 1220);
    }
}
