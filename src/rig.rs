//! The rig: command dispatch, runtime state, and the idle/demo loop.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::axis::{AxisId, AxisSet, CoilDrive};
use crate::command::{parse_int, parse_steps, Command, Verb};
use crate::config::units::{Rpm, Steps};
use crate::config::RigConfig;
use crate::error::CommandError;
use crate::motion::{move_all, move_one, MoveRequest};
use crate::state::RunState;

/// Identification line emitted once at startup, before the help text.
pub const BANNER: &str = "READY stepper-rig ULN2003 28BYJ-48 (axes A B C)";

const HELP_TEXT: &str = "\
Commands:
 HELP                - show this help
 SPEED <rpm>         - set speed for all axes (RPM)
 A <steps>           - step axis A by N steps
 B <steps>           - step axis B by N steps
 C <steps>           - step axis C by N steps
 AB <a> <b>          - step A=a, B=b steps
 ABC <a> <b> <c>     - step A=a, B=b, C=c steps
 TARGET              - aim macro: C back, wait, C return
 S | STOP            - stop + release coils
 R | RESUME          - resume motion
 RELEASE             - release coils (no hold)
 DEMO ON|OFF         - toggle demo sweep mode";

/// What a successful command should be acknowledged as.
enum Ack {
    /// `OK <VERB>`.
    Done,
    /// `OK DEMO ON` / `OK DEMO OFF`, reporting the resulting mode.
    Demo(bool),
    /// The help text, no `OK` line.
    Help,
}

/// The three-axis rig behind the serial console.
///
/// Owns the axis set, the run/stop and demo flags, and a delay provider for
/// the TARGET and demo pauses. Commands run to completion one line at a time;
/// the only cancellation point during a move is the motion engine's per-step
/// check of the run flag, so a STOP takes effect on the *next* move, never on
/// one already in flight.
pub struct Rig<D: CoilDrive, DELAY: DelayNs> {
    axes: AxisSet<D>,
    state: RunState,
    delay: DELAY,
    full_revolution: Steps,
    demo_pause_ms: u32,
    target_retreat: Steps,
    target_pause_ms: u32,
}

impl<D: CoilDrive, DELAY: DelayNs> Rig<D, DELAY> {
    /// Create the rig and apply the configured startup speed to every axis.
    pub fn new(mut axes: AxisSet<D>, delay: DELAY, config: &RigConfig) -> Self {
        axes.set_speed_all(config.initial_speed_rpm);
        Self {
            axes,
            state: RunState::new(),
            delay,
            full_revolution: config.full_revolution(),
            demo_pause_ms: config.demo.pause_ms,
            target_retreat: config.target_retreat(),
            target_pause_ms: config.target.pause_ms,
        }
    }

    /// The current runtime flags.
    #[inline]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Borrow the axis set.
    #[inline]
    pub fn axes(&self) -> &AxisSet<D> {
        &self.axes
    }

    /// Emit the startup banner and help text, once at initialization.
    pub fn banner<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", HELP_TEXT)
    }

    /// Run one main-cycle iteration.
    ///
    /// Dispatches a pending input line if one is available; otherwise, when
    /// enabled and in demo mode, runs one full demo sweep cycle. The flags are
    /// re-read only at the top of the next call, so a sweep segment always
    /// runs to completion unless the per-step check inside the move cuts it
    /// short.
    pub fn service<W: fmt::Write>(&mut self, line: Option<&str>, out: &mut W) -> fmt::Result {
        if let Some(line) = line {
            return self.handle_line(line, out);
        }
        if self.state.enabled() && self.state.demo_mode() {
            self.demo_cycle();
        }
        Ok(())
    }

    /// Dispatch one input line and emit its reply.
    ///
    /// Every accepted line produces exactly one reply line, `OK <VERB>` or
    /// `ERR <VERB>` (HELP prints the reference instead). Empty lines produce
    /// no reply. Failures never leave the console unready: each is local to
    /// its line.
    pub fn handle_line<W: fmt::Write>(&mut self, line: &str, out: &mut W) -> fmt::Result {
        let Some(cmd) = Command::parse(line) else {
            return Ok(());
        };
        let Some(verb) = cmd.verb() else {
            return writeln!(out, "ERR UNKNOWN");
        };
        match self.execute(verb, cmd.args) {
            Ok(Ack::Done) => writeln!(out, "OK {}", verb.name()),
            Ok(Ack::Demo(on)) => writeln!(out, "OK DEMO {}", if on { "ON" } else { "OFF" }),
            Ok(Ack::Help) => writeln!(out, "{}", HELP_TEXT),
            Err(CommandError::BadArgument) => writeln!(out, "ERR {}", verb.name()),
            Err(CommandError::Stopped) => writeln!(out, "ERR TARGET STOPPED"),
            Err(CommandError::Unknown) => writeln!(out, "ERR UNKNOWN"),
        }
    }

    fn execute(&mut self, verb: Verb, args: &str) -> Result<Ack, CommandError> {
        match verb {
            Verb::Help => Ok(Ack::Help),

            Verb::Speed => {
                let rpm = parse_int(args).ok_or(CommandError::BadArgument)?;
                if rpm <= 0 {
                    return Err(CommandError::BadArgument);
                }
                let rpm = Rpm::new(rpm.min(u32::MAX as i64) as u32);
                self.axes.set_speed_all(rpm);
                Ok(Ack::Done)
            }

            Verb::Move(id) => {
                let steps = parse_steps(args).ok_or(CommandError::BadArgument)?;
                let physical = self.axes.axis(id).signed(steps);
                move_one(&mut self.axes, id, physical, &self.state);
                Ok(Ack::Done)
            }

            Verb::MoveAb => {
                let rest = args.trim();
                let (tok_a, tok_b) = rest.split_once(' ').ok_or(CommandError::BadArgument)?;
                let a = parse_steps(tok_a).ok_or(CommandError::BadArgument)?;
                let b = parse_steps(tok_b).ok_or(CommandError::BadArgument)?;
                move_all(&mut self.axes, MoveRequest::new(a, b, Steps::ZERO), &self.state);
                Ok(Ack::Done)
            }

            Verb::MoveAbc => {
                let rest = args.trim();
                let (tok_a, rest) = rest.split_once(' ').ok_or(CommandError::BadArgument)?;
                let (tok_b, tok_c) = rest.split_once(' ').ok_or(CommandError::BadArgument)?;
                let a = parse_steps(tok_a).ok_or(CommandError::BadArgument)?;
                let b = parse_steps(tok_b).ok_or(CommandError::BadArgument)?;
                let c = parse_steps(tok_c).ok_or(CommandError::BadArgument)?;
                move_all(&mut self.axes, MoveRequest::new(a, b, c), &self.state);
                Ok(Ack::Done)
            }

            Verb::Stop => {
                self.state.stop();
                self.axes.release_all();
                Ok(Ack::Done)
            }

            Verb::Resume => {
                self.state.resume();
                Ok(Ack::Done)
            }

            Verb::Release => {
                self.axes.release_all();
                Ok(Ack::Done)
            }

            Verb::Demo => {
                let arg = args.trim();
                let on = if arg.eq_ignore_ascii_case("ON") || arg == "1" {
                    self.state.set_demo(true);
                    true
                } else if arg.eq_ignore_ascii_case("OFF") || arg == "0" {
                    self.state.set_demo(false);
                    false
                } else {
                    self.state.toggle_demo()
                };
                Ok(Ack::Demo(on))
            }

            Verb::Target => {
                if !self.state.enabled() {
                    return Err(CommandError::Stopped);
                }
                // Retreat axis C, hold, then return. The retreat is a physical
                // count; no wiring sign is applied.
                move_one(&mut self.axes, AxisId::C, -self.target_retreat, &self.state);
                self.delay.delay_ms(self.target_pause_ms);
                move_one(&mut self.axes, AxisId::C, self.target_retreat, &self.state);
                Ok(Ack::Done)
            }
        }
    }

    /// One demo sweep cycle: a full revolution forward on every axis, a pause,
    /// a full revolution back, another pause.
    fn demo_cycle(&mut self) {
        move_all(
            &mut self.axes,
            MoveRequest::uniform(self.full_revolution),
            &self.state,
        );
        self.delay.delay_ms(self.demo_pause_ms);
        move_all(
            &mut self.axes,
            MoveRequest::uniform(-self.full_revolution),
            &self.state,
        );
        self.delay.delay_ms(self.demo_pause_ms);
    }
}
