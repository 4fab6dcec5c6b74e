//! Process-wide runtime flags.

/// Run/stop and demo-mode flags for the whole rig.
///
/// Mutated only by the command dispatcher; read by the motion engine on every
/// step and by the idle/demo loop each cycle. Single-threaded single-writer,
/// so no synchronization is needed - the per-step read is the rig's only
/// cancellation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState {
    enabled: bool,
    demo_mode: bool,
}

impl RunState {
    /// Startup state: enabled, demo off.
    pub const fn new() -> Self {
        Self {
            enabled: true,
            demo_mode: false,
        }
    }

    /// Whether stepping is currently allowed.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the autonomous demo sweep is active.
    #[inline]
    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Disable stepping (STOP).
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Re-enable stepping (RESUME).
    pub fn resume(&mut self) {
        self.enabled = true;
    }

    /// Set demo mode explicitly.
    pub fn set_demo(&mut self, on: bool) {
        self.demo_mode = on;
    }

    /// Toggle demo mode, returning the new value.
    pub fn toggle_demo(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        self.demo_mode
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
