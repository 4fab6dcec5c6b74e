//! Interactive console simulation.
//!
//! Runs the rig's serial grammar against simulated drives on stdin/stdout,
//! so the command set can be exercised without hardware. Type `HELP` for the
//! command reference, Ctrl-D to quit.

use std::io::{self, BufRead, Write};

use stepper_rig::{AxisSet, CoilDrive, Direction, Rig, RigConfig, Rpm};

/// Counts steps instead of driving coils.
struct SimDrive {
    label: &'static str,
    position: i64,
    speed_rpm: u32,
}

impl SimDrive {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            position: 0,
            speed_rpm: 0,
        }
    }
}

impl CoilDrive for SimDrive {
    fn step(&mut self, direction: Direction) {
        self.position += direction.sign();
    }

    fn set_speed(&mut self, speed: Rpm) {
        self.speed_rpm = speed.value();
    }

    fn release(&mut self) {
        // Nothing to de-energize in simulation.
    }
}

/// No-op delay so TARGET and demo pauses return immediately.
struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn main() -> io::Result<()> {
    let config = RigConfig::default();
    let axes = AxisSet::from_config(
        &config,
        SimDrive::new("A"),
        SimDrive::new("B"),
        SimDrive::new("C"),
    );
    let mut rig = Rig::new(axes, NoDelay, &config);

    let stdout = io::stdout();
    let mut out = String::new();

    rig.banner(&mut out).expect("banner");
    print!("{}", out);
    stdout.lock().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        out.clear();
        rig.handle_line(&line, &mut out).expect("reply");
        print!("{}", out);

        // Show the simulated shaft positions after each command.
        for id in stepper_rig::AxisId::ALL {
            let drive = rig.axes().axis(id).drive();
            print!("  {}={}", drive.label, drive.position);
        }
        println!();
        stdout.lock().flush()?;
    }

    Ok(())
}
