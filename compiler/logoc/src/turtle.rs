//! Dry-run turtle.
//!
//! Stands in for the robot: commands are range-checked, applied to a
//! simulated pose and recorded instead of being sent to hardware. Heading
//! is in degrees, 0 pointing along +y, turning left increasing it.

use std::fmt;

use logo_eval::{ProgramError, ProgramResult};
use parking_lot::Mutex;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Forward(f64),
    Backward(f64),
    TurnLeft(f64),
    TurnRight(f64),
    SetSpeed(f64),
}

impl Command {
    pub fn magnitude(self) -> f64 {
        match self {
            Command::Forward(v)
            | Command::Backward(v)
            | Command::TurnLeft(v)
            | Command::TurnRight(v)
            | Command::SetSpeed(v) => v,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, value) = match self {
            Command::Forward(v) => ("forward", v),
            Command::Backward(v) => ("backward", v),
            Command::TurnLeft(v) => ("turn left", v),
            Command::TurnRight(v) => ("turn right", v),
            Command::SetSpeed(v) => ("set speed", v),
        };
        write!(f, "{verb} {value}")
    }
}

#[derive(Debug, Default)]
struct Pose {
    x: f64,
    y: f64,
    heading: f64,
    speed: f64,
    log: Vec<Command>,
}

pub struct Turtle {
    max_step: f64,
    pose: Mutex<Pose>,
}

impl Turtle {
    pub fn new(max_step: f64) -> Self {
        Turtle {
            max_step,
            pose: Mutex::new(Pose::default()),
        }
    }

    /// Check `command` against the step bound, then apply and record it.
    ///
    /// `name` is the primitive the command came from, for the error.
    pub fn apply(&self, name: &str, command: Command) -> ProgramResult<()> {
        let value = command.magnitude();
        // Written so that NaN is rejected too.
        if !(value.abs() <= self.max_step) {
            return Err(ProgramError::OutOfRange {
                name: name.to_string(),
                value,
                limit: self.max_step,
            });
        }

        info!(%command, "turtle");
        let mut pose = self.pose.lock();
        match command {
            Command::Forward(d) => pose.advance(d),
            Command::Backward(d) => pose.advance(-d),
            Command::TurnLeft(a) => pose.turn(a),
            Command::TurnRight(a) => pose.turn(-a),
            Command::SetSpeed(s) => pose.speed = s,
        }
        pose.log.push(command);
        Ok(())
    }

    pub fn position(&self) -> (f64, f64) {
        let pose = self.pose.lock();
        (pose.x, pose.y)
    }

    /// Heading in degrees, normalized to `[0, 360)`.
    pub fn heading(&self) -> f64 {
        self.pose.lock().heading
    }

    pub fn speed(&self) -> f64 {
        self.pose.lock().speed
    }

    /// Every command applied so far, oldest first.
    pub fn commands(&self) -> Vec<Command> {
        self.pose.lock().log.clone()
    }
}

impl Pose {
    fn advance(&mut self, distance: f64) {
        let radians = self.heading.to_radians();
        self.x -= distance * radians.sin();
        self.y += distance * radians.cos();
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
