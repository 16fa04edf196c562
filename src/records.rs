//! Core data models for Steerlog
//!
//! Defines the telemetry records the fragment writers consume:
//! - `ControlCommand`: a steering control command with a discriminant kind
//! - `SteeringAngleSample`: a measured steering angle in deci-degrees
//! - `TargetSteeringAngleStatus`: the optional target-angle setpoint
//!
//! All records are plain immutable value data produced elsewhere (vehicle
//! interface, controller); this crate never mutates or retains them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of a control command
///
/// Closed set matching the vehicle serial control protocol. The uppercase
/// wire names returned by [`CommandKind::as_str`] are stable: downstream log
/// parsers match them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    /// Steer towards a target value
    Steer,
    /// Reset the controller; carries no payload
    Reset,
    /// Echo a value back over the control link
    Echo,
    /// Drive the status LED
    Led,
}

impl CommandKind {
    /// Stable wire name of the discriminant, as it appears in log fragments.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Steer => "STEER",
            CommandKind::Reset => "RESET",
            CommandKind::Echo => "ECHO",
            CommandKind::Led => "LED",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A steering control command
///
/// `value` is meaningful only when `kind != Reset`; a reset command carries
/// no payload and its `value` is never read or emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlCommand {
    /// Which command this is
    pub kind: CommandKind,
    /// Numeric payload; undefined for `Reset`
    pub value: f64,
}

impl ControlCommand {
    pub fn new(kind: CommandKind, value: f64) -> Self {
        Self { kind, value }
    }

    /// A reset command. The payload field is not meaningful and holds zero.
    pub fn reset() -> Self {
        Self {
            kind: CommandKind::Reset,
            value: 0.0,
        }
    }
}

/// A measured steering angle, in tenths of a degree
///
/// `i16` matches the width of the CAN-sourced steering-angle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteeringAngleSample {
    pub angle_deci_degrees: i16,
}

impl SteeringAngleSample {
    pub fn new(angle_deci_degrees: i16) -> Self {
        Self { angle_deci_degrees }
    }
}

/// Target steering angle status
///
/// `angle_degrees` is meaningful only when `is_set` is true; when no target
/// is set the angle is never read or emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSteeringAngleStatus {
    /// Whether a target angle is currently set
    pub is_set: bool,
    /// Target angle in degrees; undefined when `is_set` is false
    pub angle_degrees: f64,
}

impl TargetSteeringAngleStatus {
    /// A status with a target angle set.
    pub fn set(angle_degrees: f64) -> Self {
        Self {
            is_set: true,
            angle_degrees,
        }
    }

    /// A status with no target angle. The angle field holds zero.
    pub fn unset() -> Self {
        Self {
            is_set: false,
            angle_degrees: 0.0,
        }
    }
}
