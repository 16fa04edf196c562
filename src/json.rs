//! JSON fragment writers
//!
//! Each writer renders one telemetry record as a single-line JSON object
//! fragment (no enclosing braces) plus a trailing newline, appended to a
//! caller-supplied sink. Fragments are meant to be embedded by the caller
//! inside a larger per-event object in an append-only log, so key names and
//! spacing are fixed byte-for-byte.
//!
//! Writers are stateless and hold no reference to record or sink beyond the
//! call; the only failure they can report is the sink's own `io::Error`.

use std::io::{self, Write};

use crate::records::{CommandKind, ControlCommand, SteeringAngleSample, TargetSteeringAngleStatus};

/// Write a control command as `"command" : {"type" : "<KIND>" [, "value" : <v> ]}`.
///
/// The `"value"` field is emitted only for non-reset commands: a reset
/// carries no payload, and omitting the field avoids the misleading reading
/// that a reset has a target value. Floats use Rust's default `Display`
/// (shortest round-trip form).
pub fn write_control_command<W: Write>(command: &ControlCommand, sink: &mut W) -> io::Result<()> {
    write!(sink, "\"command\" : {{")?;
    write!(sink, "\"type\" : \"{}\" ", command.kind)?;
    if command.kind != CommandKind::Reset {
        write!(sink, ", \"value\" : {} ", command.value)?;
    }
    writeln!(sink, "}}")
}

/// Write a steering angle sample as `"angle_deci_degrees" : <N>`.
pub fn write_steering_angle<W: Write>(
    sample: &SteeringAngleSample,
    sink: &mut W,
) -> io::Result<()> {
    writeln!(sink, "\"angle_deci_degrees\" : {}", sample.angle_deci_degrees)
}

/// Write a target-angle status as `"is_set": <bool>[, "angle_degrees": <v>]`.
///
/// The `"angle_degrees"` field is emitted only when a target is set, same
/// omit-when-meaningless policy as [`write_control_command`]. Floats use
/// Rust's default `Display` (shortest round-trip form).
pub fn write_target_status<W: Write>(
    status: &TargetSteeringAngleStatus,
    sink: &mut W,
) -> io::Result<()> {
    write!(sink, "\"is_set\": {}", status.is_set)?;
    if status.is_set {
        write!(sink, ", \"angle_degrees\": {}", status.angle_degrees)?;
    }
    writeln!(sink)
}
