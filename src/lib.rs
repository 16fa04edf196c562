//! Steerlog - JSON-fragment writers for vehicle steering telemetry
//!
//! Steerlog renders in-memory steering telemetry records (control commands,
//! measured steering angles, target-angle status) as single-line JSON object
//! fragments on a caller-supplied sink, one fragment per call, for
//! append-only event logs. The caller owns the sink and any enclosing JSON
//! framing; this crate only formats.

pub mod json;
pub mod records;

// Re-exports for convenience
pub use json::{write_control_command, write_steering_angle, write_target_status};
pub use records::{CommandKind, ControlCommand, SteeringAngleSample, TargetSteeringAngleStatus};
