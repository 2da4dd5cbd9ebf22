use std::f32::consts::TAU;

/// Wrap an angle into [0, 2π).
///
/// Every accumulated angle in the simulation (orbital, rotational, pulse,
/// ray ring) passes through this each tick, so long sessions never build up
/// magnitudes that erode float precision.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the input is a tiny negative
    // number, due to rounding.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
