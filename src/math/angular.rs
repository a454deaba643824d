/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by u16 type, but passing a negative value for
/// seconds leads to undefined behaviour.
///
/// A negative angle of less than one degree cannot be expressed this way, since
/// the sign lives in the degree component. Use [`signed_dms_to_dd`] for those.
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    let sign = if d < 0 { -1. } else { 1. };
    sign * (d.unsigned_abs() as f64 + (m as f64 + s / 60.) / 60.)
}

/// Degrees, minutes and seconds-with-decimals to degrees-with-decimals,
/// with the sign given separately.
pub fn signed_dms_to_dd(negative: bool, d: u16, m: u16, s: f64) -> f64 {
    let dd = d as f64 + (m as f64 + s / 60.) / 60.;
    if negative {
        -dd
    } else {
        dd
    }
}

/// Degrees-with-decimals to (sign, degrees, minutes, seconds-with-decimals)
pub fn dd_to_dms(dd: f64) -> (bool, u16, u16, f64) {
    let negative = dd.is_sign_negative();
    let dd = dd.abs();
    let d = dd.floor();
    let mm = (dd - d) * 60.;
    let m = mm.floor();
    let s = (mm - m) * 60.;
    (negative, d as u16, m as u16, s)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular() {
        assert_eq!(dms_to_dd(55, 30, 36.), 55.51);
        assert_eq!(dms_to_dd(-55, 30, 36.), -55.51);
        assert_eq!(dms_to_dd(0, 30, 0.), 0.5);

        // The sign can't live in a zero degree component
        assert_eq!(signed_dms_to_dd(true, 0, 30, 0.), -0.5);
        assert_eq!(signed_dms_to_dd(false, 55, 30, 36.), 55.51);

        let (negative, d, m, s) = dd_to_dms(-1.5025);
        assert!(negative);
        assert_eq!((d, m), (1, 30));
        assert!((s - 9.).abs() < 1e-9);
        assert!((signed_dms_to_dd(negative, d, m, s) + 1.5025).abs() < 1e-12);
    }
}
