//! Float text shared by the stylish and plain renderers.

/// Magnitudes from here up are written in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this are written in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest round-trip text for `f`, in exponent form for very large or very
/// small magnitudes (`1e300`, `1.5e-7`).
pub(crate) fn render_float(f: f64) -> String {
    let magnitude = f.abs();
    if f.is_finite() && magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude)
    {
        format!("{:e}", f)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_magnitudes_are_positional() {
        assert_eq!(render_float(1.5), "1.5");
        assert_eq!(render_float(-0.25), "-0.25");
        assert_eq!(render_float(0.0), "0");
        assert_eq!(render_float(1e20), "100000000000000000000");
        assert_eq!(render_float(0.000001), "0.000001");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(render_float(1e300), "1e300");
        assert_eq!(render_float(-1e21), "-1e21");
        assert_eq!(render_float(1.5e-7), "1.5e-7");
        assert_eq!(render_float(f64::MIN_POSITIVE), "2.2250738585072014e-308");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(render_float(f64::NAN), "NaN");
        assert_eq!(render_float(f64::INFINITY), "inf");
        assert_eq!(render_float(f64::NEG_INFINITY), "-inf");
    }
}
