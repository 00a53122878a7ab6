pub fn assert_eq_approx(a: f64, b: f64, tolerance: f64) {
    if !((a - b).abs() <= tolerance) {
        panic!(
            "assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`",
            a, b
        );
    }
}

/// Asserts that `a` and `b` agree within a relative error of `rel`.
/// NaN matches NaN and equal infinities match each other.
pub fn assert_eq_relative(a: f64, b: f64, rel: f64) {
    if a.is_nan() && b.is_nan() {
        return;
    }
    if a.is_infinite() || b.is_infinite() {
        if a != b {
            panic!(
                "assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                a, b
            );
        }
        return;
    }

    let scale = a.abs().max(b.abs());
    if (a - b).abs() > rel * scale {
        panic!(
            "assertion failed: `(left ~= right)` (relative {})\n  left: `{:?}`,\n right: `{:?}`",
            rel, a, b
        );
    }
}
