/// Running trapezoidal integral of `values` over `times`.
///
/// The result has the same length as the inputs and is pinned to zero at the
/// first sample. Evaluation is strictly left to right so the output keeps
/// prefix-sum semantics.
pub fn cumulative_trapezoid(values: &[f64], times: &[f64]) -> Vec<f64> {
    assert_eq!(
        values.len(),
        times.len(),
        "integrand and time samples must have equal length"
    );

    let mut result = Vec::with_capacity(values.len());
    if values.is_empty() {
        return result;
    }

    result.push(0.0);
    let mut running = 0.0;
    for i in 1..values.len() {
        running += 0.5 * (values[i] + values[i - 1]) * (times[i] - times[i - 1]);
        result.push(running);
    }

    result
}
