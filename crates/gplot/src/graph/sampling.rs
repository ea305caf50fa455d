//! Sample domains for function graphs.
use crate::error::{Error, Result};
use crate::graph::axis::AxisOption;

/// Lower bound of the default sampling interval.
pub const DEFAULT_LOWER: f64 = -5.0;
/// Upper bound of the default sampling interval.
pub const DEFAULT_UPPER: f64 = 5.0;
/// Spacing of the default sampling grid.
pub const DEFAULT_STEP: f64 = 0.05;

/// Most samples a single function graph may produce, across all of its axes.
pub const MAX_SAMPLES: usize = 1_000_000;

const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
enum Grid {
    Uniform { lower: f64, step: f64, count: usize },
    Values(Vec<f64>),
}

/// The set of abscissae a function is evaluated at along one axis.
///
/// A domain is only built through validating constructors, so every domain is
/// finite, non-empty, and holds at most [`MAX_SAMPLES`] points.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain(Grid);

impl Default for Domain {
    fn default() -> Self {
        Domain(Grid::Uniform {
            lower: DEFAULT_LOWER,
            step: DEFAULT_STEP,
            count: 201,
        })
    }
}

impl Domain {
    /// Closed interval `[lower, upper]` stepped by `step`.
    pub fn uniform(axis: char, lower: f64, upper: f64, step: f64) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidAxis { axis, reason };
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(invalid(format!("range [{lower}, {upper}] is not ordered")));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(invalid(format!("step {step} must be positive")));
        }
        let last = ((upper - lower) / step + STEP_TOLERANCE).floor();
        if !last.is_finite() || last >= MAX_SAMPLES as f64 {
            return Err(invalid(format!(
                "range [{lower}, {upper}] with step {step} exceeds {MAX_SAMPLES} samples"
            )));
        }
        Ok(Domain(Grid::Uniform {
            lower,
            step,
            count: last as usize + 1,
        }))
    }

    /// Explicit sample points, used in the given order.
    pub fn values(axis: char, values: Vec<f64>) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidAxis { axis, reason };
        if values.is_empty() {
            return Err(invalid("explicit sample list is empty".into()));
        }
        if values.len() > MAX_SAMPLES {
            return Err(invalid(format!(
                "{} explicit samples exceed {MAX_SAMPLES}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(invalid(format!("sample value {bad} is not finite")));
        }
        Ok(Domain(Grid::Values(values)))
    }

    /// Resolve a domain from one axis' options.
    ///
    /// The first `Range` and first `Step` replace the default bounds and spacing;
    /// the first `Values` replaces the grid entirely. Later options of a form
    /// already seen are ignored.
    pub fn from_axis_options<'a, I>(axis: char, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a AxisOption>,
    {
        let mut range = None;
        let mut step = None;
        let mut values = None;
        for option in options {
            match option {
                AxisOption::Range(lo, hi) => {
                    range.get_or_insert((*lo, *hi));
                }
                AxisOption::Step(s) => {
                    step.get_or_insert(*s);
                }
                AxisOption::Values(v) => {
                    values.get_or_insert(v);
                }
            }
        }

        if let Some(values) = values {
            return Self::values(axis, values.clone());
        }
        let (lower, upper) = range.unwrap_or((DEFAULT_LOWER, DEFAULT_UPPER));
        Self::uniform(axis, lower, upper, step.unwrap_or(DEFAULT_STEP))
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        match &self.0 {
            Grid::Uniform { count, .. } => *count,
            Grid::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample points along the axis.
    ///
    /// Uniform points are computed as `lower + i * step` so rounding error does not
    /// accumulate across the interval.
    pub fn points(&self) -> Vec<f64> {
        match &self.0 {
            Grid::Uniform { lower, step, count } => {
                (0..*count).map(|i| lower + i as f64 * step).collect()
            }
            Grid::Values(values) => values.clone(),
        }
    }
}

/// Evaluate `f` at every point of `domain`, yielding `[x, f(x)]` rows.
pub fn sample_2d(domain: &Domain, f: &dyn Fn(f64) -> f64) -> Vec<[f64; 2]> {
    domain.points().into_iter().map(|x| [x, f(x)]).collect()
}

/// Evaluate `f` over the Cartesian product of two domains, x outer and y inner.
///
/// Fails with [`Error::InvalidAxis`] when the product exceeds [`MAX_SAMPLES`].
pub fn sample_3d(
    x: &Domain,
    y: &Domain,
    f: &dyn Fn(f64, f64) -> f64,
) -> Result<Vec<[f64; 3]>> {
    let total = x.len().saturating_mul(y.len());
    if total > MAX_SAMPLES {
        return Err(Error::InvalidAxis {
            axis: 'y',
            reason: format!(
                "{} x {} grid exceeds {MAX_SAMPLES} samples",
                x.len(),
                y.len()
            ),
        });
    }
    let xs = x.points();
    let ys = y.points();
    let mut rows = Vec::with_capacity(total);
    for &xv in &xs {
        for &yv in &ys {
            rows.push([xv, yv, f(xv, yv)]);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_domain_has_201_points() {
        let points = Domain::default().points();
        assert_eq!(points.len(), 201);
        assert_eq!(Domain::default(), Domain::from_axis_options('x', std::iter::empty()).unwrap());
        assert_eq!(points[0], -5.0);
        assert!((points[200] - 5.0).abs() < 1e-12);
        assert!((points[1] - -4.95).abs() < 1e-12);
    }

    #[test]
    fn uneven_step_stops_inside_range() {
        let domain = Domain::uniform('x', 0.0, 1.0, 0.4).unwrap();
        let points = domain.points();
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| *p <= 1.0));
    }

    #[test]
    fn axis_options_override_defaults_first_wins() {
        let opts = [
            AxisOption::Range(0.0, 2.0),
            AxisOption::Step(0.5),
            AxisOption::Range(-100.0, 100.0),
        ];
        let domain = Domain::from_axis_options('x', &opts).unwrap();
        assert_eq!(domain.points(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn explicit_values_take_precedence() {
        let opts = [
            AxisOption::Step(0.1),
            AxisOption::Values(vec![3.0, 1.0, 2.0]),
        ];
        let domain = Domain::from_axis_options('x', &opts).unwrap();
        assert_eq!(domain.points(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn invalid_axis_options_fail_fast() {
        let cases = [
            vec![AxisOption::Range(1.0, 0.0)],
            vec![AxisOption::Step(0.0)],
            vec![AxisOption::Step(f64::NAN)],
            vec![AxisOption::Values(vec![])],
            vec![AxisOption::Values(vec![1.0, f64::INFINITY])],
        ];
        for opts in cases {
            let err = Domain::from_axis_options('y', &opts).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAxis { axis: 'y', .. }),
                "{opts:?} should be rejected"
            );
        }
    }

    #[test]
    fn sample_3d_iterates_x_outer() {
        let x = Domain::values('x', vec![0.0, 1.0]).unwrap();
        let y = Domain::values('y', vec![10.0, 20.0]).unwrap();
        let rows = sample_3d(&x, &y, &|a, b| a + b).unwrap();
        assert_eq!(
            rows,
            vec![
                [0.0, 10.0, 10.0],
                [0.0, 20.0, 20.0],
                [1.0, 10.0, 11.0],
                [1.0, 20.0, 21.0],
            ]
        );
    }

    #[test]
    fn oversized_grids_are_rejected() {
        let opts = [AxisOption::Range(-1e300, 1e300), AxisOption::Step(1.0)];
        let err = Domain::from_axis_options('x', &opts).unwrap_err();
        assert!(matches!(err, Error::InvalidAxis { axis: 'x', .. }));

        let overflow = [AxisOption::Range(-f64::MAX, f64::MAX)];
        assert!(Domain::from_axis_options('x', &overflow).is_err());

        assert!(Domain::uniform('x', 0.0, 1.0, 0.0).is_err());
        assert_eq!(
            Domain::uniform('x', 0.0, (MAX_SAMPLES - 1) as f64, 1.0)
                .unwrap()
                .len(),
            MAX_SAMPLES
        );
        assert!(Domain::uniform('x', 0.0, MAX_SAMPLES as f64, 1.0).is_err());

        let wide = Domain::uniform('x', 0.0, 9_999.0, 1.0).unwrap();
        let err = sample_3d(&wide, &wide, &|_, _| unreachable!()).unwrap_err();
        assert!(matches!(err, Error::InvalidAxis { .. }));
    }
}
