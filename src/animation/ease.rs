use std::collections::BTreeMap;

use crate::foundation::error::{SubframeError, SubframeResult};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-6;

/// Id of the identity curve every lookup falls back to.
pub const LINEAR_ID: &str = "linear";

/// Cubic-bezier timing curve with endpoints fixed at `(0,0)` and `(1,1)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasingCurve {
    pub id: String,
    pub name: String,
    pub p1x: f64,
    pub p1y: f64,
    pub p2x: f64,
    pub p2y: f64,
    #[serde(default)]
    pub built_in: bool,
}

impl EasingCurve {
    /// User curve (not built in).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        p1: (f64, f64),
        p2: (f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            p1x: p1.0,
            p1y: p1.1,
            p2x: p2.0,
            p2y: p2.1,
            built_in: false,
        }
    }

    fn builtin(id: &str, name: &str, p1: (f64, f64), p2: (f64, f64)) -> Self {
        Self {
            built_in: true,
            ..Self::new(id, name, p1, p2)
        }
    }

    pub fn linear() -> Self {
        Self::builtin(LINEAR_ID, "Linear", (0.0, 0.0), (1.0, 1.0))
    }

    /// Evaluate at progress `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_curve(self, x)
    }

    /// Control-point x values must stay in `[0,1]` so the curve is a function of x.
    pub fn validate(&self) -> SubframeResult<()> {
        let coords = [self.p1x, self.p1y, self.p2x, self.p2y];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(SubframeError::animation(format!(
                "curve '{}' has non-finite control points",
                self.id
            )));
        }
        if !(0.0..=1.0).contains(&self.p1x) || !(0.0..=1.0).contains(&self.p2x) {
            return Err(SubframeError::animation(format!(
                "curve '{}' control point x values must be in [0, 1]",
                self.id
            )));
        }
        Ok(())
    }
}

/// Evaluate `y` for `x` on the cubic bezier with control points `p1`, `p2`.
///
/// Solves `x(t) = x` by Newton-Raphson seeded at `t = x`, stopping after a fixed number of
/// iterations, on convergence, or when the derivative vanishes. The solved `t` is clamped to
/// `[0,1]` before `y(t)` is evaluated, so any input yields a finite result for finite control points.
pub fn evaluate_cubic_bezier(p1x: f64, p1y: f64, p2x: f64, p2y: f64, x: f64) -> f64 {
    if !x.is_finite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }
    let t = solve_t_for_x(p1x, p2x, x).clamp(0.0, 1.0);
    bezier_component(p1y, p2y, t)
}

/// Evaluate `curve` at `x`.
pub fn evaluate_curve(curve: &EasingCurve, x: f64) -> f64 {
    evaluate_cubic_bezier(curve.p1x, curve.p1y, curve.p2x, curve.p2y, x)
}

fn solve_t_for_x(p1x: f64, p2x: f64, x: f64) -> f64 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_component(p1x, p2x, t) - x;
        if err.abs() < NEWTON_EPSILON {
            break;
        }
        let d = bezier_derivative(p1x, p2x, t);
        if d.abs() < NEWTON_EPSILON {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }
    t
}

/// One coordinate of the bezier: `3(1-t)^2 t a + 3(1-t) t^2 b + t^3`.
#[inline]
fn bezier_component(a: f64, b: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * a + 3.0 * mt * t * t * b + t * t * t
}

#[inline]
fn bezier_derivative(a: f64, b: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * a + 6.0 * mt * t * (b - a) + 3.0 * t * t * (1.0 - b)
}

/// Curves keyed by id, seeded with the immutable built-ins.
///
/// Deserializing merges the stored user curves over the built-ins, so a project that only lists
/// its own curves still resolves `ease-in-out` and friends.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    into = "BTreeMap<String, EasingCurve>",
    try_from = "BTreeMap<String, EasingCurve>"
)]
pub struct CurveLibrary {
    curves: BTreeMap<String, EasingCurve>,
}

impl Default for CurveLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CurveLibrary {
    /// `linear`, `ease-in`, `ease-out`, `ease-in-out` and `cubic`.
    pub fn builtin() -> Self {
        let curves = [
            EasingCurve::linear(),
            EasingCurve::builtin("ease-in", "Ease In", (0.42, 0.0), (1.0, 1.0)),
            EasingCurve::builtin("ease-out", "Ease Out", (0.0, 0.0), (0.58, 1.0)),
            EasingCurve::builtin("ease-in-out", "Ease In Out", (0.42, 0.0), (0.58, 1.0)),
            EasingCurve::builtin("cubic", "Cubic", (0.65, 0.0), (0.35, 1.0)),
        ];
        Self {
            curves: curves.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Curve for `id`, falling back to `linear` (never fails).
    pub fn get(&self, id: &str) -> EasingCurve {
        self.curves
            .get(id)
            .or_else(|| self.curves.get(LINEAR_ID))
            .cloned()
            .unwrap_or_else(EasingCurve::linear)
    }

    /// Evaluate curve `id` (or `linear`) at `x`.
    pub fn evaluate(&self, id: Option<&str>, x: f64) -> f64 {
        match id.and_then(|id| self.curves.get(id)) {
            Some(curve) => curve.evaluate(x),
            None => self.get(LINEAR_ID).evaluate(x),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.curves.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EasingCurve> {
        self.curves.values()
    }

    /// Add or update a user curve. Built-ins cannot be replaced.
    pub fn insert(&mut self, mut curve: EasingCurve) -> SubframeResult<()> {
        curve.validate()?;
        if self.curves.get(&curve.id).is_some_and(|c| c.built_in) {
            return Err(SubframeError::animation(format!(
                "built-in curve '{}' is immutable",
                curve.id
            )));
        }
        curve.built_in = false;
        self.curves.insert(curve.id.clone(), curve);
        Ok(())
    }

    /// Delete a user curve, returning it.
    pub fn remove(&mut self, id: &str) -> SubframeResult<EasingCurve> {
        match self.curves.get(id) {
            None => Err(SubframeError::animation(format!("unknown curve '{id}'"))),
            Some(c) if c.built_in => Err(SubframeError::animation(format!(
                "built-in curve '{id}' cannot be deleted"
            ))),
            Some(_) => self
                .curves
                .remove(id)
                .ok_or_else(|| SubframeError::animation(format!("unknown curve '{id}'"))),
        }
    }
}

impl From<CurveLibrary> for BTreeMap<String, EasingCurve> {
    fn from(lib: CurveLibrary) -> Self {
        lib.curves
    }
}

impl TryFrom<BTreeMap<String, EasingCurve>> for CurveLibrary {
    type Error = SubframeError;

    fn try_from(stored: BTreeMap<String, EasingCurve>) -> Result<Self, Self::Error> {
        let mut lib = Self::builtin();
        for (id, mut curve) in stored {
            if lib.curves.get(&id).is_some_and(|c| c.built_in) {
                continue;
            }
            curve.id = id;
            lib.insert(curve)?;
        }
        Ok(lib)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
