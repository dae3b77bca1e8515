use crate::foundation::core::{Area, CONTAINER_EXTENT, EDGE_EPSILON};
use crate::foundation::error::{SubframeError, SubframeResult};

/// Relative tolerance on total covered area (percent of the container).
const COVERAGE_TOLERANCE: f64 = 0.01;

/// Check that `areas` tile the container: every area valid, ids unique, no pairwise interior
/// overlap and the summed area equal to the container within tolerance.
pub fn validate_tiling(areas: &[Area]) -> SubframeResult<()> {
    if areas.is_empty() {
        return Err(SubframeError::layout("layout has no areas"));
    }

    for (i, a) in areas.iter().enumerate() {
        a.validate()?;
        if areas[..i].iter().any(|b| b.id == a.id) {
            return Err(SubframeError::validation(format!(
                "duplicate area id '{}'",
                a.id
            )));
        }
    }

    for (i, a) in areas.iter().enumerate() {
        let ra = a.rect();
        for b in &areas[i + 1..] {
            let overlap = ra.intersect(b.rect());
            if overlap.width() > EDGE_EPSILON && overlap.height() > EDGE_EPSILON {
                return Err(SubframeError::layout(format!(
                    "areas '{}' and '{}' overlap",
                    a.id, b.id
                )));
            }
        }
    }

    let total: f64 = areas.iter().map(|a| a.rect().area()).sum();
    let container = CONTAINER_EXTENT * CONTAINER_EXTENT;
    if ((total - container) / container).abs() * 100.0 > COVERAGE_TOLERANCE {
        return Err(SubframeError::layout(format!(
            "areas cover {total:.3} of {container:.0} square percent"
        )));
    }
    Ok(())
}

/// `true` when [`validate_tiling`] succeeds.
pub fn is_valid_tiling(areas: &[Area]) -> bool {
    validate_tiling(areas).is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tiling.rs"]
mod tests;
