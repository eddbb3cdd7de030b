use crate::error::MotionError;
use smallvec::SmallVec;

/// Clamped linear remap of `value` from the `from` range onto the `to` range.
///
/// A degenerate `from` range (zero width, or non-finite bounds) yields the
/// midpoint of `to` rather than dividing by zero.
#[inline]
pub fn remap(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if !span.is_finite() || span.abs() < f32::EPSILON || !value.is_finite() {
        return (to.0 + to.1) * 0.5;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Piecewise-linear curve over progress, defined by `(input, output)` breakpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    pub(crate) points: SmallVec<[(f32, f32); 4]>,
}

impl Keyframes {
    pub fn new(points: &[(f32, f32)]) -> Result<Self, MotionError> {
        if points.is_empty() {
            return Err(MotionError::EmptyKeyframes);
        }
        for (i, &(input, output)) in points.iter().enumerate() {
            if !input.is_finite() {
                return Err(MotionError::UnorderedKeyframes { index: i });
            }
            if !output.is_finite() {
                return Err(MotionError::NonFiniteOutput { index: i });
            }
            if i > 0 && input <= points[i - 1].0 {
                return Err(MotionError::UnorderedKeyframes { index: i });
            }
        }
        Ok(Self {
            points: points.iter().copied().collect(),
        })
    }

    /// Two-point shorthand: `inputs[0] -> outputs[0]`, `inputs[1] -> outputs[1]`.
    pub fn linear(inputs: [f32; 2], outputs: [f32; 2]) -> Result<Self, MotionError> {
        Self::new(&[(inputs[0], outputs[0]), (inputs[1], outputs[1])])
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Interpolate at `progress`, clamping to the end values outside the
    /// breakpoint range.
    pub fn sample(&self, progress: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if !progress.is_finite() || progress <= first.0 {
            return first.1;
        }
        if progress >= last.0 {
            return last.1;
        }
        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if progress == x1 {
                return y1;
            }
            if progress < x1 {
                let t = (progress - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last.1
    }
}
