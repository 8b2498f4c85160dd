use std::fmt;

/// Primitive kinds accepted by the tessellator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Capsule,
    Rectangle,
    Triangle,
    Arc,
    Bezier,
}

impl ShapeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Capsule => "capsule",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Arc => "arc",
            ShapeKind::Bezier => "bezier",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by shape calls.
///
/// A failed call leaves the frame buffer exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TessError {
    /// The call would push the frame buffer past its fixed capacity.
    #[error(
        "{shape} needs {requested} vertices but only {available} of {capacity} remain in the frame buffer"
    )]
    CapacityExceeded {
        shape: ShapeKind,
        requested: usize,
        available: usize,
        capacity: usize,
    },

    /// A parameter was NaN or infinite.
    #[error("{shape} received a non-finite parameter")]
    NonFiniteInput { shape: ShapeKind },
}

impl TessError {
    #[inline]
    pub fn shape(&self) -> ShapeKind {
        match self {
            TessError::CapacityExceeded { shape, .. } | TessError::NonFiniteInput { shape } => {
                *shape
            }
        }
    }

    #[inline]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, TessError::CapacityExceeded { .. })
    }
}

/// Rejects the call when any scalar parameter is NaN or infinite.
#[inline]
pub(crate) fn ensure_finite(shape: ShapeKind, values: &[f32]) -> Result<(), TessError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(TessError::NonFiniteInput { shape })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_shape_and_budget() {
        let err = TessError::CapacityExceeded {
            shape: ShapeKind::Circle,
            requested: 48,
            available: 21,
            capacity: 5461,
        };
        assert_eq!(
            err.to_string(),
            "circle needs 48 vertices but only 21 of 5461 remain in the frame buffer"
        );
        assert!(err.is_capacity_exceeded());
    }

    #[test]
    fn ensure_finite_rejects_nan_and_inf() {
        assert!(ensure_finite(ShapeKind::Arc, &[0.0, 1.0, -3.0]).is_ok());
        assert_eq!(
            ensure_finite(ShapeKind::Arc, &[0.0, f32::NAN]),
            Err(TessError::NonFiniteInput { shape: ShapeKind::Arc })
        );
        assert!(ensure_finite(ShapeKind::Arc, &[f32::INFINITY]).is_err());
    }
}
