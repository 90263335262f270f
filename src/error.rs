//! Error types for shape construction.

use thiserror::Error;

/// Reasons a vertex list cannot become a [`Polygon`](crate::physics::polygon::Polygon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("polygon has no vertices")]
    Empty,
    #[error("polygon has {count} vertices, at most {max} are supported")]
    TooManyVertices { count: usize, max: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("coordinate arrays differ in length ({xs} x values, {ys} y values)")]
    MismatchedArrays { xs: usize, ys: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShapeError::TooManyVertices { count: 17, max: 16 };
        assert_eq!(
            err.to_string(),
            "polygon has 17 vertices, at most 16 are supported"
        );
        assert_eq!(ShapeError::Empty.to_string(), "polygon has no vertices");
    }
}
