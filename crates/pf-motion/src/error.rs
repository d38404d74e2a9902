use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("spline request has no points")]
    EmptySpline,

    #[error("spline velocity must be positive and finite, got {0}")]
    InvalidVelocity(f32),
}

pub type MotionResult<T> = Result<T, MotionError>;
