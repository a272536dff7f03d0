use crate::validate::Violation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {}", join_violations(.0))]
    InvalidInput(Vec<Violation>),
    #[error("Encoding error: {0}")]
    Encode(String),
}

impl PlannerError {
    /// Violations carried by an `InvalidInput` error; empty for other variants.
    pub fn violations(&self) -> &[Violation] {
        match self {
            PlannerError::InvalidInput(v) => v,
            PlannerError::Encode(_) => &[],
        }
    }
}

fn join_violations(v: &[Violation]) -> String {
    v.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, PlannerError>;
