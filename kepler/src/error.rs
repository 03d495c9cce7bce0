#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum PropagationError {
    #[error("Kepler's equation did not converge within {iterations} iterations")]
    NonConvergent { iterations: usize },
    #[error("Sub-point latitude is undefined, z/r = {ratio}")]
    DomainError { ratio: f64 },
}
