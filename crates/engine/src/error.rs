use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Core(#[from] core_types::CoreError),

    #[error("Risk model error: {0}")]
    Risk(#[from] risk::RiskError),

    #[error("Optimizer error: {0}")]
    Optimizer(#[from] optimizer::OptimizerError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}
