use crate::correlation::CorrelationModel;
use crate::error::RiskError;
use rust_decimal::Decimal;
use serde::Serialize;

/// A square covariance matrix indexed in selection order.
///
/// Only [`build_covariance`] and [`CovarianceMatrix::from_rows`] create one,
/// so the matrix is always square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CovarianceMatrix {
    rows: Vec<Vec<Decimal>>,
}

impl CovarianceMatrix {
    /// Wraps precomputed rows. Returns `None` unless the rows form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Decimal>>) -> Option<Self> {
        let n = rows.len();
        rows.iter().all(|row| row.len() == n).then_some(Self { rows })
    }

    /// Number of instruments covered.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Σ[i][j]. Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Decimal {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<Decimal>] {
        &self.rows
    }

    /// Computes wᵀΣw. `weights` must have `dim()` entries.
    pub fn quadratic_form(&self, weights: &[Decimal]) -> Decimal {
        self.rows
            .iter()
            .zip(weights)
            .map(|(row, &wi)| {
                let row_sum: Decimal = row.iter().zip(weights).map(|(&s, &wj)| s * wj).sum();
                wi * row_sum
            })
            .sum()
    }
}

/// Combines per-instrument standard deviations with the correlation model.
///
/// ```text
/// Σ[i][i] = σᵢ²
/// Σ[i][j] = ρ(nameᵢ, nameⱼ) · σᵢ · σⱼ
/// ```
///
/// # Errors
///
/// Returns [`RiskError::DimensionMismatch`] if `names` and `stds` differ in length.
pub fn build_covariance<S: AsRef<str>>(
    names: &[S],
    stds: &[Decimal],
    model: &CorrelationModel,
) -> Result<CovarianceMatrix, RiskError> {
    if names.len() != stds.len() {
        return Err(RiskError::DimensionMismatch {
            names: names.len(),
            stds: stds.len(),
        });
    }

    let rows = names
        .iter()
        .zip(stds)
        .enumerate()
        .map(|(i, (name_i, &std_i))| {
            names
                .iter()
                .zip(stds)
                .enumerate()
                .map(|(j, (name_j, &std_j))| {
                    if i == j {
                        std_i * std_i
                    } else {
                        model.correlation(name_i.as_ref(), name_j.as_ref()) * std_i * std_j
                    }
                })
                .collect()
        })
        .collect();

    Ok(CovarianceMatrix { rows })
}
