//! # Pivot rules
//!
//! Strategies for moving from basis to basis, whether primal or dual.
use num_traits::Float;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// currently made independent of the strategy, as is the choice of the entering column for a dual
/// pivot.
pub trait PivotRule<F: Float> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `relative_costs`: Tuples `(j, δ_j)` for all non-basic columns `j`, ascending in `j`.
    /// * `tolerance`: A relative cost is only negative if it is smaller than minus this value.
    ///
    /// # Return value
    ///
    /// A column with a negative relative cost, if there is one, together with that cost.
    fn select_primal_pivot_column(
        &mut self,
        relative_costs: &[(usize, F)],
        tolerance: F,
    ) -> Option<(usize, F)>;

    /// Row selection for the primal Simplex method, given the column that enters.
    ///
    /// # Arguments
    ///
    /// * `ratios`: For each basis position, the ratio `x_{B_i} / z_i` if `z_i` is positive, `None`
    /// otherwise.
    ///
    /// # Return value
    ///
    /// The first position attaining the minimum ratio, or `None` if no ratio is finite, in which
    /// case the problem is unbounded.
    fn select_primal_pivot_row(&mut self, ratios: &[Option<F>]) -> Option<usize> {
        first_minimum(ratios.iter().enumerate().filter_map(|(i, ratio)| ratio.map(|ratio| (i, ratio))))
    }

    /// Leaving variable selection for the dual Simplex method.
    ///
    /// # Arguments
    ///
    /// * `kappa`: Basic solution, zero outside of the basis.
    /// * `tolerance`: A value is only negative if it is smaller than minus this value.
    ///
    /// # Return value
    ///
    /// The lowest column index with a negative value, if there is one.
    fn select_dual_pivot_row(&mut self, kappa: &[F], tolerance: F) -> Option<usize> {
        kappa.iter().position(|&value| value < -tolerance)
    }

    /// Entering variable selection for the dual Simplex method.
    ///
    /// # Arguments
    ///
    /// * `ratios`: Tuples `(j, σ_j)` for the eligible non-basic columns, ascending in `j`.
    ///
    /// # Return value
    ///
    /// The column with the smallest ratio over all candidates; the lowest index in case of ties.
    fn select_dual_pivot_column(&mut self, ratios: &[(usize, F)]) -> Option<usize> {
        first_minimum(ratios.iter().copied())
    }
}

/// Key of the first element with the smallest value.
fn first_minimum<F: PartialOrd>(values: impl Iterator<Item = (usize, F)>) -> Option<usize> {
    let mut smallest: Option<(usize, F)> = None;
    for (j, value) in values {
        if smallest.as_ref().is_none_or(|(_, existing)| value < *existing) {
            smallest = Some((j, value));
        }
    }

    smallest.map(|(j, _)| j)
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl<F: Float> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(
        &mut self,
        relative_costs: &[(usize, F)],
        tolerance: F,
    ) -> Option<(usize, F)> {
        relative_costs.iter()
            .find(|&&(_, cost)| cost < -tolerance)
            .copied()
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
pub struct SteepestDescentAlongVariable;
impl<F: Float> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(
        &mut self,
        relative_costs: &[(usize, F)],
        tolerance: F,
    ) -> Option<(usize, F)> {
        let mut smallest = None;
        for &(j, cost) in relative_costs.iter().filter(|&&(_, cost)| cost < -tolerance) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest
    }

    /// The column with the most negative value, the lowest index in case of ties.
    fn select_dual_pivot_row(&mut self, kappa: &[F], tolerance: F) -> Option<usize> {
        first_minimum(kappa.iter().copied().enumerate().filter(|&(_, value)| value < -tolerance))
    }
}
