//! Imputation and core vertices
//!
//! Imputation vertices are closed form. Core vertices come from one LP solve
//! per maximization objective over the polytope
//!
//! ```text
//! Σ_i x_i = v(N)
//! Σ_{i∈S} x_i ≥ v(S)          for every intermediate coalition S
//! lb_i ≤ x_i ≤ ub_i           tightened bounds, see core_vertex_bounds
//! ```
//!
//! The solves share nothing but the immutable program, so they run in
//! parallel via Rayon. Vertices are rounded to integers, sorted and
//! deduplicated, which makes the result independent of solve order.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::{GameError, Result};
use crate::game::CooperativeGame;
use crate::lp::{LinearProgram, LpSolver};

/// Remainders within this distance of zero select the direct-corner objective.
pub const REMAINDER_TOLERANCE: f64 = 1e-9;

/// Vertices of the imputation simplex.
///
/// Vertex i puts player i at its upper bound v(N) - Σ_{j≠i} v({j}) and every
/// other player at v({j}).
pub fn imputation_vertices<G: CooperativeGame + ?Sized>(game: &G) -> Vec<Vec<f64>> {
    if game.player_count() == 1 {
        return vec![vec![game.grand_value()]];
    }
    let bounds = game.imputation_bounds();
    let vertices = (0..bounds.len())
        .map(|i| {
            bounds
                .iter()
                .enumerate()
                .map(|(j, &(lb, ub))| if i == j { ub } else { lb })
                .collect()
        })
        .collect();
    sorted_unique(vertices)
}

/// Per-player `(lb, ub)` for the core polytope.
///
/// `ub_i = min(v(N) - Σ_{j≠i} v({j}), M_i)` and
/// `lb_i = max(v({i}), v(N) - Σ_{j≠i} ub_j)`.
pub fn core_vertex_bounds<G: CooperativeGame + ?Sized>(game: &G) -> Vec<(f64, f64)> {
    let imputation = game.imputation_bounds();
    let utopia = game.utopia_payoff_vector();
    let upper: Vec<f64> = imputation
        .iter()
        .zip(&utopia)
        .map(|(&(_, ub), &m)| ub.min(m))
        .collect();
    let v_n = game.grand_value();

    imputation
        .iter()
        .enumerate()
        .map(|(i, &(single, _))| {
            let others: f64 = sum_except(&upper, i);
            (single.max(v_n - others), upper[i])
        })
        .collect()
}

/// The LP objectives (minimize convention) whose optima are the core vertices.
///
/// For each player i, `remainder = v(N) - ub_i - Σ_{j≠i} lb_j`:
///
/// | remainder        | objectives                                              |
/// |------------------|---------------------------------------------------------|
/// | ≈ 0              | `-e_i`: push i to its upper bound, the rest is forced    |
/// | otherwise        | one per k ≠ i: `c_i = -2`, `c_k = 0`, every other `-1`   |
///
/// The second row maximizes x_i first and then, since the total is fixed,
/// pushes everything except x_k up, which drives x_k to its lowest value.
pub fn maximization_objectives<G: CooperativeGame + ?Sized>(
    game: &G,
    bounds: &[(f64, f64)],
) -> Vec<Vec<f64>> {
    let n = bounds.len();
    let v_n = game.grand_value();
    let lower: Vec<f64> = bounds.iter().map(|&(lb, _)| lb).collect();

    let mut objectives = Vec::new();
    for i in 0..n {
        let remainder = v_n - bounds[i].1 - sum_except(&lower, i);
        if remainder.abs() <= REMAINDER_TOLERANCE {
            let mut c = vec![0.0; n];
            c[i] = -1.0;
            objectives.push(c);
        } else {
            for k in (0..n).filter(|&k| k != i) {
                let mut c = vec![-1.0; n];
                c[i] = -2.0;
                c[k] = 0.0;
                objectives.push(c);
            }
        }
    }
    objectives
}

/// The core polytope as a linear program with a zero objective.
pub fn core_program<G: CooperativeGame + ?Sized>(
    game: &G,
    bounds: Vec<(f64, f64)>,
) -> LinearProgram {
    let n = game.player_count();
    let mut program = LinearProgram::new(vec![0.0; n], bounds);
    program.equal(vec![1.0; n], game.grand_value());
    for &coalition in game.coalitions().intermediate() {
        let row = (1..=n)
            .map(|p| if coalition.contains(p) { 1.0 } else { 0.0 })
            .collect();
        program.at_least(row, game.value(coalition));
    }
    program
}

/// Integer vertices of the core, sorted lexicographically.
///
/// An empty core (crossed bounds or an infeasible program) yields no vertices.
pub fn core_vertices<G, S>(game: &G, solver: &S) -> Result<Vec<Vec<f64>>>
where
    G: CooperativeGame + Sync + ?Sized,
    S: LpSolver + Sync + ?Sized,
{
    if game.player_count() == 1 {
        return Ok(vec![vec![game.grand_value()]]);
    }

    let bounds = core_vertex_bounds(game);
    if bounds.iter().any(|&(lb, ub)| lb > ub) {
        return Ok(Vec::new());
    }
    let objectives = maximization_objectives(game, &bounds);
    let program = core_program(game, bounds);

    let solved: Result<Vec<Vec<f64>>> = objectives
        .into_par_iter()
        .map(|objective| solver.minimize(&program.with_objective(objective)))
        .collect();

    match solved {
        Ok(points) => Ok(sorted_unique(
            points
                .into_iter()
                .map(|x| x.into_iter().map(|xi| xi.round() + 0.0).collect())
                .collect(),
        )),
        Err(GameError::Infeasible) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

fn sum_except(values: &[f64], skip: usize) -> f64 {
    values
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != skip)
        .map(|(_, v)| v)
        .sum()
}

fn lexicographic(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

fn sorted_unique(mut vertices: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    vertices.sort_by(|a, b| lexicographic(a, b));
    vertices.dedup();
    vertices
}
