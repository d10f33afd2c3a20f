//! Linear programming seam
//!
//! The core-vertex computation only needs a dense "minimize c·x subject to
//! equalities, upper inequalities and variable bounds" primitive. It is
//! expressed as the [`LpSolver`] trait so the backend can be swapped; the
//! default [`SimplexSolver`] delegates to `minilp`.

use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::error::{GameError, Result};

/// One dense constraint row `coefficients · x (op) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub rhs: f64,
}

/// `minimize objective · x` s.t. `A_eq x = b_eq`, `A_ub x ≤ b_ub`, `lb ≤ x ≤ ub`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub objective: Vec<f64>,
    pub equalities: Vec<Constraint>,
    pub upper_inequalities: Vec<Constraint>,
    pub bounds: Vec<(f64, f64)>,
}

impl LinearProgram {
    /// A program over `bounds.len()` variables with no constraints yet.
    pub fn new(objective: Vec<f64>, bounds: Vec<(f64, f64)>) -> Self {
        debug_assert_eq!(objective.len(), bounds.len());
        LinearProgram {
            objective,
            equalities: Vec::new(),
            upper_inequalities: Vec::new(),
            bounds,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.bounds.len()
    }

    /// Add `coefficients · x = rhs`.
    pub fn equal(&mut self, coefficients: Vec<f64>, rhs: f64) -> &mut Self {
        self.equalities.push(Constraint { coefficients, rhs });
        self
    }

    /// Add `coefficients · x ≤ rhs`.
    pub fn at_most(&mut self, coefficients: Vec<f64>, rhs: f64) -> &mut Self {
        self.upper_inequalities.push(Constraint { coefficients, rhs });
        self
    }

    /// Add `coefficients · x ≥ rhs`, stored negated as an upper inequality.
    pub fn at_least(&mut self, coefficients: Vec<f64>, rhs: f64) -> &mut Self {
        let negated = coefficients.into_iter().map(|a| -a).collect();
        self.at_most(negated, -rhs)
    }

    /// Same constraints, different objective.
    pub fn with_objective(&self, objective: Vec<f64>) -> Self {
        LinearProgram { objective, ..self.clone() }
    }
}

/// A backend able to minimize a [`LinearProgram`].
pub trait LpSolver {
    /// Optimal point, [`GameError::Infeasible`] or [`GameError::Unbounded`].
    fn minimize(&self, program: &LinearProgram) -> Result<Vec<f64>>;
}

/// Dense simplex backed by `minilp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexSolver;

impl LpSolver for SimplexSolver {
    fn minimize(&self, program: &LinearProgram) -> Result<Vec<f64>> {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<_> = program
            .objective
            .iter()
            .zip(&program.bounds)
            .map(|(&c, &bounds)| problem.add_var(c, bounds))
            .collect();

        let row = |constraint: &Constraint| {
            let mut expr = LinearExpr::empty();
            for (&var, &a) in vars.iter().zip(&constraint.coefficients) {
                if a != 0.0 {
                    expr.add(var, a);
                }
            }
            expr
        };
        for constraint in &program.equalities {
            problem.add_constraint(row(constraint), ComparisonOp::Eq, constraint.rhs);
        }
        for constraint in &program.upper_inequalities {
            problem.add_constraint(row(constraint), ComparisonOp::Le, constraint.rhs);
        }

        let solution = problem.solve().map_err(|e| match e {
            minilp::Error::Unbounded => GameError::Unbounded,
            _ => GameError::Infeasible,
        })?;
        Ok(vars.iter().map(|&var| solution[var]).collect())
    }
}
