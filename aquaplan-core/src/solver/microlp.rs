//! `microlp` backend: pure-Rust simplex with branch-and-bound integrality.

use microlp::{ComparisonOp, Error, LinearExpr, OptimizationDirection, Problem};

use super::{IntegerLpSolver, MixProgram, Relation, SolveOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl IntegerLpSolver for MicrolpSolver {
    fn solve(&self, program: &MixProgram) -> SolveOutcome {
        let mut problem = Problem::new(OptimizationDirection::Maximize);

        let vars: Vec<_> = program
            .variables
            .iter()
            .map(|var| {
                let upper = var.upper_bound.min(i32::MAX as u64) as i32;
                problem.add_integer_var(var.objective_coeff, (0, upper))
            })
            .collect();

        for constraint in &program.constraints {
            let mut expr = LinearExpr::empty();
            for &(index, coeff) in &constraint.terms {
                expr.add(vars[index], coeff);
            }
            let op = match constraint.relation {
                Relation::LessOrEqual => ComparisonOp::Le,
                Relation::GreaterOrEqual => ComparisonOp::Ge,
            };
            problem.add_constraint(expr, op, constraint.rhs);
        }

        match problem.solve() {
            Ok(solution) => {
                let quantities = vars
                    .iter()
                    .map(|&var| solution[var].round().max(0.0) as u64)
                    .collect();
                SolveOutcome::Optimal {
                    objective: solution.objective(),
                    quantities,
                }
            }
            Err(Error::Infeasible) => SolveOutcome::Infeasible,
            Err(other) => SolveOutcome::Error(other.to_string()),
        }
    }
}
