//! The injected integer-LP solving capability. The optimizer builds a
//! [`MixProgram`] and hands it to any [`IntegerLpSolver`]; the shipping
//! backend wraps the `microlp` crate.

pub mod microlp;

pub use self::microlp::MicrolpSolver;

/// One decision variable: a non-negative integer quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityVar {
    /// Contribution of one unit to the maximization objective.
    pub objective_coeff: f64,
    /// Inclusive upper bound on the quantity.
    pub upper_bound: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessOrEqual,
    GreaterOrEqual,
}

/// One linear constraint over the decision variables: terms are
/// (variable index, coefficient) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub terms: Vec<(usize, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

/// A linear maximization program with integrality on all variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixProgram {
    pub variables: Vec<QuantityVar>,
    pub constraints: Vec<Constraint>,
}

impl MixProgram {
    /// Adds a variable and returns its index for use in constraint terms.
    pub fn add_variable(&mut self, objective_coeff: f64, upper_bound: u64) -> usize {
        self.variables.push(QuantityVar {
            objective_coeff,
            upper_bound,
        });
        self.variables.len() - 1
    }

    pub fn add_constraint(&mut self, terms: Vec<(usize, f64)>, relation: Relation, rhs: f64) {
        self.constraints.push(Constraint {
            terms,
            relation,
            rhs,
        });
    }
}

/// Definitive result of one solve. Anything the backend reports that is
/// neither optimal nor a proof of infeasibility collapses to `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Optimal {
        objective: f64,
        /// Solved quantity per variable, in variable order.
        quantities: Vec<u64>,
    },
    Infeasible,
    Error(String),
}

/// Contract for a mixed-integer solver backend: given a linear objective,
/// linear constraints, and integrality on every variable, return an optimal
/// assignment or a definitive infeasibility/error signal. Each call is
/// stateless and independent.
pub trait IntegerLpSolver {
    fn solve(&self, program: &MixProgram) -> SolveOutcome;
}
