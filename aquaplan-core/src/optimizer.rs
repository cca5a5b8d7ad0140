//! The mix optimizer: picks integer stocking quantities across the whole
//! catalogue at once, maximizing total profit while the species compete for
//! the same capital and the same water.
//!
//! Solving is delegated to an injected [`IntegerLpSolver`]; this module only
//! formulates the program and interprets the assignment.

use aquaplan_schemas::{
    outcome::{MixAllocation, MixItem},
    production::ProductionSystem,
    species::SpeciesProfile,
};

use crate::costing::CostModel;
use crate::solver::{IntegerLpSolver, MixProgram, Relation, SolveOutcome};

/// Per-species coefficients entering the program. Unlike the monoculture
/// simulator, the budget here is the full capital: the fixed cost is shared
/// by the whole mix rather than charged to each species.
#[derive(Debug, Clone)]
struct MixCandidate {
    name: String,
    unit_profit: f64,
    unit_variable_cost: f64,
    final_weight_kg: f64,
    cycle_months: f64,
    physical_max_count: u64,
}

fn build_candidates(catalogue: &[SpeciesProfile], system: &ProductionSystem) -> Vec<MixCandidate> {
    catalogue
        .iter()
        .filter_map(|species| {
            let model = CostModel::derive(species, system);
            // Degenerate density ceiling: the species cannot enter the mix.
            if model.physical_max_count == 0 {
                return None;
            }
            // Full-cycle fixed cost spread over this species' own capacity.
            // A ranking approximation carried over from the source model,
            // not an accounting identity across the chosen mix.
            let allocated_fixed_cost_per_unit = (system.monthly_fixed_cost
                * species.cycle_duration_months)
                / model.physical_max_count as f64;
            Some(MixCandidate {
                name: species.name.clone(),
                unit_profit: model.unit_revenue
                    - model.variable_cost_per_fish
                    - allocated_fixed_cost_per_unit,
                unit_variable_cost: model.variable_cost_per_fish,
                final_weight_kg: species.target_final_weight_kg,
                cycle_months: species.cycle_duration_months,
                physical_max_count: model.physical_max_count,
            })
        })
        .collect()
}

/// Formulates and solves the mix program: maximize total profit subject to
/// the shared budget, the shared tank space (occupancy shares summing to at
/// most 1), and an optional minimum production target in kilograms
/// (`minimum_target_kg` of 0 means no minimum).
pub fn optimize_mix(
    catalogue: &[SpeciesProfile],
    system: &ProductionSystem,
    minimum_target_kg: f64,
    solver: &dyn IntegerLpSolver,
) -> MixAllocation {
    let candidates = build_candidates(catalogue, system);
    if candidates.is_empty() {
        if minimum_target_kg > 0.0 {
            return MixAllocation::Infeasible;
        }
        return MixAllocation::Optimal {
            items: Vec::new(),
            total_profit: 0.0,
            total_biomass_kg: 0.0,
            payback_months: 0.0,
        };
    }

    let mut program = MixProgram::default();
    let vars: Vec<usize> = candidates
        .iter()
        .map(|c| program.add_variable(c.unit_profit, c.physical_max_count))
        .collect();

    // Budget: no more spent on animals and feed than the capital at hand.
    program.add_constraint(
        vars.iter()
            .zip(&candidates)
            .map(|(&v, c)| (v, c.unit_variable_cost))
            .collect(),
        Relation::LessOrEqual,
        system.capital,
    );

    // Space: each species occupies a fraction of the pooled volume
    // proportional to its own density ceiling; the shares sum to at most 1.
    program.add_constraint(
        vars.iter()
            .zip(&candidates)
            .map(|(&v, c)| (v, 1.0 / c.physical_max_count as f64))
            .collect(),
        Relation::LessOrEqual,
        1.0,
    );

    if minimum_target_kg > 0.0 {
        program.add_constraint(
            vars.iter()
                .zip(&candidates)
                .map(|(&v, c)| (v, c.final_weight_kg))
                .collect(),
            Relation::GreaterOrEqual,
            minimum_target_kg,
        );
    }

    match solver.solve(&program) {
        SolveOutcome::Optimal {
            objective,
            quantities,
        } => interpret(&candidates, system, objective, &quantities),
        SolveOutcome::Infeasible => MixAllocation::Infeasible,
        SolveOutcome::Error(detail) => MixAllocation::Error { detail },
    }
}

fn interpret(
    candidates: &[MixCandidate],
    system: &ProductionSystem,
    total_profit: f64,
    quantities: &[u64],
) -> MixAllocation {
    let mut items = Vec::new();
    let mut total_biomass_kg = 0.0;
    let mut total_variable_cost = 0.0;
    let mut max_cycle = 0.0_f64;

    for (candidate, &quantity) in candidates.iter().zip(quantities) {
        if quantity == 0 {
            continue;
        }
        let biomass_kg = quantity as f64 * candidate.final_weight_kg;
        let variable_cost = quantity as f64 * candidate.unit_variable_cost;
        total_biomass_kg += biomass_kg;
        total_variable_cost += variable_cost;
        max_cycle = max_cycle.max(candidate.cycle_months);

        items.push(MixItem {
            species: candidate.name.clone(),
            quantity,
            biomass_kg,
            variable_cost,
            cycle_months: candidate.cycle_months,
            occupancy_percent: quantity as f64 / candidate.physical_max_count as f64 * 100.0,
        });
    }

    // The mix runs as long as its slowest species; fixed cost accrues for
    // that whole span.
    let mix_cycle_cost = total_variable_cost + system.monthly_fixed_cost * max_cycle;
    let monthly_profit = if max_cycle > 0.0 {
        total_profit / max_cycle
    } else {
        0.0
    };
    let payback_months = if monthly_profit > 0.0 {
        mix_cycle_cost / monthly_profit
    } else {
        0.0
    };

    MixAllocation::Optimal {
        items,
        total_profit,
        total_biomass_kg,
        payback_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MicrolpSolver;
    use aquaplan_schemas::production::TechnologyLevel;

    fn species(name: &str, price: f64) -> SpeciesProfile {
        SpeciesProfile {
            name: name.to_string(),
            market_price_per_kg: price,
            target_final_weight_kg: 1.0,
            initial_weight_kg: 0.1,
            mortality_rate: 0.1,
            max_density_kg_m3: 50.0,
            feed_conversion_ratio: 1.5,
            cycle_duration_months: 6.0,
            fingerling_unit_cost: 0.5,
            feed_cost_per_kg: 4.0,
        }
    }

    fn system() -> ProductionSystem {
        ProductionSystem::new(10_000.0, 2, 5.0, 200.0, TechnologyLevel::Intensive)
    }

    #[test]
    fn space_bound_single_species_fills_the_tanks() {
        let catalogue = vec![species("A", 10.0)];
        let allocation = optimize_mix(&catalogue, &system(), 0.0, &MicrolpSolver::new());
        match allocation {
            MixAllocation::Optimal {
                items,
                total_profit,
                total_biomass_kg,
                payback_months,
            } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].quantity, 500);
                assert!((items[0].occupancy_percent - 100.0).abs() < 1e-6);
                // unit profit = 10 - 5.9 - 1200/500 = 1.7
                assert!((total_profit - 850.0).abs() < 1e-4);
                assert!((total_biomass_kg - 500.0).abs() < 1e-6);
                // (2950 + 1200) / (850 / 6)
                assert!((payback_months - 4150.0 / (850.0 / 6.0)).abs() < 1e-4);
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn budget_bound_single_species_respects_capital() {
        let tight = ProductionSystem::new(2_000.0, 2, 5.0, 0.0, TechnologyLevel::Intensive);
        let catalogue = vec![species("A", 10.0)];
        let allocation = optimize_mix(&catalogue, &tight, 0.0, &MicrolpSolver::new());
        match allocation {
            MixAllocation::Optimal { items, .. } => {
                // floor(2000 / 5.9) = 338 affordable animals
                assert_eq!(items[0].quantity, 338);
                assert!(items[0].variable_cost <= tight.capital + 1e-6);
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn the_mix_prefers_the_more_profitable_species() {
        let catalogue = vec![species("Cheap", 10.0), species("Premium", 12.0)];
        let allocation = optimize_mix(&catalogue, &system(), 0.0, &MicrolpSolver::new());
        match allocation {
            MixAllocation::Optimal { items, .. } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].species, "Premium");
                assert_eq!(items[0].quantity, 500);
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn shared_constraints_hold_for_any_optimal_mix() {
        let catalogue = vec![species("A", 10.0), species("B", 11.0), species("C", 9.0)];
        let sys = system();
        let allocation = optimize_mix(&catalogue, &sys, 0.0, &MicrolpSolver::new());
        match allocation {
            MixAllocation::Optimal { items, .. } => {
                let spend: f64 = items.iter().map(|i| i.variable_cost).sum();
                let occupancy: f64 = items.iter().map(|i| i.occupancy_percent).sum();
                assert!(spend <= sys.capital + 1e-6);
                assert!(occupancy <= 100.0 + 1e-6);
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn minimum_target_is_met_or_declared_infeasible() {
        let catalogue = vec![species("A", 10.0)];
        let sys = system();

        match optimize_mix(&catalogue, &sys, 400.0, &MicrolpSolver::new()) {
            MixAllocation::Optimal {
                total_biomass_kg, ..
            } => assert!(total_biomass_kg >= 400.0 - 1e-6),
            other => panic!("expected optimal, got {:?}", other),
        }

        // The tanks cap stocking at 500 animals of 1 kg each.
        assert_eq!(
            optimize_mix(&catalogue, &sys, 501.0, &MicrolpSolver::new()),
            MixAllocation::Infeasible
        );
    }

    #[test]
    fn degenerate_species_never_enter_the_decision_set() {
        let mut degenerate = species("Degenerate", 10.0);
        degenerate.target_final_weight_kg = 10_000.0;
        degenerate.initial_weight_kg = 1.0;
        let catalogue = vec![degenerate, species("A", 10.0)];

        match optimize_mix(&catalogue, &system(), 0.0, &MicrolpSolver::new()) {
            MixAllocation::Optimal { items, .. } => {
                assert!(items.iter().all(|i| i.species == "A"));
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn empty_catalogue_is_trivially_optimal_without_a_target() {
        let allocation = optimize_mix(&[], &system(), 0.0, &MicrolpSolver::new());
        assert_eq!(
            allocation,
            MixAllocation::Optimal {
                items: Vec::new(),
                total_profit: 0.0,
                total_biomass_kg: 0.0,
                payback_months: 0.0,
            }
        );

        assert_eq!(
            optimize_mix(&[], &system(), 100.0, &MicrolpSolver::new()),
            MixAllocation::Infeasible
        );
    }

    #[test]
    fn repeated_runs_return_identical_allocations() {
        let catalogue = vec![species("A", 10.0), species("B", 12.0)];
        let sys = system();
        let first = optimize_mix(&catalogue, &sys, 300.0, &MicrolpSolver::new());
        let second = optimize_mix(&catalogue, &sys, 300.0, &MicrolpSolver::new());
        assert_eq!(first, second);
    }
}
