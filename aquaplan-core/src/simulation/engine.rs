//! The monoculture simulator: answers "what if the whole farm ran on this
//! one species?" for every catalogue entry independently, then ranks the
//! viable scenarios by monthly profit.

use aquaplan_schemas::{
    outcome::{Bottleneck, InfeasibilityReason, SpeciesOutcome},
    production::ProductionSystem,
    species::SpeciesProfile,
};

use crate::costing::CostModel;

/// Simulates one species occupying the entire production system.
pub fn simulate_species(species: &SpeciesProfile, system: &ProductionSystem) -> SpeciesOutcome {
    let model = CostModel::derive(species, system);
    let fixed_cost_for_cycle = system.monthly_fixed_cost * species.cycle_duration_months;

    // Financial ceiling: what is left for animals after the fixed bills.
    let operating_budget = system.capital - fixed_cost_for_cycle;
    if operating_budget <= 0.0 {
        return SpeciesOutcome::Infeasible {
            species: species.name.clone(),
            reason: InfeasibilityReason::FixedCostExceedsCapital,
        };
    }

    // A zero variable cost means the budget never binds; space decides alone.
    let financial_max_count = if model.variable_cost_per_fish > 0.0 {
        (operating_budget / model.variable_cost_per_fish).floor() as u64
    } else {
        u64::MAX
    };

    // Law of the minimum: stock no more than fits and no more than we can pay.
    let stocking_quantity = model.physical_max_count.min(financial_max_count);
    if stocking_quantity == 0 {
        return SpeciesOutcome::Infeasible {
            species: species.name.clone(),
            reason: InfeasibilityReason::InsufficientCapital,
        };
    }

    let survivors = (stocking_quantity as f64 * (1.0 - species.mortality_rate)).floor() as u64;
    let sold_biomass_kg = survivors as f64 * species.target_final_weight_kg;

    let fingerling_cost = stocking_quantity as f64 * species.fingerling_unit_cost;
    let feed_required_kg = stocking_quantity as f64 * model.feed_consumed_kg_per_fish;
    let feed_cost = feed_required_kg * species.feed_cost_per_kg;
    let total_cost = fingerling_cost + feed_cost + fixed_cost_for_cycle;

    let revenue = sold_biomass_kg * species.market_price_per_kg;
    let net_profit = revenue - total_cost;

    let cost_per_kg = if sold_biomass_kg > 0.0 {
        total_cost / sold_biomass_kg
    } else {
        0.0
    };
    let break_even_kg = if species.market_price_per_kg > 0.0 {
        total_cost / species.market_price_per_kg
    } else {
        0.0
    };
    let roi_percent = if total_cost > 0.0 {
        net_profit / total_cost * 100.0
    } else {
        0.0
    };
    // Normalized per month so cycles of different lengths compare fairly.
    let monthly_profit = net_profit / species.cycle_duration_months;
    // 0 is the sentinel for "never recovers".
    let payback_months = if monthly_profit > 0.0 {
        total_cost / monthly_profit
    } else {
        0.0
    };

    let occupancy_percent = stocking_quantity as f64 / model.physical_max_count as f64 * 100.0;
    let bottleneck = if financial_max_count < model.physical_max_count {
        Bottleneck::Financial
    } else {
        Bottleneck::Physical
    };

    SpeciesOutcome::Viable {
        species: species.name.clone(),
        stocking_quantity,
        survivors,
        sold_biomass_kg,
        fingerling_cost,
        feed_cost,
        fixed_cost: fixed_cost_for_cycle,
        total_cost,
        cost_per_kg,
        revenue,
        net_profit,
        monthly_profit,
        roi_percent,
        payback_months,
        break_even_kg,
        feed_required_kg,
        occupancy_percent,
        bottleneck,
    }
}

/// Simulates every catalogue entry independently and returns the outcomes
/// ranked: viable scenarios first, sorted by monthly profit descending,
/// then infeasible ones in catalogue order. An empty catalogue yields an
/// empty ranking.
pub fn simulate_catalogue(
    catalogue: &[SpeciesProfile],
    system: &ProductionSystem,
) -> Vec<SpeciesOutcome> {
    let (mut viable, infeasible): (Vec<_>, Vec<_>) = catalogue
        .iter()
        .map(|species| simulate_species(species, system))
        .partition(SpeciesOutcome::is_viable);

    viable.sort_by(|a, b| {
        monthly_profit_of(b)
            .partial_cmp(&monthly_profit_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    viable.extend(infeasible);
    viable
}

fn monthly_profit_of(outcome: &SpeciesOutcome) -> f64 {
    match outcome {
        SpeciesOutcome::Viable { monthly_profit, .. } => *monthly_profit,
        SpeciesOutcome::Infeasible { .. } => f64::NEG_INFINITY,
    }
}
