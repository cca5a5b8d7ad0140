use aquaplan_schemas::outcome::{
    Bottleneck, InfeasibilityReason, MixItem, SpeciesOutcome,
};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::PlanningError;

#[derive(Debug, Serialize)]
struct RankingRow<'a> {
    rank: Option<usize>,
    species: &'a str,
    status: &'a str,
    reason: Option<&'a str>,
    stocking_quantity: Option<u64>,
    survivors: Option<u64>,
    sold_biomass_kg: Option<f64>,
    total_cost: Option<f64>,
    revenue: Option<f64>,
    net_profit: Option<f64>,
    monthly_profit: Option<f64>,
    roi_percent: Option<f64>,
    payback_months: Option<f64>,
    occupancy_percent: Option<f64>,
    bottleneck: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct MixRow<'a> {
    species: &'a str,
    quantity: u64,
    biomass_kg: f64,
    variable_cost: f64,
    cycle_months: f64,
    occupancy_percent: f64,
}

/// Writes ranked monoculture outcomes to a CSV file for downstream tools.
pub struct OutcomeLogger {
    writer: Writer<fs::File>,
}

impl OutcomeLogger {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_outcome(
        &mut self,
        rank: Option<usize>,
        outcome: &SpeciesOutcome,
    ) -> Result<(), anyhow::Error> {
        let row = match outcome {
            SpeciesOutcome::Viable {
                species,
                stocking_quantity,
                survivors,
                sold_biomass_kg,
                total_cost,
                revenue,
                net_profit,
                monthly_profit,
                roi_percent,
                payback_months,
                occupancy_percent,
                bottleneck,
                ..
            } => RankingRow {
                rank,
                species,
                status: "viable",
                reason: None,
                stocking_quantity: Some(*stocking_quantity),
                survivors: Some(*survivors),
                sold_biomass_kg: Some(*sold_biomass_kg),
                total_cost: Some(*total_cost),
                revenue: Some(*revenue),
                net_profit: Some(*net_profit),
                monthly_profit: Some(*monthly_profit),
                roi_percent: Some(*roi_percent),
                payback_months: Some(*payback_months),
                occupancy_percent: Some(*occupancy_percent),
                bottleneck: Some(match bottleneck {
                    Bottleneck::Physical => "physical",
                    Bottleneck::Financial => "financial",
                }),
            },
            SpeciesOutcome::Infeasible { species, reason } => RankingRow {
                rank,
                species,
                status: "infeasible",
                reason: Some(match reason {
                    InfeasibilityReason::FixedCostExceedsCapital => "fixed_cost_exceeds_capital",
                    InfeasibilityReason::InsufficientCapital => "insufficient_capital",
                }),
                stocking_quantity: None,
                survivors: None,
                sold_biomass_kg: None,
                total_cost: None,
                revenue: None,
                net_profit: None,
                monthly_profit: None,
                roi_percent: None,
                payback_months: None,
                occupancy_percent: None,
                bottleneck: None,
            },
        };

        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the species shares of an optimal mix to a CSV file.
pub struct MixLogger {
    writer: Writer<fs::File>,
}

impl MixLogger {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_item(&mut self, item: &MixItem) -> Result<(), anyhow::Error> {
        self.writer.serialize(MixRow {
            species: &item.species,
            quantity: item.quantity,
            biomass_kg: item.biomass_kg,
            variable_cost: item.variable_cost,
            cycle_months: item.cycle_months,
            occupancy_percent: item.occupancy_percent,
        })?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a whole ranking to `path`, numbering the viable entries in order.
pub fn export_ranking(
    path: impl AsRef<Path>,
    ranking: &[SpeciesOutcome],
) -> Result<(), PlanningError> {
    let path = path.as_ref();
    let mut logger = OutcomeLogger::new(path)
        .map_err(|e| PlanningError::FileIO(path.display().to_string(), e))?;
    let mut rank = 0usize;
    for outcome in ranking {
        let position = if outcome.is_viable() {
            rank += 1;
            Some(rank)
        } else {
            None
        };
        logger.log_outcome(position, outcome)?;
    }
    Ok(())
}

/// Writes the species shares of an optimal mix to `path`.
pub fn export_mix(path: impl AsRef<Path>, items: &[MixItem]) -> Result<(), PlanningError> {
    let path = path.as_ref();
    let mut logger = MixLogger::new(path)
        .map_err(|e| PlanningError::FileIO(path.display().to_string(), e))?;
    for item in items {
        logger.log_item(item)?;
    }
    Ok(())
}
