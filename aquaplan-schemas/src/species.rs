//! Defines the catalogue entry for a candidate species: the biological and
//! economic parameters the planning core needs to judge feasibility and
//! profitability. Entries are immutable once loaded.

use serde::{Deserialize, Serialize};

/// One candidate species from the producer's catalogue.
///
/// The field names double as the header of the tabular catalogue source, so
/// a row can be deserialized directly from CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Unique identifier within the catalogue.
    pub name: String,
    /// Sale price of harvested biomass.
    pub market_price_per_kg: f64,
    /// Weight at which a single animal is harvested and sold.
    pub target_final_weight_kg: f64,
    /// Weight of one fingerling at stocking.
    pub initial_weight_kg: f64,
    /// Expected loss fraction over the cycle, in [0, 1).
    pub mortality_rate: f64,
    /// Nominal density ceiling the species tolerates.
    pub max_density_kg_m3: f64,
    /// Kilograms of feed per kilogram of weight gained.
    pub feed_conversion_ratio: f64,
    /// Length of one grow-out cycle.
    pub cycle_duration_months: f64,
    /// Purchase price of one fingerling.
    pub fingerling_unit_cost: f64,
    /// Purchase price of one kilogram of feed.
    pub feed_cost_per_kg: f64,
}

impl SpeciesProfile {
    /// Checks the catalogue invariants, returning the first violation as a
    /// human-readable message. The planning core assumes profiles that have
    /// passed this check.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("species name must not be empty".to_string());
        }
        if !(self.initial_weight_kg > 0.0) {
            return Err(format!(
                "initial weight must be positive, got {}",
                self.initial_weight_kg
            ));
        }
        if !(self.target_final_weight_kg > self.initial_weight_kg) {
            return Err(format!(
                "target final weight ({} kg) must exceed initial weight ({} kg)",
                self.target_final_weight_kg, self.initial_weight_kg
            ));
        }
        if !(0.0..1.0).contains(&self.mortality_rate) {
            return Err(format!(
                "mortality rate must be in [0, 1), got {}",
                self.mortality_rate
            ));
        }
        if !(self.cycle_duration_months > 0.0) {
            return Err(format!(
                "cycle duration must be positive, got {}",
                self.cycle_duration_months
            ));
        }
        for (label, value) in [
            ("market price per kg", self.market_price_per_kg),
            ("max density", self.max_density_kg_m3),
            ("feed conversion ratio", self.feed_conversion_ratio),
            ("fingerling unit cost", self.fingerling_unit_cost),
            ("feed cost per kg", self.feed_cost_per_kg),
        ] {
            if !(value >= 0.0) {
                return Err(format!("{} must be non-negative, got {}", label, value));
            }
        }
        Ok(())
    }
}
