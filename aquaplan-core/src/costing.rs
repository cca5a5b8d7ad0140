//! Per-(species, system) cost and capacity derivation, shared by the
//! monoculture simulator and the mix optimizer so the two views never
//! disagree on what one animal costs or how many fit in the water.

use aquaplan_schemas::{production::ProductionSystem, species::SpeciesProfile};

/// Derived unit economics and the physical ceiling for one species under a
/// given production system.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    /// Weight one animal gains from stocking to harvest.
    pub weight_gain_kg: f64,
    /// Feed one animal consumes over the whole cycle.
    pub feed_consumed_kg_per_fish: f64,
    /// Fingerling purchase plus lifetime feed for one animal.
    pub variable_cost_per_fish: f64,
    /// Density ceiling after the technology correction.
    pub effective_density_kg_m3: f64,
    /// Maximum biomass the pooled water volume sustains.
    pub max_biomass_kg: f64,
    /// Maximum population by space alone, at harvest weight.
    pub physical_max_count: u64,
    /// Sale revenue from one harvested animal.
    pub unit_revenue: f64,
}

impl CostModel {
    pub fn derive(species: &SpeciesProfile, system: &ProductionSystem) -> Self {
        let weight_gain_kg = species.target_final_weight_kg - species.initial_weight_kg;
        let feed_consumed_kg_per_fish = weight_gain_kg * species.feed_conversion_ratio;
        let variable_cost_per_fish =
            species.fingerling_unit_cost + feed_consumed_kg_per_fish * species.feed_cost_per_kg;

        let effective_density_kg_m3 = species.max_density_kg_m3 * system.density_factor();
        let max_biomass_kg = system.total_volume_m3() * effective_density_kg_m3;
        let physical_max_count = (max_biomass_kg / species.target_final_weight_kg).floor() as u64;

        let unit_revenue = species.target_final_weight_kg * species.market_price_per_kg;

        Self {
            weight_gain_kg,
            feed_consumed_kg_per_fish,
            variable_cost_per_fish,
            effective_density_kg_m3,
            max_biomass_kg,
            physical_max_count,
            unit_revenue,
        }
    }
}
