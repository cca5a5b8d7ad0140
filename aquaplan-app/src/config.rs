use anyhow::{Context, Result};
use aquaplan_core::catalogue;
use aquaplan_schemas::{
    production::{ProductionSystem, TechnologyLevel},
    species::SpeciesProfile,
};
use serde::Deserialize;
use std::path::Path;

/// Producer inputs for one planning run, read from a YAML request file.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Working capital available for the cycle.
    pub capital: f64,
    pub tank_count: u32,
    pub volume_per_tank_m3: f64,
    pub monthly_fixed_cost: f64,
    pub technology: TechnologyLevel,
    /// Minimum production the mix must reach; 0 or absent means no minimum.
    #[serde(default)]
    pub minimum_target_kg: f64,
}

impl PlanRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan request {:?}", path))?;
        let request: PlanRequest = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse plan request {:?}", path))?;
        if request.minimum_target_kg < 0.0 {
            anyhow::bail!("minimum_target_kg must be non-negative");
        }
        Ok(request)
    }

    /// Validates the resource invariants and builds the read-only system
    /// handed to the planning core.
    pub fn into_system(self) -> Result<ProductionSystem> {
        let system = ProductionSystem::new(
            self.capital,
            self.tank_count,
            self.volume_per_tank_m3,
            self.monthly_fixed_cost,
            self.technology,
        );
        catalogue::validate_system(&system)?;
        Ok(system)
    }
}

/// Loads the species catalogue, treating a missing or malformed source as
/// an empty catalogue: the core handles "no species" as a valid,
/// trivially-infeasible input, so a bad file never aborts a run.
pub fn load_catalogue(path: &Path) -> Vec<SpeciesProfile> {
    match catalogue::load_catalogue(path) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            println!("Warning: no usable catalogue at {:?}: {}", path, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn a_bad_source_yields_an_empty_catalogue() {
        assert!(load_catalogue(Path::new("/nonexistent/species.csv")).is_empty());

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "not,a,species,catalogue").unwrap();
        writeln!(file, "1,2,3,4").unwrap();
        assert!(load_catalogue(file.path()).is_empty());
    }

    #[test]
    fn a_valid_source_loads_in_catalogue_order() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "name,market_price_per_kg,target_final_weight_kg,initial_weight_kg,mortality_rate,\
max_density_kg_m3,feed_conversion_ratio,cycle_duration_months,fingerling_unit_cost,\
feed_cost_per_kg"
        )
        .unwrap();
        writeln!(file, "Tilapia,10.0,1.0,0.1,0.1,50.0,1.5,6.0,0.5,4.0").unwrap();
        writeln!(file, "Pacu,9.2,1.2,0.12,0.12,40.0,1.7,8.0,0.6,3.8").unwrap();

        let catalogue = load_catalogue(file.path());
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue[0].name, "Tilapia");
        assert_eq!(catalogue[1].name, "Pacu");
    }

    #[test]
    fn plan_request_round_trips_from_yaml() {
        let yaml = "capital: 10000.0\ntank_count: 2\nvolume_per_tank_m3: 5.0\n\
                    monthly_fixed_cost: 200.0\ntechnology: Intensive\n";
        let request: PlanRequest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(request.minimum_target_kg, 0.0);

        let system = request.into_system().unwrap();
        assert_eq!(system.technology, TechnologyLevel::Intensive);
        assert!((system.total_volume_m3() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_system_parameters_are_rejected_at_the_boundary() {
        let yaml = "capital: -5.0\ntank_count: 2\nvolume_per_tank_m3: 5.0\n\
                    monthly_fixed_cost: 200.0\ntechnology: Extensive\n";
        let request: PlanRequest = serde_yaml::from_str(yaml).unwrap();
        assert!(request.into_system().is_err());
    }
}
