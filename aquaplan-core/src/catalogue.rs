//! Strict loading of the species catalogue from a tabular (CSV) source and
//! boundary validation of planning inputs. The column header must match the
//! `SpeciesProfile` field names.

use aquaplan_schemas::{production::ProductionSystem, species::SpeciesProfile};
use std::collections::HashSet;
use std::path::Path;

use crate::error::PlanningError;

/// Reads and validates the whole catalogue, failing on the first malformed
/// row, invariant violation, or duplicated species name. Lenient callers
/// (the CLI treats a bad source as "no species") decide what to do with the
/// error.
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<Vec<SpeciesProfile>, PlanningError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PlanningError::CsvError(path.display().to_string(), e))?;

    let mut catalogue = Vec::new();
    let mut seen_names = HashSet::new();
    for result in reader.deserialize() {
        let species: SpeciesProfile =
            result.map_err(|e| PlanningError::CsvError(path.display().to_string(), e))?;
        species
            .validate()
            .map_err(|msg| PlanningError::InvalidSpecies(species.name.clone(), msg))?;
        if !seen_names.insert(species.name.clone()) {
            return Err(PlanningError::InvalidSpecies(
                species.name.clone(),
                "name appears more than once in the catalogue".to_string(),
            ));
        }
        catalogue.push(species);
    }
    Ok(catalogue)
}

/// Checks the resource invariants before the system enters the core.
pub fn validate_system(system: &ProductionSystem) -> Result<(), PlanningError> {
    system.validate().map_err(PlanningError::InvalidSystem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaplan_schemas::production::TechnologyLevel;
    use std::io::Write;

    const HEADER: &str = "name,market_price_per_kg,target_final_weight_kg,initial_weight_kg,\
mortality_rate,max_density_kg_m3,feed_conversion_ratio,cycle_duration_months,\
fingerling_unit_cost,feed_cost_per_kg";

    #[test]
    fn loads_a_well_formed_catalogue() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "Tilapia,10.0,1.0,0.1,0.1,50.0,1.5,6.0,0.5,4.0").unwrap();
        writeln!(file, "Tambaqui,8.5,1.8,0.15,0.15,35.0,1.8,9.0,0.8,3.6").unwrap();

        let catalogue = load_catalogue(file.path()).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue[0].name, "Tilapia");
        assert!((catalogue[1].max_density_kg_m3 - 35.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_rows_violating_the_invariants() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        // Mortality of 1.2 violates the [0, 1) invariant.
        writeln!(file, "Broken,10.0,1.0,0.1,1.2,50.0,1.5,6.0,0.5,4.0").unwrap();

        let result = load_catalogue(file.path());
        assert!(matches!(
            result,
            Err(PlanningError::InvalidSpecies(name, _)) if name == "Broken"
        ));
    }

    #[test]
    fn rejects_duplicated_species_names() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "Tilapia,10.0,1.0,0.1,0.1,50.0,1.5,6.0,0.5,4.0").unwrap();
        writeln!(file, "Tilapia,9.0,1.2,0.1,0.12,45.0,1.6,7.0,0.5,4.0").unwrap();

        let result = load_catalogue(file.path());
        assert!(matches!(
            result,
            Err(PlanningError::InvalidSpecies(name, msg))
                if name == "Tilapia" && msg.contains("more than once")
        ));
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let result = load_catalogue("/nonexistent/species.csv");
        assert!(matches!(result, Err(PlanningError::CsvError(_, _))));
    }

    #[test]
    fn validate_system_flags_bad_resources() {
        let system = ProductionSystem::new(-1.0, 2, 5.0, 200.0, TechnologyLevel::Extensive);
        assert!(matches!(
            validate_system(&system),
            Err(PlanningError::InvalidSystem(_))
        ));

        let ok = ProductionSystem::new(100.0, 2, 5.0, 200.0, TechnologyLevel::Extensive);
        assert!(validate_system(&ok).is_ok());
    }
}
