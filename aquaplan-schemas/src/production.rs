//! The producer's fixed resources for one planning run: working capital,
//! tank infrastructure, recurring costs, and the management technology tier.

use serde::{Deserialize, Serialize};

/// Management intensity of the farm, determining how much of a species'
/// nominal density ceiling is actually achievable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechnologyLevel {
    Extensive,
    SemiIntensive,
    Intensive,
}

impl TechnologyLevel {
    /// Fraction of the nominal maximum density achievable at this tier.
    pub fn density_factor(&self) -> f64 {
        match self {
            TechnologyLevel::Extensive => 0.10,
            TechnologyLevel::SemiIntensive => 0.40,
            TechnologyLevel::Intensive => 1.00,
        }
    }
}

impl std::fmt::Display for TechnologyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TechnologyLevel::Extensive => write!(f, "EXTENSIVE"),
            TechnologyLevel::SemiIntensive => write!(f, "SEMI-INTENSIVE"),
            TechnologyLevel::Intensive => write!(f, "INTENSIVE"),
        }
    }
}

/// The producer's fixed resources. Constructed once per planning run from
/// validated inputs and read-only thereafter.
///
/// The model pools all tanks into one undifferentiated volume: ten tanks of
/// 1 m³ and one tank of 10 m³ are equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSystem {
    /// Working capital available for the cycle.
    pub capital: f64,
    /// Number of grow-out tanks.
    pub tank_count: u32,
    /// Water volume of a single tank.
    pub volume_per_tank_m3: f64,
    /// Recurring cost (energy, labor) per month of operation.
    pub monthly_fixed_cost: f64,
    pub technology: TechnologyLevel,
}

impl ProductionSystem {
    pub fn new(
        capital: f64,
        tank_count: u32,
        volume_per_tank_m3: f64,
        monthly_fixed_cost: f64,
        technology: TechnologyLevel,
    ) -> Self {
        Self {
            capital,
            tank_count,
            volume_per_tank_m3,
            monthly_fixed_cost,
            technology,
        }
    }

    /// Total usable water volume across all tanks.
    pub fn total_volume_m3(&self) -> f64 {
        f64::from(self.tank_count) * self.volume_per_tank_m3
    }

    /// Fraction of nominal density achievable at the configured tier.
    pub fn density_factor(&self) -> f64 {
        self.technology.density_factor()
    }

    /// Checks the resource invariants, returning the first violation as a
    /// human-readable message.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.capital > 0.0) {
            return Err(format!("capital must be positive, got {}", self.capital));
        }
        if self.tank_count == 0 {
            return Err("tank count must be at least 1".to_string());
        }
        if !(self.volume_per_tank_m3 > 0.0) {
            return Err(format!(
                "volume per tank must be positive, got {}",
                self.volume_per_tank_m3
            ));
        }
        if !(self.monthly_fixed_cost >= 0.0) {
            return Err(format!(
                "monthly fixed cost must be non-negative, got {}",
                self.monthly_fixed_cost
            ));
        }
        Ok(())
    }
}
