use anyhow::{Context, Result};
use aquaplan_core::logger;
use aquaplan_core::optimizer::optimize_mix;
use aquaplan_core::simulation::simulate_catalogue;
use aquaplan_core::solver::MicrolpSolver;
use aquaplan_schemas::outcome::MixAllocation;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod report;

/// Aquaculture production planner: ranks each catalogue species farmed
/// alone and proposes the most profitable mix under budget and space
/// constraints.
#[derive(Debug, Parser)]
#[command(name = "aquaplan", version)]
struct Cli {
    /// Species catalogue CSV.
    #[arg(long, default_value = "data/species.csv")]
    catalogue: PathBuf,

    /// Plan request YAML with the producer's resources.
    #[arg(long, default_value = "aquaplan-app/request.yaml")]
    request: PathBuf,

    /// When set, write timestamped CSV exports of the ranking and the mix
    /// under this directory.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- AquaPlan ---");

    let request = config::PlanRequest::load(&cli.request)?;
    let minimum_target_kg = request.minimum_target_kg;
    let system = request.into_system()?;

    let catalogue = config::load_catalogue(&cli.catalogue);
    println!(
        "Loaded {} species; system: {} tanks x {} m3 ({}), capital {:.2}",
        catalogue.len(),
        system.tank_count,
        system.volume_per_tank_m3,
        system.technology,
        system.capital
    );

    let ranking = simulate_catalogue(&catalogue, &system);
    let allocation = optimize_mix(&catalogue, &system, minimum_target_kg, &MicrolpSolver::new());

    report::render(&system, &ranking, &allocation, minimum_target_kg);

    if let Some(export_dir) = &cli.export_dir {
        let run_dir = export_dir.join(format!(
            "plan_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        fs::create_dir_all(&run_dir)
            .with_context(|| format!("Failed to create export directory {:?}", run_dir))?;

        // Copy the request alongside the exports for traceability.
        fs::copy(&cli.request, run_dir.join("request.yaml"))
            .with_context(|| format!("Failed to copy request into {:?}", run_dir))?;

        export_ranking(&run_dir, &ranking)?;
        export_mix(&run_dir, &allocation)?;
        println!("\nExports written to {:?}", run_dir);
    }

    Ok(())
}

fn export_ranking(
    run_dir: &Path,
    ranking: &[aquaplan_schemas::outcome::SpeciesOutcome],
) -> Result<()> {
    let path = run_dir.join("ranking.csv");
    logger::export_ranking(&path, ranking)
        .with_context(|| format!("Failed to export ranking to {:?}", path))?;
    Ok(())
}

fn export_mix(run_dir: &Path, allocation: &MixAllocation) -> Result<()> {
    let MixAllocation::Optimal { items, .. } = allocation else {
        return Ok(());
    };
    let path = run_dir.join("mix.csv");
    logger::export_mix(&path, items)
        .with_context(|| format!("Failed to export mix to {:?}", path))?;
    Ok(())
}
