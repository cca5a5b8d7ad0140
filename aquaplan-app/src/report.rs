//! Textual rendering of a planning run: the monoculture ranking, a detail
//! block per viable species, the infeasible list, and the mix conclusion.

use aquaplan_schemas::outcome::{
    Bottleneck, InfeasibilityReason, MixAllocation, SpeciesOutcome,
};
use aquaplan_schemas::production::ProductionSystem;

const RULE: &str = "================================================================================";
const THIN: &str = "--------------------------------------------------------------------------------";

/// Currency formatting with thousands separators, e.g. `$ 12,345.67`.
fn money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut grouped = String::new();
    for (i, digit) in whole.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("{}$ {}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

fn count(value: f64) -> String {
    let whole = value.round().max(0.0) as u64;
    let mut grouped = String::new();
    for (i, digit) in whole.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

pub fn render(
    system: &ProductionSystem,
    ranking: &[SpeciesOutcome],
    allocation: &MixAllocation,
    minimum_target_kg: f64,
) {
    if ranking.is_empty() {
        println!("\nNO SCENARIO TO REPORT: the species catalogue is empty.");
    } else {
        render_ranking(ranking);
        render_details(system, ranking);
    }
    render_mix(allocation, minimum_target_kg);
}

fn render_ranking(ranking: &[SpeciesOutcome]) {
    println!("\n{}", RULE);
    println!("{:^80}", "MONOCULTURE VIABILITY RANKING");
    println!("{}", RULE);
    println!(
        "{:<3} {:<25} {:<18} {:<10} {}",
        "RK", "SPECIES", "MONTHLY PROFIT", "ROI", "INVESTMENT"
    );
    println!("{}", THIN);

    let mut rank = 0usize;
    for outcome in ranking {
        match outcome {
            SpeciesOutcome::Viable {
                species,
                monthly_profit,
                roi_percent,
                total_cost,
                ..
            } => {
                rank += 1;
                println!(
                    "{:02}. {:<25} {:<18} {:>5.1}%    {}",
                    rank,
                    species,
                    money(*monthly_profit),
                    roi_percent,
                    money(*total_cost)
                );
            }
            SpeciesOutcome::Infeasible { species, reason } => {
                let reason_text = match reason {
                    InfeasibilityReason::FixedCostExceedsCapital => {
                        "fixed cost exceeds capital"
                    }
                    InfeasibilityReason::InsufficientCapital => "insufficient capital",
                };
                println!("--. {:<25} INFEASIBLE ({})", species, reason_text);
            }
        }
    }
}

fn render_details(system: &ProductionSystem, ranking: &[SpeciesOutcome]) {
    for outcome in ranking {
        let SpeciesOutcome::Viable {
            species,
            stocking_quantity,
            sold_biomass_kg,
            fingerling_cost,
            feed_cost,
            fixed_cost,
            total_cost,
            cost_per_kg,
            net_profit,
            monthly_profit,
            roi_percent,
            payback_months,
            break_even_kg,
            feed_required_kg,
            occupancy_percent,
            bottleneck,
            ..
        } = outcome
        else {
            continue;
        };

        println!("\n{}", RULE);
        println!(" DETAILED ANALYSIS: {}", species.to_uppercase());
        println!("{}", RULE);

        if *monthly_profit < 0.0 {
            println!(" Runs at a loss: {} per month.", money(monthly_profit.abs()));
        }

        println!("\n1. RESULTS SUMMARY\n{}", THIN);
        println!("   - Net profit (cycle):  {}", money(*net_profit));
        println!("   - Monthly profit:      {}", money(*monthly_profit));
        if *payback_months > 0.0 {
            println!("   - Payback:             {:.1} months", payback_months);
        } else {
            println!("   - Payback:             never (profit is not positive)");
        }
        println!("   - ROI:                 {:.1}%", roi_percent);
        println!("   - Production cost:     {}/kg", money(*cost_per_kg));

        println!("\n2. BUDGET (CAPITAL ALLOCATION)\n{}", THIN);
        println!(
            "   - Fingerlings:         {} units -> {}",
            count(*stocking_quantity as f64),
            money(*fingerling_cost)
        );
        println!(
            "   - Feed:                {:.2} t -> {}",
            feed_required_kg / 1000.0,
            money(*feed_cost)
        );
        println!("   - Fixed cost:          {}", money(*fixed_cost));
        println!("   > TOTAL:               {}", money(*total_cost));
        if *total_cost < system.capital {
            println!(
                "     (Cash remaining: {})",
                money(system.capital - total_cost)
            );
        }

        println!("\n3. BREAK-EVEN\n{}", THIN);
        println!(
            "   Must produce {} kg to cover costs; projected output is {} kg.",
            count(*break_even_kg),
            count(*sold_biomass_kg)
        );

        println!("\n4. INFRASTRUCTURE DIAGNOSIS\n{}", THIN);
        println!("   - Tank occupancy:      {:.1}%", occupancy_percent);
        let constraint = match bottleneck {
            Bottleneck::Financial => "capital (tanks partly idle)",
            Bottleneck::Physical => "space (cash left over)",
        };
        println!("   - Binding constraint:  {}", constraint);
    }
}

fn render_mix(allocation: &MixAllocation, minimum_target_kg: f64) {
    println!("\n{}", RULE);
    let target_text = if minimum_target_kg > 0.0 {
        format!("{} kg", count(minimum_target_kg))
    } else {
        "none (free)".to_string()
    };
    println!(" STRATEGIC CONCLUSION: OPTIMAL MIX (target: {})", target_text);
    println!("{}", RULE);

    match allocation {
        MixAllocation::Optimal {
            items,
            total_profit,
            total_biomass_kg,
            payback_months,
        } => {
            if items.is_empty() {
                println!("\n No species can be stocked profitably with these resources.");
                return;
            }
            println!("\n Suggested stocking for maximum profit:");
            for item in items {
                println!(
                    "   > {:>6} units of {:<20} (cycle: {} months, occupancy: {:.1}%)",
                    count(item.quantity as f64),
                    item.species,
                    item.cycle_months,
                    item.occupancy_percent
                );
            }
            println!("\n   - Total production:    {} kg", count(*total_biomass_kg));
            println!("   - Total profit:        {}", money(*total_profit));
            if *payback_months > 0.0 {
                println!("   - Estimated payback:   {:.1} months", payback_months);
            } else {
                println!("   - Estimated payback:   never (profit is not positive)");
            }
        }
        MixAllocation::Infeasible => {
            println!("\n [!] THE TARGET CANNOT BE MET WITH THE CURRENT RESOURCES.");
            println!("     Reduce the target or increase capital/volume.");
        }
        MixAllocation::Error { detail } => {
            println!("\n [!] OPTIMIZATION FAILED: {}", detail);
        }
    }
}
