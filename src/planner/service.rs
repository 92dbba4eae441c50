use std::error::Error;
use std::fs;

use colored::Colorize;
use csv::Writer;
use dotenv::dotenv;
use itertools::Itertools;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{PLAN_JSON_PATH, REPORT_CSV_PATH};
use crate::database::sqlx::db_connection;
use crate::domain::plan::DispatchPlan;
use crate::domain::types::{Priority, Vehicle};
use crate::domain::validate::validate_snapshot;
use crate::planner::assignment::generate_plan;
use crate::setup::init::load_snapshot;

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .init();

    dotenv().ok();
    Ok(())
}

pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let db_pool = db_connection().await?;

    let (orders, vehicles) = {
        let span = span!(Level::INFO, "intake");
        let _guard = span.enter();
        load_snapshot(&db_pool).await?
    };

    let mix = orders.iter().counts_by(|o| o.priority);
    info!(
        "Order mix: {} high / {} medium / {} low",
        mix.get(&Priority::High).copied().unwrap_or(0),
        mix.get(&Priority::Medium).copied().unwrap_or(0),
        mix.get(&Priority::Low).copied().unwrap_or(0)
    );

    validate_snapshot(&orders, &vehicles)?;

    let plan = {
        let span = span!(Level::INFO, "plan_generation");
        let _guard = span.enter();
        generate_plan(&orders, &vehicles)
    };

    print_plan_summary(&plan, &vehicles);

    save_report_csv(&plan, REPORT_CSV_PATH)?;
    save_plan_json(&plan, PLAN_JSON_PATH)?;

    Ok(())
}

/// Human-readable plan on stdout; operational detail goes through tracing.
fn print_plan_summary(plan: &DispatchPlan, vehicles: &[Vehicle]) {
    println!("============================== DISPATCH PLAN ==============================");

    for (assignment, vehicle) in plan.assignments.iter().zip(vehicles) {
        if assignment.is_idle() {
            println!("{} {:.1} / {:.1} : idle", assignment.vehicle_id, 0.0, vehicle.capacity);
        } else {
            println!(
                "{} {} over {:.2} km : {:?}",
                assignment.vehicle_id,
                format_args!("{:.1} / {:.1}", assignment.total_load, vehicle.capacity)
                    .to_string()
                    .green(),
                assignment.total_distance_km,
                assignment.order_ids()
            );
        }
    }

    if plan.unassigned_orders.is_empty() {
        println!("{}", "All orders assigned".green());
    } else {
        let ids: Vec<&str> = plan
            .unassigned_orders
            .iter()
            .map(|o| o.order_id.as_str())
            .collect();
        println!(
            "{}",
            format!("{} orders unassigned: {:?}", ids.len(), ids).red()
        );
    }
}

fn save_report_csv(plan: &DispatchPlan, filename: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["vehicle_id", "order_id", "priority", "weight"])?;

    for assignment in &plan.assignments {
        for order in &assignment.assigned_orders {
            wtr.write_record([
                assignment.vehicle_id.clone(),
                order.order_id.clone(),
                order.priority.as_str().to_string(),
                order.weight.to_string(),
            ])?;
        }
    }
    for order in &plan.unassigned_orders {
        wtr.write_record([
            "unassigned".to_string(),
            order.order_id.clone(),
            order.priority.as_str().to_string(),
            order.weight.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Report written to {}", filename);
    Ok(())
}

fn save_plan_json(plan: &DispatchPlan, filename: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(filename, json)?;
    info!("Plan written to {}", filename);
    Ok(())
}
