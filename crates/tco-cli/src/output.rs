//! Output formatting module

use serde_json::json;
use tco_app::app::FleetReport;
use tco_domain::{CostBreakdown, FuelProfiles};
use tco_types::{OutputFormat, Result};

/// Two decimals with thousands separators; infinities and NaN as-is
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn output_report(output_format: OutputFormat, report: &FleetReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\n{}", report.title);
    println!("{}", "=".repeat(report.title.len()));

    if report.is_empty() {
        println!("No vehicles to compare.");
        return Ok(());
    }

    println!(
        "{:>3}  {:<20} {:>12} {:>14} {:>16} {:>8} {:>10} {:>10} {:>10}",
        "#", "Vehicle", "Daily", "Monthly", "Yearly", "Per km", "Fuel", "Maint.", "Deprec."
    );
    println!("{}", "-".repeat(115));

    for (idx, b) in report.breakdowns.iter().enumerate() {
        let marker = if report.most_economical == Some(idx) {
            '*'
        } else {
            ' '
        };
        println!(
            "{:>3}{} {:<20} {:>12} {:>14} {:>16} {:>8} {:>10} {:>10} {:>10}",
            idx + 1,
            marker,
            truncate(&b.name, 20),
            format_amount(b.daily_cost),
            format_amount(b.monthly_cost),
            format_amount(b.yearly_cost),
            format_amount(b.cost_per_km),
            format_amount(b.fuel_cost_daily),
            format_amount(b.maintenance_cost_daily),
            format_amount(b.depreciation_daily),
        );
    }

    if let Some(best) = report.most_economical() {
        println!();
        println!(
            "* Most economical: {} ({} per day, {} per year)",
            best.name,
            format_amount(best.daily_cost),
            format_amount(best.yearly_cost)
        );
    }

    Ok(())
}

pub fn output_breakdown(output_format: OutputFormat, breakdown: &CostBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(breakdown)?);
        return Ok(());
    }

    println!("\nCost Breakdown: {}", breakdown.name);
    println!("===============");
    println!("Daily cost:        {}", format_amount(breakdown.daily_cost));
    println!("Monthly cost:      {}", format_amount(breakdown.monthly_cost));
    println!("Yearly cost:       {}", format_amount(breakdown.yearly_cost));
    println!("Cost per km:       {}", format_amount(breakdown.cost_per_km));
    println!("\n--- Daily Components ---");
    println!("Fuel:              {}", format_amount(breakdown.fuel_cost_daily));
    println!(
        "Maintenance:       {}",
        format_amount(breakdown.maintenance_cost_daily)
    );
    println!(
        "Depreciation:      {}",
        format_amount(breakdown.depreciation_daily)
    );

    print_roi_table(breakdown);
    Ok(())
}

pub fn output_roi(output_format: OutputFormat, breakdown: &CostBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = json!({
            "name": breakdown.name,
            "roi_guidance": breakdown.roi_guidance,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("\nOwnership Guidance: {}", breakdown.name);
    print_roi_table(breakdown);
    Ok(())
}

fn print_roi_table(breakdown: &CostBreakdown) {
    println!();
    println!(
        "{:>4}  {:>16} {:>14} {:>16} {:>16}  {}",
        "Year", "Total cost", "Per year", "Residual", "Net cost", "Recommendation"
    );
    println!("{}", "-".repeat(120));
    for entry in &breakdown.roi_guidance {
        println!(
            "{:>4}  {:>16} {:>14} {:>16} {:>16}  {}",
            entry.year,
            format_amount(entry.total_cost),
            format_amount(entry.cost_per_year),
            format_amount(entry.residual_value),
            format_amount(entry.net_cost),
            entry.recommendation.message(),
        );
    }
}

pub fn output_profiles(output_format: OutputFormat, profiles: &FuelProfiles) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(profiles)?);
        return Ok(());
    }

    println!("\nFuel Profiles");
    println!("=============");
    println!("{:<12} {:>12} {:>16}", "Fuel", "km / unit", "Maint. / km");
    for (fuel_type, profile) in profiles.iter() {
        println!(
            "{:<12} {:>12} {:>16}",
            fuel_type.as_str(),
            profile.efficiency,
            profile.maintenance_cost_per_km
        );
    }
    println!(
        "{:<12} {:>12} {:>16}",
        "(other)", profiles.fallback.efficiency, profiles.fallback.maintenance_cost_per_km
    );
    Ok(())
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let cut: String = name.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(8.77), "8.77");
        assert_eq!(format_amount(346.27), "346.27");
        assert_eq!(format_amount(10388.1), "10,388.10");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Swift", 20), "Swift");
        assert_eq!(truncate("A very long vehicle name", 10), "A very ...");
    }
}
