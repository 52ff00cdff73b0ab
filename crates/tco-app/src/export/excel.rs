//! Excel export of a fleet report

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tco_domain::CostBreakdown;
use tco_types::{Error, Result};
use tracing::info;

use crate::app::FleetReport;
use crate::constants::BRAND_NAME;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a fleet report to an .xlsx file
pub fn export_to_excel(report: &FleetReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let comparison_sheet = workbook.add_worksheet();
    write_comparison_sheet(comparison_sheet, report)?;

    let roi_sheet = workbook.add_worksheet();
    write_roi_sheet(roi_sheet, report)?;

    workbook.save(output_path).map_err(excel_err)?;

    info!(path = %output_path.display(), vehicles = report.breakdowns.len(), "report exported");
    Ok(())
}

/// Finite values as numbers; infinities and NaN as text so the cell still says something
fn write_amount(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    format: &Format,
) -> Result<()> {
    if value.is_finite() {
        sheet
            .write_number_with_format(row, col, value, format)
            .map_err(excel_err)?;
    } else {
        sheet
            .write_string(row, col, value.to_string())
            .map_err(excel_err)?;
    }
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &FleetReport) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    sheet
        .write_string_with_format(0, 0, &report.title, &header_format)
        .map_err(excel_err)?;
    sheet.write_string(1, 0, BRAND_NAME).map_err(excel_err)?;

    sheet.write_string(3, 0, "Generated:").map_err(excel_err)?;
    sheet
        .write_string(3, 1, report.generated_at.to_rfc3339())
        .map_err(excel_err)?;

    sheet.write_string(4, 0, "Vehicles:").map_err(excel_err)?;
    sheet
        .write_number(4, 1, report.breakdowns.len() as f64)
        .map_err(excel_err)?;

    sheet
        .write_string(5, 0, "Most economical:")
        .map_err(excel_err)?;
    match report.most_economical() {
        Some(best) => {
            sheet.write_string(5, 1, &best.name).map_err(excel_err)?;
            sheet
                .write_string(6, 0, "Daily cost:")
                .map_err(excel_err)?;
            write_amount(sheet, 6, 1, best.daily_cost, &money)?;
            sheet
                .write_string(7, 0, "Yearly cost:")
                .map_err(excel_err)?;
            write_amount(sheet, 7, 1, best.yearly_cost, &money)?;
        }
        None => {
            sheet.write_string(5, 1, "-").map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 18).map_err(excel_err)?;
    sheet.set_column_width(1, 28).map_err(excel_err)?;

    Ok(())
}

fn write_comparison_sheet(sheet: &mut Worksheet, report: &FleetReport) -> Result<()> {
    sheet.set_name("Comparison").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let headers = [
        "#",
        "Vehicle",
        "Daily",
        "Monthly",
        "Yearly",
        "Per km",
        "Fuel / day",
        "Maintenance / day",
        "Depreciation / day",
        "Most economical",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, breakdown) in report.breakdowns.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_number(row, 0, (idx + 1) as f64)
            .map_err(excel_err)?;
        sheet
            .write_string(row, 1, &breakdown.name)
            .map_err(excel_err)?;
        write_breakdown_amounts(sheet, row, breakdown, &money)?;
        if report.most_economical == Some(idx) {
            sheet.write_string(row, 9, "Yes").map_err(excel_err)?;
        }
    }

    sheet.set_column_width(1, 24).map_err(excel_err)?;
    for col in 2..=8 {
        sheet.set_column_width(col, 16).map_err(excel_err)?;
    }

    Ok(())
}

fn write_breakdown_amounts(
    sheet: &mut Worksheet,
    row: u32,
    breakdown: &CostBreakdown,
    money: &Format,
) -> Result<()> {
    let amounts = [
        breakdown.daily_cost,
        breakdown.monthly_cost,
        breakdown.yearly_cost,
        breakdown.cost_per_km,
        breakdown.fuel_cost_daily,
        breakdown.maintenance_cost_daily,
        breakdown.depreciation_daily,
    ];
    for (offset, value) in amounts.into_iter().enumerate() {
        write_amount(sheet, row, 2 + offset as u16, value, money)?;
    }
    Ok(())
}

fn write_roi_sheet(sheet: &mut Worksheet, report: &FleetReport) -> Result<()> {
    sheet.set_name("ROI").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let headers = [
        "Vehicle",
        "Year",
        "Total cost",
        "Cost / year",
        "Residual value",
        "Net cost",
        "Recommendation",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    let mut row = 1u32;
    for breakdown in &report.breakdowns {
        for entry in &breakdown.roi_guidance {
            sheet
                .write_string(row, 0, &breakdown.name)
                .map_err(excel_err)?;
            sheet
                .write_number(row, 1, entry.year as f64)
                .map_err(excel_err)?;
            write_amount(sheet, row, 2, entry.total_cost, &money)?;
            write_amount(sheet, row, 3, entry.cost_per_year, &money)?;
            write_amount(sheet, row, 4, entry.residual_value, &money)?;
            write_amount(sheet, row, 5, entry.net_cost, &money)?;
            sheet
                .write_string(row, 6, entry.recommendation.message())
                .map_err(excel_err)?;
            row += 1;
        }
    }

    sheet.set_column_width(0, 24).map_err(excel_err)?;
    for col in 2..=5 {
        sheet.set_column_width(col, 16).map_err(excel_err)?;
    }
    sheet.set_column_width(6, 60).map_err(excel_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{compare, ComparisonOptions};
    use tco_domain::{FuelType, VehicleSpec};

    #[test]
    fn test_export_examples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let report = compare(&ComparisonOptions::new()).unwrap();
        export_to_excel(&report, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_non_finite_and_empty() {
        let dir = tempfile::tempdir().unwrap();

        let broken = VehicleSpec::new("Parked", 500_000.0, 0.0, FuelType::Petrol, 100.0);
        let options = ComparisonOptions::new()
            .with_examples(false)
            .with_vehicle(broken);
        let report = compare(&options).unwrap();
        assert!(!report.breakdowns[0].is_finite());
        export_to_excel(&report, &dir.path().join("broken.xlsx")).unwrap();

        let empty = compare(&ComparisonOptions::new().with_examples(false)).unwrap();
        export_to_excel(&empty, &dir.path().join("empty.xlsx")).unwrap();
    }
}
