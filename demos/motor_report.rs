//! Generates a motor report from a raw booking payload and prints the
//! page structure.
//!
//! Run with: `cargo run --example motor_report`

use chrono::Local;
use lading::{CompanyRecord, ReportBuilder, ReportKind, ReportRow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let payload = r#"[
        {"lrNumber": 101, "toBranchId": 1, "toBranch": "Akola",
         "grandTotal": "450.00", "paymentType": 1,
         "bookingDetails": [{"article": 4, "weight": "120.5", "chargeWeight": 125}]},
        {"lrNumber": 99, "toBranchId": 1, "toBranch": "Akola",
         "grandTotal": 210, "paymentType": 2,
         "bookingDetails": [{"article": 1, "weight": 40, "chargeWeight": 40}]},
        {"lrNumber": "87", "toBranchId": 2, "toBranch": "Wardha",
         "grandTotal": "95.50", "paymentType": 3,
         "bookingDetails": [{"article": "2", "weight": "18.25", "chargeWeight": "20"}]}
    ]"#;

    let document = ReportBuilder::new(ReportKind::MotorReport)
        .with_json_records(payload)?
        .with_company(CompanyRecord {
            name: "Shree Transport Co.".to_string(),
            address: "Station Road, Nagpur".to_string(),
            phone: Some("0712-2222222".to_string()),
        })
        .with_generated_on(Local::now().date_naive())
        .build()?;

    for page in &document.pages {
        println!("=== {} — Page No. {} ===", page.label, page.number);
        for row in page.columns.left.iter().chain(&page.columns.right) {
            match row {
                ReportRow::Heading { branch } => println!("To: {branch}"),
                ReportRow::Shipment(s) => println!(
                    "  LR {:>6}  art {:>3}  wt {:>8}  chg {:>8}  {:<6}  {:>10}",
                    s.lr_number,
                    s.article,
                    s.weight,
                    s.charge_weight,
                    s.payment.unwrap_or("-"),
                    s.grand_total
                ),
            }
        }
        for line in &page.summary {
            println!(
                "  {:<12} art {:>3}  wt {:>8}  total {:>10}",
                line.branch,
                line.totals.article,
                line.totals.weight,
                line.totals.total()
            );
        }
        if let Some(totals) = &page.grand_totals {
            println!(
                "GRAND TOTAL  art {}  wt {}  to-pay {}  paid {}  tbb {}  total {}",
                totals.article,
                totals.weight,
                totals.to_pay,
                totals.paid,
                totals.tbb,
                totals.total()
            );
        }
    }

    Ok(())
}
