/// breakdown report - one line per half-year, exported as json
use process_interest_rs::{InterestReport, ProcessInterestCalculator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows every accrued period
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    println!("=== breakdown report ===\n");

    let calc = ProcessInterestCalculator::statutory()?;
    let Some(result) = calc.calculate("25.000,00", "15-11-2012", "31-03-2024")? else {
        println!("claim cannot be computed");
        return Ok(());
    };

    let report = InterestReport::from_result(&result);
    println!("{:<12} {:<12} {:>9} {:>9} {:>6} {:>12}", "from", "to", "ref", "total", "days", "interest");
    for line in &report.lines {
        println!(
            "{:<12} {:<12} {:>9} {:>9} {:>6} {:>12}",
            line.start_date, line.end_date, line.reference_rate, line.total_rate, line.days, line.interest
        );
    }
    println!("\nsurcharge: {}", report.surcharge_rate);
    println!("total:     {}", report.total_interest);

    println!("\njson export:");
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
