/// until today - calculation date taken from a time provider
use chrono::{Duration, TimeZone, Utc};
use process_interest_rs::{format_amount, ProcessInterestCalculator, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== until today ===\n");

    let calc = ProcessInterestCalculator::statutory()?;

    // production: system clock
    let system = SafeTimeProvider::new(TimeSource::System);
    if let Some(result) = calc.calculate_until_today("1.000,00", "01-03-2013", &system)? {
        println!("until {}: {}", result.end_date, format_amount(Some(result.total_interest)));
    }

    // controlled time for reproducible statements
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let control = time.test_control().unwrap();

    for _ in 0..4 {
        if let Some(result) = calc.calculate_until_today("1.000,00", "01-03-2013", &time)? {
            println!("until {}: {}", result.end_date, format_amount(Some(result.total_interest)));
        }
        control.advance(Duration::days(90));
    }

    Ok(())
}
