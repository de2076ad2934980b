/// quick start - process interest on a claim over one half-year
use process_interest_rs::{calculate_process_interest, format_amount};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== quick start ===\n");

    let interest = calculate_process_interest("10.000,00", "01-01-2023", "30-06-2023")?;
    println!("principal:  10.000,00");
    println!("period:     01-01-2023 to 30-06-2023");
    println!("interest:   {}", format_amount(interest));

    // invalid input is not an error, it simply cannot be computed
    let invalid = calculate_process_interest("1000", "32-01-2020", "01-01-2021")?;
    println!("\ninvalid date -> {:?}", invalid);

    Ok(())
}
