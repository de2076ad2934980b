use process_interest_rs::{
    calculate_detailed_breakdown, calculate_process_interest, days_in_year, format_amount,
    CalendarDate, Decimal, Money, ProcessInterestCalculator, ProcessInterestError, RateTable,
};
use rust_decimal_macros::dec;

#[test]
fn single_day_equals_daily_fraction() {
    let calc = ProcessInterestCalculator::statutory().unwrap();
    let table = RateTable::statutory().unwrap();

    for day in ["03-01-2005", "29-02-2024", "31-12-2015", "01-07-2022"] {
        let date = CalendarDate::parse(day).unwrap();
        let result = calc.calculate("4.321,09", day, day).unwrap().unwrap();

        let reference = table.entry_on(date).unwrap().rate.as_percentage();
        let surcharge = if date < CalendarDate::parse("01-03-2013").unwrap() { dec!(7) } else { dec!(8) };
        let expected = dec!(4321.09) * (reference + surcharge) / dec!(100)
            / Decimal::from(days_in_year(date.year()));

        assert_eq!(result.periods.len(), 1, "{day}");
        assert_eq!(result.total_interest.as_decimal(), expected.round_dp(2), "{day}");
    }
}

#[test]
fn additivity_across_split_points() {
    let calc = ProcessInterestCalculator::statutory().unwrap();
    let amount = "98.765,43";
    let splits = [
        ("01-02-2010", "14-08-2013", "15-08-2013", "20-11-2021"),
        ("01-02-2010", "30-06-2016", "01-07-2016", "20-11-2021"),
        ("28-02-2020", "28-02-2020", "29-02-2020", "01-03-2020"),
    ];

    for (s, m, m1, e) in splits {
        let whole = calc.calculate(amount, s, e).unwrap().unwrap();
        let left = calc.calculate(amount, s, m).unwrap().unwrap();
        let right = calc.calculate(amount, m1, e).unwrap().unwrap();

        let diff = whole.unrounded_total.as_decimal()
            - (left.unrounded_total.as_decimal() + right.unrounded_total.as_decimal());
        assert!(diff.abs() < dec!(0.000000001), "{s}..{e} split at {m}: {diff}");
    }
}

#[test]
fn rate_change_on_half_year_boundary() {
    let periods = calculate_detailed_breakdown("1.000,00", "30-06-2022", "01-07-2022").unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end_date.to_string(), "30-06-2022");
    assert_eq!(periods[1].start_date.to_string(), "01-07-2022");
    assert_ne!(periods[0].reference_rate, periods[1].reference_rate);
}

#[test]
fn surcharge_follows_claim_start_for_whole_calculation() {
    let before = calculate_detailed_breakdown("1.000,00", "28-02-2013", "31-12-2020").unwrap();
    let after = calculate_detailed_breakdown("1.000,00", "01-03-2013", "31-12-2020").unwrap();

    assert!(before.len() > 10);
    assert!(before.iter().all(|p| p.surcharge_rate.as_percentage() == dec!(7)));
    assert!(after.iter().all(|p| p.surcharge_rate.as_percentage() == dec!(8)));
    for p in before.iter().chain(after.iter()) {
        assert_eq!(Some(p.total_rate), p.reference_rate.checked_add(p.surcharge_rate));
    }
}

#[test]
fn invalid_inputs_return_none() {
    assert_eq!(calculate_process_interest("0", "01-01-2020", "01-01-2021"), Ok(None));
    assert_eq!(calculate_process_interest("1000", "32-01-2020", "01-01-2021"), Ok(None));
    assert_eq!(calculate_process_interest("1000", "01-01-2021", "01-01-2020"), Ok(None));
    assert!(calculate_detailed_breakdown("0", "01-01-2020", "01-01-2021").unwrap().is_empty());
}

#[test]
fn concrete_scenario() {
    // 10000 * 9.90% * 181 / 365 = 490.9315...
    let interest = calculate_process_interest("10.000,00", "01-01-2023", "30-06-2023").unwrap();
    assert_eq!(interest, Some(Money::from_decimal(dec!(490.93))));
    assert_eq!(format_amount(interest), "490,93");
}

#[test]
fn coverage_gap_is_an_error() {
    let err = calculate_process_interest("1000", "31-12-2001", "31-01-2002").unwrap_err();
    assert_eq!(
        err,
        ProcessInterestError::RateNotAvailable { date: CalendarDate::parse("31-12-2001").unwrap() }
    );
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                calculate_process_interest("55.000,00", "15-05-2008", "15-05-2024").unwrap()
            })
        })
        .collect();

    let results: Vec<Option<Money>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results[0].is_some());
    assert!(results.iter().all(|r| *r == results[0]));
}
