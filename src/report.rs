//! serializable report view for the statement/pdf generator
use serde::{Deserialize, Serialize};

use crate::interest::{AccrualResult, Period};

/// one claim, rendered in the local conventions
///
/// every value comes from an `AccrualResult`; nothing is recomputed here.
/// line amounts are rounded for display only, so they can differ from the
/// total by a cent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestReport {
    pub principal: String,
    pub start_date: String,
    pub end_date: String,
    pub surcharge_rate: String,
    pub total_days: u32,
    pub lines: Vec<ReportLine>,
    pub total_interest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub start_date: String,
    pub end_date: String,
    pub principal: String,
    pub reference_rate: String,
    pub surcharge_rate: String,
    pub total_rate: String,
    pub days: u32,
    pub interest: String,
}

impl ReportLine {
    pub fn from_period(period: &Period) -> Self {
        ReportLine {
            start_date: period.start_date.format(),
            end_date: period.end_date.format(),
            principal: period.principal.format_local(),
            reference_rate: period.reference_rate.format_local(),
            surcharge_rate: period.surcharge_rate.format_local(),
            total_rate: period.total_rate.format_local(),
            days: period.day_count,
            interest: period.interest.format_local(),
        }
    }
}

impl InterestReport {
    pub fn from_result(result: &AccrualResult) -> Self {
        InterestReport {
            principal: result.principal.format_local(),
            start_date: result.start_date.format(),
            end_date: result.end_date.format(),
            surcharge_rate: result.surcharge_rate.format_local(),
            total_days: result.total_days(),
            lines: result.periods.iter().map(ReportLine::from_period).collect(),
            total_interest: result.total_interest.format_local(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ProcessInterestCalculator;

    #[test]
    fn test_report_mirrors_breakdown() {
        let calc = ProcessInterestCalculator::statutory().unwrap();
        let result = calc.calculate("10.000,00", "15-11-2022", "30-06-2023").unwrap().unwrap();
        let report = InterestReport::from_result(&result);

        assert_eq!(report.principal, "10.000,00");
        assert_eq!(report.start_date, "15-11-2022");
        assert_eq!(report.end_date, "30-06-2023");
        assert_eq!(report.surcharge_rate, "8,00%");
        assert_eq!(report.lines.len(), result.periods.len());
        assert_eq!(report.total_days, 47 + 181);

        let first = &report.lines[0];
        assert_eq!(first.start_date, "15-11-2022");
        assert_eq!(first.end_date, "31-12-2022");
        assert_eq!(first.reference_rate, "-0,25%");
        assert_eq!(first.total_rate, "7,75%");
        assert_eq!(first.days, 47);

        let second = &report.lines[1];
        assert_eq!(second.total_rate, "9,90%");
        assert_eq!(second.interest, "490,93");
        assert_eq!(report.total_interest, result.total_interest.format_local());
    }

    #[test]
    fn test_report_json() {
        let calc = ProcessInterestCalculator::statutory().unwrap();
        let result = calc.calculate("2.500", "01-01-2023", "31-03-2023").unwrap().unwrap();
        let json = InterestReport::from_result(&result).to_json_pretty().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["principal"], "2.500,00");
        assert_eq!(value["lines"][0]["days"], 90);
        assert_eq!(value["lines"].as_array().unwrap().len(), 1);
    }
}
