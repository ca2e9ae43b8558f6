//! Plain-text report rendering.
//!
//! A one-shot, write-only render: field order is fixed and nothing here is
//! ever parsed back. Patient name first, then test name, score, category,
//! numbered recommendations, generation timestamp, disclaimer.

use carelens_contracts::report::RiskReport;

/// Render the report as the downloadable plain-text summary.
pub fn render_text(report: &RiskReport) -> String {
    let recommendations = report
        .recommendations
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Lab Test Report\n\
         \n\
         Patient Name: {}\n\
         Test Name: {}\n\
         Risk Score: {}\n\
         Risk Category: {}\n\
         \n\
         Recommendations:\n\
         {}\n\
         \n\
         Generated At: {}\n\
         \n\
         Disclaimer: {}\n",
        report.patient_name,
        report.test_name,
        report.risk_score,
        report.risk_category.label(),
        recommendations,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.disclaimer,
    )
}

/// The conventional download name for a text report.
pub fn text_file_name(report: &RiskReport) -> String {
    format!("{}_{}_Report.txt", report.patient_name, report.test_name)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use carelens_contracts::report::{
        ReportId, RiskCategory, RiskProfileSummary, RiskReport, REPORT_DISCLAIMER,
    };

    use super::*;

    fn sample_report() -> RiskReport {
        RiskReport {
            report_id: ReportId::new(),
            patient_name: "Ada Example".to_string(),
            test_name: "Lipid Profile".to_string(),
            risk_score: 35,
            risk_category: RiskCategory::Moderate,
            recommendations: vec![
                "Lifestyle modifications and potential medication consultation advised."
                    .to_string(),
            ],
            risk_profile: RiskProfileSummary {
                age_group: "low_risk_young".to_string(),
                potential_conditions: vec!["minimal_intervention".to_string()],
                risk_factors: vec!["healthy_lifestyle".to_string()],
            },
            generated_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            disclaimer: REPORT_DISCLAIMER.to_string(),
        }
    }

    #[test]
    fn fields_appear_in_fixed_order() {
        let text = render_text(&sample_report());
        let positions: Vec<usize> = [
            "Patient Name: Ada Example",
            "Test Name: Lipid Profile",
            "Risk Score: 35",
            "Risk Category: Moderate Risk",
            "Recommendations:",
            "Generated At: 2026-03-14 09:26:53 UTC",
            "Disclaimer:",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing '{}'", needle)))
        .collect();

        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "field order violated:\n{}", text);
        }
    }

    #[test]
    fn recommendations_are_numbered_from_one() {
        let mut report = sample_report();
        report.recommendations = vec!["First.".to_string(), "Second.".to_string()];
        let text = render_text(&report);
        assert!(text.contains("1. First.\n2. Second."));
    }

    #[test]
    fn file_name_combines_patient_and_test() {
        assert_eq!(
            text_file_name(&sample_report()),
            "Ada Example_Lipid Profile_Report.txt"
        );
    }
}
