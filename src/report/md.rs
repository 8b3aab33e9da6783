use crate::engine::score::BASE_SCORE;
use crate::types::report::OfferReport;

pub fn to_markdown(report: &OfferReport) -> String {
    let mut output = String::new();
    output.push_str("# Offer Strength Report\n\n");
    output.push_str(&format!(
        "Score: {} / 100 ({})\n\n",
        report.score, report.label
    ));

    output.push_str("## Breakdown\n\n");
    output.push_str(&format!("- base: {BASE_SCORE:.0}\n"));
    for component in &report.components {
        output.push_str(&format!("- {}: {:+.1}\n", component.term, component.points));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }

    output
}
