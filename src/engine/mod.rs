pub mod recommend;
pub mod score;

use crate::types::offer::Scenario;
use crate::types::report::OfferReport;
use tracing::debug;

/// Run both engines over one scenario. Pure and synchronous; callers just
/// re-invoke it whenever the scenario changes.
pub fn evaluate(scenario: &Scenario) -> OfferReport {
    let inputs = scenario.offer_inputs();
    let result = score::compute_score(&inputs);
    let components = score::score_components(&inputs);
    let recommendations = recommend::compute_recommendations(&inputs);
    debug!(score = result.score, label = %result.label, "scenario evaluated");

    OfferReport {
        score: result.score,
        label: result.label,
        components,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::offer::{
        AppraisalType, Commission, Competition, FinancingContingency, FinancingType,
        InspectionType, Rentback, SaleContingency, TaxSplit,
    };
    use crate::types::report::Label;

    #[test]
    fn all_neutral_defaults_score_62_competitive() {
        let report = evaluate(&Scenario::default());
        assert_eq!(report.score, 62);
        assert_eq!(report.label, Label::Competitive);
    }

    #[test]
    fn max_strength_offer_clamps_to_100_elite() {
        let mut scenario = Scenario::default();
        scenario.competition = Competition::Solo;
        scenario.financing.kind = FinancingType::Cash;
        scenario.financing.down_pct = 100.0;
        scenario.sale_cont = SaleContingency::NoSale;
        scenario.emd_pct = 20.0;
        scenario.inspection.kind = InspectionType::AsIs;
        scenario.appraisal.kind = AppraisalType::No;
        scenario.fin_cont = FinancingContingency::No;
        scenario.taxes_title.tax_split = TaxSplit::Buyer100;
        scenario.commission = Commission::BuyerPays;
        scenario.rentback = Rentback::Free;
        scenario.price.list_price = 1_000_000;
        scenario.price.offer_price = 1_000_000;

        let report = evaluate(&scenario);
        assert_eq!(report.score, 100);
        assert_eq!(report.label, Label::Elite);
    }

    #[test]
    fn weak_competitive_offer_needs_work_and_suggests_raising() {
        let mut scenario = Scenario::default();
        scenario.competition = Competition::Competitive;
        scenario.financing.kind = FinancingType::Fha;
        scenario.financing.down_pct = 5.0;
        scenario.emd_pct = 0.0;
        scenario.inspection.kind = InspectionType::Full;
        scenario.appraisal.kind = AppraisalType::Yes;
        scenario.fin_cont = FinancingContingency::Yes;
        scenario.price.list_price = 500_000;
        scenario.price.offer_price = 480_000;

        let report = evaluate(&scenario);
        assert!(report.score < 55, "got {}", report.score);
        assert_eq!(report.label, Label::NeedsWork);
        assert!(report
            .recommendations
            .iter()
            .any(|line| line.contains("above list price")));
    }

    #[test]
    fn recommendations_stay_within_the_advertised_bounds() {
        for scenario in [Scenario::default(), {
            let mut worst = Scenario::default();
            worst.competition = Competition::Competitive;
            worst.emd_pct = 0.0;
            worst.financing.down_pct = 0.0;
            worst.rentback = Rentback::Paid;
            worst.taxes_title.tax_split = TaxSplit::Buyer100;
            worst
        }] {
            let report = evaluate(&scenario);
            assert!(!report.recommendations.is_empty());
            assert!(report.recommendations.len() <= recommend::MAX_RECOMMENDATIONS);
        }
    }

    #[test]
    fn evaluate_is_idempotent() {
        let scenario = Scenario::default();
        let first = evaluate(&scenario);
        let second = evaluate(&scenario);
        assert_eq!(first.score, second.score);
        assert_eq!(first.recommendations, second.recommendations);
    }
}
