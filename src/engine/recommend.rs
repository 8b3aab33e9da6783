use crate::types::offer::{
    AppraisalType, Commission, Competition, FinancingType, InspectionType, OfferInputs, Rentback,
    TaxSplit, TitlePreference,
};

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Heuristic advisory rules over the raw terms, independent of the numeric
/// score. Rules append in a fixed order and never suppress each other; the
/// list is cut to the first five matches, and a balanced offer gets a single
/// fallback line.
pub fn compute_recommendations(inputs: &OfferInputs) -> Vec<String> {
    let mut recommendations = Vec::new();

    if inputs.competition != Competition::Solo && inputs.offer_price <= inputs.list_price {
        recommendations.push(
            "Raise your offer 0.5-1.0% above list price, or add an escalation clause.".to_string(),
        );
    }

    if inputs.emd_pct < 5.0 {
        recommendations.push(
            "Increase your earnest money deposit to at least 5% to signal commitment.".to_string(),
        );
    }

    if inputs.financing_type != FinancingType::Cash && inputs.down_payment_pct < 20.0 {
        recommendations.push(
            "Raise your down payment to 20% or more to strengthen financed terms.".to_string(),
        );
    }

    if inputs.inspection_type != InspectionType::AsIs
        && inputs.competition == Competition::Competitive
    {
        recommendations.push(
            "Reduce inspection scope or switch to an information-only inspection.".to_string(),
        );
    }

    if inputs.appraisal_type == AppraisalType::Yes && inputs.competition != Competition::Solo {
        recommendations.push(
            "Guarantee a partial appraisal gap to keep your price firm.".to_string(),
        );
    }

    if inputs.tax_split != TaxSplit::Split || inputs.title_preference != TitlePreference::SellerPref
    {
        recommendations.push(
            "Align with the seller's preferred title company and a standard 50/50 tax split."
                .to_string(),
        );
    }

    if inputs.commission != Commission::BuyerPays
        && inputs.competition == Competition::Competitive
    {
        recommendations
            .push("Offer to cover the buyer-agency commission yourself.".to_string());
    }

    if inputs.rentback != Rentback::None {
        recommendations.push(
            "Spell out rent-back terms explicitly: duration, rate, and deposit.".to_string(),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    if recommendations.is_empty() {
        recommendations.push(
            "Offer terms look balanced. Review the final numbers with your agent before drafting."
                .to_string(),
        );
    }
    recommendations
}
