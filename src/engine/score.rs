use crate::types::offer::{
    AppraisalType, Commission, Competition, FinancingContingency, FinancingType, InspectionType,
    OfferInputs, Rentback, SaleContingency, TaxSplit, TitlePreference,
};
use crate::types::report::{Label, ScoreComponent, ScoreResult};

/// Neutral midpoint every offer starts from before term weights apply.
pub const BASE_SCORE: f64 = 60.0;

/// Weighted-sum strength score. Intermediate sums may leave [0,100]; rounding
/// and the final clamp happen last.
pub fn compute_score(inputs: &OfferInputs) -> ScoreResult {
    let total: f64 = BASE_SCORE
        + score_components(inputs)
            .iter()
            .map(|component| component.points)
            .sum::<f64>();
    let score = total.round().clamp(0.0, 100.0) as u8;
    ScoreResult {
        score,
        label: Label::for_score(score),
    }
}

/// Per-term contributions in evaluation order. Conditional bonuses
/// (appraisal gap, price premium) only appear when they apply.
pub fn score_components(inputs: &OfferInputs) -> Vec<ScoreComponent> {
    let mut components = vec![
        ScoreComponent::new("competition", competition_weight(inputs.competition)),
        ScoreComponent::new("financing", financing_weight(inputs.financing_type)),
        ScoreComponent::new("downPayment", down_payment_bonus(inputs.down_payment_pct)),
        ScoreComponent::new("saleCont", sale_contingency_weight(inputs.sale_contingency)),
        ScoreComponent::new("emd", emd_bonus(inputs.emd_pct)),
        ScoreComponent::new("inspection", inspection_weight(inputs.inspection_type)),
        ScoreComponent::new("appraisal", appraisal_weight(inputs.appraisal_type)),
        ScoreComponent::new(
            "finCont",
            financing_contingency_weight(inputs.financing_contingency),
        ),
        ScoreComponent::new("taxSplit", tax_split_weight(inputs.tax_split)),
        ScoreComponent::new("titlePref", title_preference_weight(inputs.title_preference)),
        ScoreComponent::new("commission", commission_weight(inputs.commission)),
        ScoreComponent::new("rentback", rentback_weight(inputs.rentback)),
    ];

    if inputs.appraisal_type == AppraisalType::GapCover {
        components.push(ScoreComponent::new(
            "appraisalGap",
            appraisal_gap_bonus(inputs.appraisal_gap_amount),
        ));
    }

    if inputs.list_price > 0 && inputs.offer_price > 0 {
        components.push(ScoreComponent::new(
            "pricePremium",
            price_premium_bonus(inputs.competition, inputs.list_price, inputs.offer_price),
        ));
    }

    components
}

fn competition_weight(value: Competition) -> f64 {
    match value {
        Competition::Solo => 10.0,
        Competition::Maybe => 0.0,
        Competition::Competitive => -10.0,
    }
}

fn financing_weight(value: FinancingType) -> f64 {
    match value {
        FinancingType::Fha => -15.0,
        FinancingType::Va => -12.0,
        FinancingType::Conv => 0.0,
        FinancingType::Cash => 20.0,
    }
}

fn sale_contingency_weight(value: SaleContingency) -> f64 {
    match value {
        SaleContingency::NeedToSell => -12.0,
        SaleContingency::NoSale => 6.0,
    }
}

fn inspection_weight(value: InspectionType) -> f64 {
    match value {
        InspectionType::Full => -6.0,
        InspectionType::ALaCarte => -2.0,
        InspectionType::AsIs => 10.0,
        InspectionType::InfoOnly => -1.0,
    }
}

fn appraisal_weight(value: AppraisalType) -> f64 {
    match value {
        AppraisalType::Yes => -10.0,
        AppraisalType::GapCover => 6.0,
        AppraisalType::No => 14.0,
    }
}

fn financing_contingency_weight(value: FinancingContingency) -> f64 {
    match value {
        FinancingContingency::Yes => -8.0,
        FinancingContingency::No => 8.0,
    }
}

fn tax_split_weight(value: TaxSplit) -> f64 {
    match value {
        TaxSplit::Split => 0.0,
        TaxSplit::Buyer100 => 8.0,
    }
}

fn title_preference_weight(value: TitlePreference) -> f64 {
    match value {
        TitlePreference::SellerPref => 4.0,
        TitlePreference::BuyerPref => -2.0,
    }
}

fn commission_weight(value: Commission) -> f64 {
    match value {
        Commission::SellerPays => 0.0,
        Commission::BuyerPays => 10.0,
    }
}

fn rentback_weight(value: Rentback) -> f64 {
    match value {
        Rentback::None => 0.0,
        Rentback::Paid => 3.0,
        Rentback::Free => 7.0,
    }
}

/// 10% down is the baseline; each extra point is worth 0.6, capped at +20.
fn down_payment_bonus(down_payment_pct: f64) -> f64 {
    ((down_payment_pct - 10.0) * 0.6).clamp(0.0, 20.0)
}

/// Step function over deposit tiers; boundaries are inclusive lower bounds.
fn emd_bonus(emd_pct: f64) -> f64 {
    if emd_pct >= 10.0 {
        12.0
    } else if emd_pct >= 5.0 {
        6.0
    } else if emd_pct >= 2.0 {
        2.0
    } else {
        -4.0
    }
}

/// +1 per full $5,000 guaranteed, capped at +10.
fn appraisal_gap_bonus(gap_amount: u64) -> f64 {
    (gap_amount / 5000).min(10) as f64
}

/// Premium over list, as whole percentage points. Non-solo offers earn 0.6
/// per point up to +12; a solo offer gets a flat +2 only past a 2% premium.
/// Callers guard list_price > 0.
fn price_premium_bonus(competition: Competition, list_price: u64, offer_price: u64) -> f64 {
    let premium = (offer_price as f64 - list_price as f64) / list_price as f64;
    if competition != Competition::Solo {
        ((premium * 100.0).round().max(0.0) * 0.6).min(12.0)
    } else if premium > 0.02 {
        2.0
    } else {
        0.0
    }
}
