use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Competition {
    Solo,
    #[default]
    Maybe,
    Competitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancingType {
    Fha,
    Va,
    #[default]
    Conv,
    Cash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SaleContingency {
    NeedToSell,
    #[default]
    NoSale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InspectionType {
    Full,
    #[default]
    ALaCarte,
    AsIs,
    InfoOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppraisalType {
    #[default]
    Yes,
    GapCover,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancingContingency {
    #[default]
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxSplit {
    #[default]
    Split,
    Buyer100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitlePreference {
    #[default]
    SellerPref,
    BuyerPref,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Commission {
    #[default]
    SellerPays,
    BuyerPays,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rentback {
    #[default]
    None,
    Paid,
    Free,
}

/// The flat term record both engines evaluate. Always complete: every field
/// has a default, so a scenario is never partially valid.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferInputs {
    pub competition: Competition,
    pub financing_type: FinancingType,
    pub down_payment_pct: f64,
    pub sale_contingency: SaleContingency,
    pub emd_pct: f64,
    pub inspection_type: InspectionType,
    pub appraisal_type: AppraisalType,
    pub appraisal_gap_amount: u64,
    pub financing_contingency: FinancingContingency,
    pub tax_split: TaxSplit,
    pub title_preference: TitlePreference,
    pub commission: Commission,
    pub rentback: Rentback,
    pub list_price: u64,
    pub offer_price: u64,
}

impl Default for OfferInputs {
    fn default() -> Self {
        Self {
            competition: Competition::default(),
            financing_type: FinancingType::default(),
            down_payment_pct: 20.0,
            sale_contingency: SaleContingency::default(),
            emd_pct: 5.0,
            inspection_type: InspectionType::default(),
            appraisal_type: AppraisalType::default(),
            appraisal_gap_amount: 0,
            financing_contingency: FinancingContingency::default(),
            tax_split: TaxSplit::default(),
            title_preference: TitlePreference::default(),
            commission: Commission::default(),
            rentback: Rentback::default(),
            list_price: 0,
            offer_price: 0,
        }
    }
}

/// Free-text context that does not move the score but travels with the
/// scenario and its export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub property_address: String,
    pub buyer_names: String,
    pub settlement_date: String,
    pub total_cash: u64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Financing {
    #[serde(rename = "type")]
    pub kind: FinancingType,
    pub down_pct: f64,
}

impl Default for Financing {
    fn default() -> Self {
        Self {
            kind: FinancingType::default(),
            down_pct: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inspection {
    #[serde(rename = "type")]
    pub kind: InspectionType,
    /// Specific tests requested under an a-la-carte inspection (radon, mold, ...).
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appraisal {
    #[serde(rename = "type")]
    pub kind: AppraisalType,
    /// Dollars guaranteed when kind = gapCover; ignored otherwise.
    pub gap_amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxesTitle {
    pub tax_split: TaxSplit,
    pub title_pref: TitlePreference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub list_price: u64,
    pub offer_price: u64,
    pub escalation_cap: u64,
    pub escalation_by: u64,
}

/// Full scenario as the user writes it and as it is exported: grouped by
/// logical section with the camelCase key names shared by previously exported
/// scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    pub competition: Competition,
    pub basics: Basics,
    pub financing: Financing,
    pub sale_cont: SaleContingency,
    pub emd_pct: f64,
    pub inspection: Inspection,
    pub appraisal: Appraisal,
    pub fin_cont: FinancingContingency,
    pub taxes_title: TaxesTitle,
    pub commission: Commission,
    pub price: Price,
    pub rentback: Rentback,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            competition: Competition::default(),
            basics: Basics::default(),
            financing: Financing::default(),
            sale_cont: SaleContingency::default(),
            emd_pct: 5.0,
            inspection: Inspection::default(),
            appraisal: Appraisal::default(),
            fin_cont: FinancingContingency::default(),
            taxes_title: TaxesTitle::default(),
            commission: Commission::default(),
            price: Price::default(),
            rentback: Rentback::default(),
        }
    }
}

impl Scenario {
    /// Clamp numeric fields to their documented domains. The engines assume
    /// pre-sanitized input and perform no validation of their own.
    pub fn normalize(&mut self) {
        self.financing.down_pct = clamp_finite(self.financing.down_pct, 0.0, 100.0);
        self.emd_pct = clamp_finite(self.emd_pct, 0.0, 20.0);
    }

    /// Project the grouped scenario onto the flat record the engines take.
    pub fn offer_inputs(&self) -> OfferInputs {
        OfferInputs {
            competition: self.competition,
            financing_type: self.financing.kind,
            down_payment_pct: self.financing.down_pct,
            sale_contingency: self.sale_cont,
            emd_pct: self.emd_pct,
            inspection_type: self.inspection.kind,
            appraisal_type: self.appraisal.kind,
            appraisal_gap_amount: self.appraisal.gap_amount,
            financing_contingency: self.fin_cont,
            tax_split: self.taxes_title.tax_split,
            title_preference: self.taxes_title.title_pref,
            commission: self.commission,
            rentback: self.rentback,
            list_price: self.price.list_price,
            offer_price: self.price.offer_price,
        }
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_ids_use_schema_names() {
        let toml_str = r#"
competition = "competitive"
saleCont = "needToSell"

[financing]
type = "fha"

[inspection]
type = "aLaCarte"

[appraisal]
type = "gapCover"
gapAmount = 15000

[taxesTitle]
taxSplit = "buyer100"
titlePref = "buyerPref"
"#;
        let scenario: Scenario = toml::from_str(toml_str).expect("scenario should parse");
        assert_eq!(scenario.competition, Competition::Competitive);
        assert_eq!(scenario.sale_cont, SaleContingency::NeedToSell);
        assert_eq!(scenario.financing.kind, FinancingType::Fha);
        assert_eq!(scenario.inspection.kind, InspectionType::ALaCarte);
        assert_eq!(scenario.appraisal.kind, AppraisalType::GapCover);
        assert_eq!(scenario.appraisal.gap_amount, 15000);
        assert_eq!(scenario.taxes_title.tax_split, TaxSplit::Buyer100);
        assert_eq!(scenario.taxes_title.title_pref, TitlePreference::BuyerPref);
    }

    #[test]
    fn empty_scenario_is_the_neutral_default() {
        let scenario: Scenario = toml::from_str("").expect("empty scenario should parse");
        assert_eq!(scenario, Scenario::default());
        assert_eq!(scenario.competition, Competition::Maybe);
        assert_eq!(scenario.financing.down_pct, 20.0);
        assert_eq!(scenario.emd_pct, 5.0);
        assert_eq!(scenario.fin_cont, FinancingContingency::Yes);
        assert_eq!(scenario.rentback, Rentback::None);
    }

    #[test]
    fn normalize_clamps_numeric_domains() {
        let mut scenario = Scenario::default();
        scenario.financing.down_pct = 140.0;
        scenario.emd_pct = -3.0;
        scenario.normalize();
        assert_eq!(scenario.financing.down_pct, 100.0);
        assert_eq!(scenario.emd_pct, 0.0);

        scenario.emd_pct = f64::NAN;
        scenario.normalize();
        assert_eq!(scenario.emd_pct, 0.0);
    }

    #[test]
    fn offer_inputs_projection_carries_every_scored_field() {
        let mut scenario = Scenario::default();
        scenario.competition = Competition::Solo;
        scenario.financing.kind = FinancingType::Cash;
        scenario.financing.down_pct = 100.0;
        scenario.appraisal.kind = AppraisalType::GapCover;
        scenario.appraisal.gap_amount = 25000;
        scenario.price.list_price = 875_000;
        scenario.price.offer_price = 895_000;

        let inputs = scenario.offer_inputs();
        assert_eq!(inputs.competition, Competition::Solo);
        assert_eq!(inputs.financing_type, FinancingType::Cash);
        assert_eq!(inputs.down_payment_pct, 100.0);
        assert_eq!(inputs.appraisal_type, AppraisalType::GapCover);
        assert_eq!(inputs.appraisal_gap_amount, 25000);
        assert_eq!(inputs.list_price, 875_000);
        assert_eq!(inputs.offer_price, 895_000);
    }

    #[test]
    fn scenario_json_uses_grouped_camel_case_keys() {
        let json = serde_json::to_string(&Scenario::default()).expect("scenario should serialize");
        for key in [
            "\"competition\"",
            "\"basics\"",
            "\"financing\"",
            "\"saleCont\"",
            "\"emdPct\"",
            "\"inspection\"",
            "\"appraisal\"",
            "\"finCont\"",
            "\"taxesTitle\"",
            "\"commission\"",
            "\"price\"",
            "\"rentback\"",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
        assert!(json.contains("\"propertyAddress\""));
        assert!(json.contains("\"downPct\""));
        assert!(json.contains("\"gapAmount\""));
        assert!(json.contains("\"listPrice\""));
    }
}
