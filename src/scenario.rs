use crate::error::{OfferError, Result};
use crate::types::offer::Scenario;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SCENARIO_FILE: &str = "offer.toml";

/// Starter scenario with every field at its neutral default. Partial files
/// are fine: omitted keys fall back to these same defaults on load.
const TEMPLATE: &str = r#"# offerscore scenario
# Enum values use the export-schema ids (camelCase).

# solo | maybe | competitive
competition = "maybe"

# needToSell | noSale
saleCont = "noSale"

# Earnest money deposit, % of offer (0-20)
emdPct = 5

# yes | no (can the buyer terminate if the loan is denied?)
finCont = "yes"

# sellerPays | buyerPays
commission = "sellerPays"

# none | paid | free
rentback = "none"

[basics]
propertyAddress = ""
buyerNames = ""
settlementDate = ""
totalCash = 0
notes = ""

[financing]
# fha | va | conv | cash
type = "conv"
downPct = 20

[inspection]
# full | aLaCarte | asIs | infoOnly
type = "aLaCarte"
checks = []

[appraisal]
# yes | gapCover | no
type = "yes"
gapAmount = 0

[taxesTitle]
# split | buyer100
taxSplit = "split"
# sellerPref | buyerPref
titlePref = "sellerPref"

[price]
listPrice = 0
offerPrice = 0
escalationCap = 0
escalationBy = 0
"#;

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    if !path.exists() {
        return Err(OfferError::ScenarioNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut scenario: Scenario = toml::from_str(&content)
        .map_err(|e| OfferError::ScenarioParse(format!("{}: {}", path.display(), e)))?;
    scenario.normalize();
    debug!(path = %path.display(), "scenario loaded");
    Ok(scenario)
}

/// Write the starter scenario. A directory path gets the default file name.
pub fn write_template(path: &Path, no_overwrite: bool) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(DEFAULT_SCENARIO_FILE)
    } else {
        path.to_path_buf()
    };
    if target.exists() && no_overwrite {
        return Err(OfferError::ScenarioExists(target.display().to_string()));
    }
    std::fs::write(&target, TEMPLATE)?;
    Ok(target)
}
