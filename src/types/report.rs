use serde::Serialize;
use std::fmt;

/// Qualitative band for a final score. Boundaries are inclusive lower bounds,
/// evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "Needs Work")]
    NeedsWork,
    Competitive,
    Strong,
    Elite,
}

impl Label {
    pub fn for_score(score: u8) -> Self {
        if score >= 85 {
            Label::Elite
        } else if score >= 70 {
            Label::Strong
        } else if score >= 55 {
            Label::Competitive
        } else {
            Label::NeedsWork
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::NeedsWork => "Needs Work",
            Label::Competitive => "Competitive",
            Label::Strong => "Strong",
            Label::Elite => "Elite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub label: Label,
}

/// Discrete contribution of one term, so reports can show where the points
/// came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub term: &'static str,
    pub points: f64,
}

impl ScoreComponent {
    pub fn new(term: &'static str, points: f64) -> Self {
        Self { term, points }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferReport {
    pub score: u8,
    pub label: Label,
    pub components: Vec<ScoreComponent>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_bands_have_inclusive_lower_bounds() {
        assert_eq!(Label::for_score(0), Label::NeedsWork);
        assert_eq!(Label::for_score(54), Label::NeedsWork);
        assert_eq!(Label::for_score(55), Label::Competitive);
        assert_eq!(Label::for_score(69), Label::Competitive);
        assert_eq!(Label::for_score(70), Label::Strong);
        assert_eq!(Label::for_score(84), Label::Strong);
        assert_eq!(Label::for_score(85), Label::Elite);
        assert_eq!(Label::for_score(100), Label::Elite);
    }

    #[test]
    fn needs_work_serializes_with_a_space() {
        let json = serde_json::to_string(&Label::NeedsWork).expect("label should serialize");
        assert_eq!(json, "\"Needs Work\"");
        assert_eq!(Label::NeedsWork.to_string(), "Needs Work");
    }
}
