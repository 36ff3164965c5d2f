//! Convective outlook models

use serde::{Deserialize, Serialize};

use crate::types::Ring;

/// Value of [`OutlookRecord::kind`] for every categorical outlook
pub const CONVECTIVE: &str = "convective";

/// Categorical severe-weather risk, lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCode {
    Mrgl,
    Slgt,
    Enh,
    Mdt,
    High,
}

/// Label prefixes checked in order; the first match wins
const LABEL_PREFIXES: &[(&str, RiskCode)] = &[
    ("THUNDER", RiskCode::Mrgl),
    ("MARGINAL", RiskCode::Mrgl),
    ("SLIGHT", RiskCode::Slgt),
    ("ENHANCED", RiskCode::Enh),
    ("MODERATE", RiskCode::Mdt),
    ("HIGH", RiskCode::High),
];

impl RiskCode {
    /// Map an upstream free-text label onto the risk vocabulary
    ///
    /// Unknown and empty labels fall back to [`RiskCode::Mrgl`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_uppercase();
        LABEL_PREFIXES
            .iter()
            .find(|(prefix, _)| label.starts_with(prefix))
            .map(|(_, code)| *code)
            .unwrap_or(RiskCode::Mrgl)
    }

    pub fn code(&self) -> &'static str {
        match self {
            RiskCode::Mrgl => "MRGL",
            RiskCode::Slgt => "SLGT",
            RiskCode::Enh => "ENH",
            RiskCode::Mdt => "MDT",
            RiskCode::High => "HIGH",
        }
    }
}

/// Outlook day, counted from today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlookDay {
    #[default]
    One,
    Two,
    Three,
}

impl OutlookDay {
    /// Coerce a day number; anything outside 1..=3 becomes day 1
    pub fn from_number(day: i64) -> Self {
        match day {
            2 => OutlookDay::Two,
            3 => OutlookDay::Three,
            _ => OutlookDay::One,
        }
    }

    /// Coerce a raw query or environment value
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(Self::from_number)
            .unwrap_or_default()
    }

    pub fn number(&self) -> u8 {
        match self {
            OutlookDay::One => 1,
            OutlookDay::Two => 2,
            OutlookDay::Three => 3,
        }
    }

    /// Categorical outlook layer id in the upstream map service
    pub fn layer_id(&self) -> u32 {
        match self {
            OutlookDay::One => 1,
            OutlookDay::Two => 9,
            OutlookDay::Three => 17,
        }
    }
}

/// A categorical outlook area, normalized for the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlookRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_level: RiskCode,
    pub probability: String,
    pub description: String,
    pub day: u8,
    pub polygon: Ring,
}

/// Body of `GET /api/outlooks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlooksResponse {
    pub outlooks: Vec<OutlookRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutlooksResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            outlooks: Vec::new(),
            error: Some(error.into()),
        }
    }
}
