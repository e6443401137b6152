//! Historical election participation domain models.

use crate::model::history::{HistoryAnalysisDto, ParishTurnoutSummaryDto, TurnoutDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TurnoutRecord {
    pub parish: &'static str,
    pub year: i32,
    pub election: &'static str,
    pub registered_voters: u32,
    pub turnout_percent: f64,
}

impl TurnoutRecord {
    pub fn into_dto(self) -> TurnoutDto {
        TurnoutDto {
            parish: self.parish.to_string(),
            year: self.year,
            election: self.election.to_string(),
            registered_voters: self.registered_voters,
            turnout_percent: self.turnout_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParishTurnoutSummary {
    pub parish: String,
    pub elections: Vec<TurnoutRecord>,
    pub min_turnout_percent: f64,
    pub max_turnout_percent: f64,
    pub mean_turnout_percent: f64,
}

impl ParishTurnoutSummary {
    pub fn into_dto(self) -> ParishTurnoutSummaryDto {
        ParishTurnoutSummaryDto {
            parish: self.parish,
            elections: self.elections.into_iter().map(|e| e.into_dto()).collect(),
            min_turnout_percent: self.min_turnout_percent,
            max_turnout_percent: self.max_turnout_percent,
            mean_turnout_percent: self.mean_turnout_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryAnalysis {
    pub parish: String,
    pub narrative: String,
    pub from_model: bool,
}

impl HistoryAnalysis {
    pub fn into_dto(self) -> HistoryAnalysisDto {
        HistoryAnalysisDto {
            parish: self.parish,
            narrative: self.narrative,
            source: if self.from_model { "model" } else { "fallback" }.to_string(),
        }
    }
}
