use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct TurnoutDto {
    pub parish: String,
    pub year: i32,
    pub election: String,
    pub registered_voters: u32,
    pub turnout_percent: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ParishTurnoutSummaryDto {
    pub parish: String,
    pub elections: Vec<TurnoutDto>,
    pub min_turnout_percent: f64,
    pub max_turnout_percent: f64,
    pub mean_turnout_percent: f64,
}

#[derive(Serialize, Deserialize)]
pub struct HistoryAnalysisDto {
    pub parish: String,
    pub narrative: String,
    pub source: String,
}
