use crate::server::data::{traffic::TrafficReportRepository, weather::WeatherReportRepository};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::polling_station::create_station};

mod traffic;
mod weather;
