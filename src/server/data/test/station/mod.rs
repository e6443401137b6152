use crate::server::data::station::StationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::polling_station::PollingStationFactory};

mod create;
mod get_paginated;
mod set_active;
