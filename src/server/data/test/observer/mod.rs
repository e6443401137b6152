use crate::server::data::observer::ObserverRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{observer::ObserverFactory, polling_station::create_station},
};

mod create;
mod get_paginated;
mod set_station;
mod set_status;
mod update_contact;
