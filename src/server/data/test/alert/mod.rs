use crate::server::data::alert::AlertRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::create_admin};

mod create;
mod get_paginated;
mod resolve;
