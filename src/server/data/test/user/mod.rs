use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod admin_exists;
mod create;
mod get_all_paginated;
mod set_admin;
