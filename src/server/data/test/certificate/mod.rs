use crate::server::data::certificate::CertificateRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::observer::create_observer};

mod create;
mod revoke;
