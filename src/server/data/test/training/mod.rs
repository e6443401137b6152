use crate::server::data::{course::CourseRepository, enrollment::EnrollmentRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        observer::create_observer,
        training_course::{create_course, TrainingCourseFactory},
    },
};

mod course;
mod enrollment;
