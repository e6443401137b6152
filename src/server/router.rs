use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        alert, auth, certificate, conditions, history, observer, prediction, settings, station,
        training, user,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Console users
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route("/api/users/{user_id}/admin", put(user::set_admin))
        .route(
            "/api/users/{user_id}/login-code",
            post(user::issue_login_code),
        )
        // Observers
        .route(
            "/api/observers",
            get(observer::get_observers).post(observer::register_observer),
        )
        .route(
            "/api/observers/{observer_id}",
            get(observer::get_observer)
                .put(observer::update_observer)
                .delete(observer::delete_observer),
        )
        .route(
            "/api/observers/{observer_id}/activate",
            post(observer::activate_observer),
        )
        .route(
            "/api/observers/{observer_id}/suspend",
            post(observer::suspend_observer),
        )
        .route(
            "/api/observers/{observer_id}/verify",
            post(observer::verify_observer),
        )
        .route(
            "/api/observers/{observer_id}/station",
            put(observer::assign_station).delete(observer::unassign_station),
        )
        .route(
            "/api/observers/{observer_id}/certificates",
            get(observer::get_observer_certificates),
        )
        .route(
            "/api/observers/{observer_id}/enrollments",
            get(observer::get_observer_enrollments),
        )
        // Polling stations (monitoring targets)
        .route(
            "/api/stations",
            get(station::get_stations).post(station::create_station),
        )
        .route(
            "/api/stations/{station_id}",
            get(station::get_station)
                .put(station::update_station)
                .delete(station::delete_station),
        )
        .route(
            "/api/stations/{station_id}/monitoring",
            put(station::set_monitoring),
        )
        // Training
        .route(
            "/api/courses",
            get(training::get_courses).post(training::create_course),
        )
        .route(
            "/api/courses/{course_id}",
            get(training::get_course)
                .put(training::update_course)
                .delete(training::remove_course),
        )
        .route(
            "/api/courses/{course_id}/enrollments",
            post(training::enroll_observer),
        )
        .route(
            "/api/enrollments/{enrollment_id}/score",
            post(training::record_score),
        )
        // Certificates
        .route("/api/certificates", post(certificate::issue_certificate))
        .route(
            "/api/certificates/verify/{serial}",
            get(certificate::verify_certificate),
        )
        .route(
            "/api/certificates/{certificate_id}/revoke",
            post(certificate::revoke_certificate),
        )
        // Emergency alerts
        .route(
            "/api/alerts",
            get(alert::get_alerts).post(alert::create_alert),
        )
        .route("/api/alerts/{alert_id}", get(alert::get_alert))
        .route("/api/alerts/{alert_id}/resolve", post(alert::resolve_alert))
        .route(
            "/api/alerts/{alert_id}/rebroadcast",
            post(alert::rebroadcast_alert),
        )
        // Admin settings
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::upsert_setting),
        )
        .route(
            "/api/settings/validate/{provider}",
            post(settings::validate_provider),
        )
        .route(
            "/api/settings/{key}",
            get(settings::get_setting).delete(settings::delete_setting),
        )
        // Traffic & weather conditions
        .route("/api/conditions/snapshot", get(conditions::get_snapshot))
        .route(
            "/api/stations/{station_id}/conditions",
            get(conditions::get_station_conditions),
        )
        .route(
            "/api/stations/{station_id}/conditions/history",
            get(conditions::get_history),
        )
        .route(
            "/api/stations/{station_id}/conditions/summary",
            get(conditions::get_summary),
        )
        // AI traffic prediction
        .route(
            "/api/stations/{station_id}/prediction",
            get(prediction::get_prediction),
        )
        // Historical election data
        .route("/api/history/turnout", get(history::get_turnout))
        .route(
            "/api/history/parishes/{parish}",
            get(history::get_parish_summary),
        )
        .route(
            "/api/history/parishes/{parish}/analysis",
            get(history::get_parish_analysis),
        )
}
