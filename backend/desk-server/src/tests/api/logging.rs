use crate::ApiError;

use desk_db::DbError;
use desk_service::ServiceError;

use std::sync::Mutex;
use std::thread::{self, ThreadId};

use axum::response::IntoResponse;
use http::StatusCode;
use log::{LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(ThreadId, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((thread::current().id(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn install() {
    // Another test may have installed it already
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

fn lines_on_this_thread() -> Vec<String> {
    let me = thread::current().id();
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(id, _)| *id == me)
        .map(|(_, line)| line.clone())
        .collect()
}

#[test]
fn test_database_failure_is_logged_once_when_rendered() {
    install();
    let source = DbError::from(sqlx::Error::Configuration("pool misconfigured".into()));

    let response = ApiError::from(ServiceError::from(source)).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let lines = lines_on_this_thread();
    assert_eq!(lines.len(), 1, "unexpected log lines: {:?}", lines);
    assert!(lines[0].starts_with("Internal error: Database operation failed"));
}

#[test]
fn test_not_found_is_logged_once_when_rendered() {
    install();

    let response = ApiError::from(ServiceError::not_found("Ticket 9 not found")).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(lines_on_this_thread().len(), 1);
}
