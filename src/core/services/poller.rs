//! The polling loop
//!
//! One cycle is fetch → validate → parse → notify. Any error inside a cycle
//! is caught here, logged, and relayed to the chat with
//! consecutive-duplicate suppression. The loop never terminates on its own;
//! the sleep between cycles runs on both the success and the error path, so
//! the polling cadence is never shorter than the configured interval.

use std::thread;
use std::time::Duration;

use crate::core::models::{self, Session};
use crate::core::ports::{HomeworkApi, Messenger};
use crate::error::Error;

/// Fixed delay between poll cycles
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// What a single poll cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The most recent homework changed status and the chat was notified
    StatusChanged,
    /// The most recent homework still has the previously announced status
    Unchanged,
    /// The API reported no homework submissions at all
    NoHomework,
    /// The cycle failed; the error was logged and reported
    Failed,
}

/// Run one poll cycle, catching and reporting any error
pub fn run_cycle<A, M>(api: &A, messenger: &M, session: &mut Session) -> CycleOutcome
where
    A: HomeworkApi + ?Sized,
    M: Messenger + ?Sized,
{
    match poll(api, messenger, session) {
        Ok(outcome) => outcome,
        Err(error) => {
            report_failure(messenger, session, &error);
            CycleOutcome::Failed
        },
    }
}

/// Poll until the process is killed
///
/// With `once` set, a single cycle is run and the function returns, which
/// is the `--once` smoke-test mode.
pub fn run<A, M>(api: &A, messenger: &M, session: &mut Session, interval: Duration, once: bool)
where
    A: HomeworkApi + ?Sized,
    M: Messenger + ?Sized,
{
    loop {
        let outcome = run_cycle(api, messenger, session);
        log::debug!("cycle finished: {outcome:?}");
        if once {
            return;
        }
        thread::sleep(interval);
    }
}

fn poll<A, M>(api: &A, messenger: &M, session: &mut Session) -> Result<CycleOutcome, Error>
where
    A: HomeworkApi + ?Sized,
    M: Messenger + ?Sized,
{
    let body = api.homework_statuses(session.cursor)?;
    let page = models::check_response(&body)?;
    // The cursor moves only once the cycle is through; a failed cycle
    // refetches the same window, so nothing slips past the cursor.
    let next_cursor = page.current_date.unwrap_or_else(local_now);

    let Some(record) = page.latest() else {
        log::info!("no homework submissions reported");
        session.cursor = next_cursor;
        return Ok(CycleOutcome::NoHomework);
    };

    let status = models::raw_status(record)?;
    if session.last_status.as_deref() == Some(status) {
        log::info!("homework status unchanged ({status})");
        session.cursor = next_cursor;
        return Ok(CycleOutcome::Unchanged);
    }

    let text = models::notification(record)?;
    messenger.send(&text)?;
    // Recorded only after delivery so a failed send is retried next cycle.
    session.last_status = Some(status.to_string());
    session.cursor = next_cursor;
    Ok(CycleOutcome::StatusChanged)
}

fn report_failure<M>(messenger: &M, session: &mut Session, error: &Error)
where
    M: Messenger + ?Sized,
{
    let message = format!("Сбой в работе программы: {error}");
    log::error!("{message}");

    if session.last_error.as_deref() == Some(message.as_str()) {
        log::debug!("failure already reported, not resending");
        return;
    }
    match messenger.send(&message) {
        Ok(()) => session.last_error = Some(message),
        Err(send_error) => log::warn!("could not deliver failure report: {send_error}"),
    }
}

fn local_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}
