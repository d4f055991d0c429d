//! Deterministic replacement for timer-driven fake async work
//!
//! Upload progress and analysis delays were originally modeled as wall-clock
//! timers pushing incremental updates. Here they are explicit tasks driven by
//! an injected [`Clock`], so tests advance time manually instead of sleeping.
//! Concurrent tasks are independent; dropping a task before completion simply
//! abandons it (the unmount-cleanup discipline).

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Time source injected into stores and tasks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the real application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for tests.
#[derive(Debug)]
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// How a simulated task ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Complete,
    /// User-visible reason, e.g. "file unreadable"
    Fail(String),
}

/// Result of polling a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPoll {
    /// Still running; percentage in 0..=99
    Progress(u8),
    /// Deadline reached; returned exactly once
    Done(TaskOutcome),
    /// Already reported done on an earlier poll
    Settled,
}

/// A simulated unit of background work (upload, analysis) with a fixed
/// duration and a predetermined outcome.
#[derive(Debug)]
pub struct SimulatedTask {
    started_at: DateTime<Utc>,
    duration: Duration,
    outcome: TaskOutcome,
    settled: bool,
}

impl SimulatedTask {
    pub fn start(clock: &dyn Clock, duration: Duration, outcome: TaskOutcome) -> Self {
        Self {
            started_at: clock.now(),
            duration,
            outcome,
            settled: false,
        }
    }

    /// Advance the task against the clock. Returns `Progress` until the
    /// duration elapses, then `Done` once, then `Settled`.
    pub fn poll(&mut self, clock: &dyn Clock) -> TaskPoll {
        if self.settled {
            return TaskPoll::Settled;
        }
        let elapsed = clock.now() - self.started_at;
        if elapsed >= self.duration {
            self.settled = true;
            return TaskPoll::Done(self.outcome.clone());
        }
        let pct = if self.duration.num_milliseconds() == 0 {
            99
        } else {
            let ratio = elapsed.num_milliseconds() as f64 / self.duration.num_milliseconds() as f64;
            ((ratio * 100.0) as u8).min(99)
        };
        TaskPoll::Progress(pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn clock() -> TestClock {
        TestClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn reports_progress_then_done_then_settled() {
        let clock = clock();
        let mut task = SimulatedTask::start(&clock, Duration::seconds(10), TaskOutcome::Complete);

        assert_eq!(task.poll(&clock), TaskPoll::Progress(0));

        clock.advance(Duration::seconds(5));
        assert_eq!(task.poll(&clock), TaskPoll::Progress(50));

        clock.advance(Duration::seconds(5));
        assert_eq!(task.poll(&clock), TaskPoll::Done(TaskOutcome::Complete));
        assert_eq!(task.poll(&clock), TaskPoll::Settled);
    }

    #[test]
    fn progress_never_reaches_100_before_done() {
        let clock = clock();
        let mut task = SimulatedTask::start(&clock, Duration::seconds(10), TaskOutcome::Complete);

        clock.advance(Duration::milliseconds(9_999));
        match task.poll(&clock) {
            TaskPoll::Progress(pct) => assert!(pct <= 99),
            other => panic!("expected progress, got {:?}", other),
        }
    }

    #[test]
    fn failure_outcome_is_delivered() {
        let clock = clock();
        let mut task = SimulatedTask::start(
            &clock,
            Duration::seconds(1),
            TaskOutcome::Fail("file unreadable".to_string()),
        );
        clock.advance(Duration::seconds(2));
        assert_eq!(
            task.poll(&clock),
            TaskPoll::Done(TaskOutcome::Fail("file unreadable".to_string()))
        );
    }

    #[test]
    fn concurrent_tasks_are_independent() {
        let clock = clock();
        let mut fast = SimulatedTask::start(&clock, Duration::seconds(2), TaskOutcome::Complete);
        let mut slow = SimulatedTask::start(&clock, Duration::seconds(8), TaskOutcome::Complete);

        clock.advance(Duration::seconds(4));
        assert_eq!(fast.poll(&clock), TaskPoll::Done(TaskOutcome::Complete));
        assert_eq!(slow.poll(&clock), TaskPoll::Progress(50));
    }
}
