#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use hostel_types::{Priority, Role};

use hostel_desk::auth::{Identity, StudentProfile};
use hostel_desk::config::{AdminAccount, Config, StudentAccount};
use hostel_desk::portal::Portal;
use hostel_desk::submission::{Clock, SubmissionDraft};

pub const ADMIN_EMAIL: &str = "warden@test.local";
pub const ADMIN_PASSWORD: &str = "adminpass";
pub const STUDENT_EMAIL: &str = "student@test.local";
pub const STUDENT_PASSWORD: &str = "studentpass";

/// Fixed accounts and the given artificial delay.
pub fn test_config(delay: Duration) -> Config {
    Config {
        admin: AdminAccount {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
            name: "Test Warden".into(),
        },
        student: StudentAccount {
            email: STUDENT_EMAIL.into(),
            password: STUDENT_PASSWORD.into(),
            name: "Test Student".into(),
            student_id: "STU042".into(),
            room_number: "B-204".into(),
            phone: "+1 555 0142".into(),
        },
        submit_delay: delay,
    }
}

/// Clock that starts at a fixed instant and moves forward one minute per reading,
/// so consecutive submissions always get strictly increasing timestamps.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + chrono::Duration::minutes(tick)
    }
}

/// A portal with no artificial delay and a stepping clock.
pub fn test_portal() -> Portal {
    Portal::with_clock(test_config(Duration::ZERO), Arc::new(SteppingClock::new()))
}

pub async fn login_student(portal: &Portal) -> Identity {
    portal
        .authenticate(Role::Student, STUDENT_EMAIL, STUDENT_PASSWORD)
        .await
        .expect("student login failed")
}

pub async fn login_admin(portal: &Portal) -> Identity {
    portal
        .authenticate(Role::Admin, ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("admin login failed")
}

/// Sign in as a freshly registered student with the given id and room.
pub async fn register_student(portal: &Portal, student_id: &str, room: &str) -> Identity {
    portal
        .register(StudentProfile {
            name: format!("Student {student_id}"),
            email: format!("{}@test.local", student_id.to_lowercase()),
            student_id: student_id.into(),
            room_number: room.into(),
            phone: "+1 555 0199".into(),
        })
        .await
        .expect("registration failed")
}

pub fn complaint(title: &str) -> SubmissionDraft {
    SubmissionDraft::Complaint {
        title: title.into(),
        description: format!("{title} details"),
        category: "Plumbing Issues".into(),
        priority: Some(Priority::Medium),
    }
}

pub fn query(title: &str) -> SubmissionDraft {
    SubmissionDraft::Query {
        title: title.into(),
        description: format!("{title} details"),
        category: "Payment & Fees".into(),
    }
}

pub fn cleaning() -> SubmissionDraft {
    SubmissionDraft::Cleaning {
        title: None,
        description: None,
        preferred_date: None,
        preferred_time: None,
    }
}
