//! First-run demo tasks

use chrono::{DateTime, Duration, Utc};

use tm_core::ports::IdGenerator;
use tm_core::task::{Task, TaskId, TaskStatus};

/// The two demo tasks, newest first
pub fn demo_tasks(now: DateTime<Utc>, ids: &dyn IdGenerator) -> Vec<Task> {
    let yesterday = now - Duration::days(1);
    vec![
        Task {
            id: TaskId::new(ids.generate_id()),
            title: "Welcome to Task Manager".to_string(),
            description: "This is a demo task. Use \"Add Task\" to create your own tasks."
                .to_string(),
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        },
        Task {
            id: TaskId::new(ids.generate_id()),
            title: "Read assignment".to_string(),
            description: "Complete the MERN assignment steps and later connect this UI to backend."
                .to_string(),
            status: TaskStatus::Done,
            created_at: yesterday,
            updated_at: yesterday,
        },
    ]
}
