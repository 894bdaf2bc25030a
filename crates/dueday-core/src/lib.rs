//! # Dueday Core Library
//!
//! A task scheduler built around a compact repeat-rule grammar: tasks carry a
//! due date and an optional rule, and the engine advances the due date when a
//! task is completed or persisted past due.
//!
//! ## Features
//!
//! - **Repeat-Rule Engine**: four rule families (day intervals `d N`,
//!   yearly `y`, weekday sets `w 1,3,5`, and month-day/month sets
//!   `m -1 2,8`) with leap-year handling and relative day indexing
//! - **Pure Calculation**: the reference date is always an explicit
//!   parameter; the engine never reads the clock and is re-entrant
//! - **Bounded Search**: every computation terminates within a fixed
//!   iteration bound or returns a typed error
//! - **SQLite Persistence**: sqlx-backed repository with migrations
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Task model, queries, and `YYYYMMDD` date helpers
//! - [`recurrence`]: Rule parser and occurrence calculator
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Error types shared across the crate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use dueday_core::{db, models::NewTaskData, repository::{Repository, SqliteRepository}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("tasks.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let today = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
//!     let task = repo
//!         .add_task(
//!             NewTaskData {
//!                 title: "Water the plants".to_string(),
//!                 date: "20240120".to_string(),
//!                 repeat: "w 1,4".to_string(),
//!                 ..Default::default()
//!             },
//!             today,
//!         )
//!         .await?;
//!     println!("Created task {} due {}", task.id, task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
