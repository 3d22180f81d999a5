//! WorkNest core: the business rules behind a workforce-management app.
//!
//! Attendance classification, leave accounting against an annual allowance,
//! and role-scoped visibility for tasks and notices. Transport (HTTP), the
//! identity provider, and the relational store are collaborators outside this
//! crate; every operation here takes snapshot rows in and hands rows or typed
//! [`error::EngineError`] rejections back.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod visibility;

pub use config::PolicyConfig;
pub use engine::attendance::AttendanceEngine;
pub use engine::leave::LeaveEngine;
pub use error::EngineError;
pub use visibility::Viewer;
