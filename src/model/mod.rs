pub mod attendance;
pub mod leave;
pub mod notice;
pub mod role;
pub mod task;
pub mod user;
