pub mod attendance;
pub mod leave;
