pub mod log_view;
pub mod map;
pub mod messages;
pub mod status;
