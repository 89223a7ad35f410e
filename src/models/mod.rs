pub mod access_event;
pub mod comment;
pub mod role;
pub mod status;
pub mod task;
