pub mod credentials;
pub mod task;
