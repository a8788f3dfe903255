pub mod message;
pub mod partition;
pub mod slack;
pub mod teams;
