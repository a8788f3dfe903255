pub mod roster;
pub mod slack;
