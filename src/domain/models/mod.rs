pub mod participant;
pub mod session;
