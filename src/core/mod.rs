pub mod chart;
pub mod collector;
pub mod config;
pub mod encoding;
pub mod forest;
pub mod journal;
pub mod log;
pub mod predict;
pub mod recommend;
pub mod refusal;
pub mod session;

pub use refusal::Refusal;
