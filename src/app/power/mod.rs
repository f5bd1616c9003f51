//! 供电模块

pub mod service;

pub use service::{PowerService, PowerSupply};
