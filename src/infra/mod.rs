//! Инфраструктура вокруг движка раунда:
//! - RNG-реализации для агентов и симуляций;
//! - загрузка конфигурации.

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
