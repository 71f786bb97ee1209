//! Внешний API движка раунда (для игрового цикла / агента).
//!
//! - команды (commands.rs) — всё, что меняет состояние (начать раунд, действие);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — то, что видит агент;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
