use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::RoundTable;

use super::dto::RoundViewDto;
use super::errors::ApiError;
use super::queries::build_round_view;

/// Команды, которые меняют состояние раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundCommand {
    /// Начать раунд ставок.
    ///
    /// `carried_raises = None` – первый раунд раздачи, ставятся блайнды.
    StartRound {
        pointer: SeatIndex,
        carried_raises: Option<Vec<Chips>>,
    },

    /// Действие ходящего игрока по стабильному коду (0..=8).
    Act { code: u8 },
}

/// Выполнить команду и вернуть состояние раунда после неё.
pub fn execute_command(table: &mut RoundTable, command: RoundCommand) -> Result<RoundViewDto, ApiError> {
    match command {
        RoundCommand::StartRound {
            pointer,
            carried_raises,
        } => table.start_round(pointer, carried_raises)?,
        RoundCommand::Act { code } => {
            table.apply_action_code(code)?;
        }
    }
    Ok(build_round_view(table))
}

/// Команда в JSON → выполнение → DTO в JSON.
pub fn execute_json(table: &mut RoundTable, raw: &str) -> Result<String, ApiError> {
    let command: RoundCommand = serde_json::from_str(raw)?;
    let view = execute_command(table, command)?;
    Ok(serde_json::to_string(&view)?)
}
