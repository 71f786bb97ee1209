use serde::{Deserialize, Serialize};

use crate::engine::RoundTable;

use super::dto::{RoundViewDto, SeatViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundQuery {
    /// Полное состояние раунда.
    View,

    /// Коды допустимых действий ходящего.
    LegalActions,

    IsRoundOver,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundQueryResponse {
    View(RoundViewDto),
    LegalActions(Vec<u8>),
    IsRoundOver(bool),
}

pub fn run_query(table: &RoundTable, query: &RoundQuery) -> Result<RoundQueryResponse, ApiError> {
    let response = match query {
        RoundQuery::View => RoundQueryResponse::View(build_round_view(table)),
        RoundQuery::LegalActions => RoundQueryResponse::LegalActions(table.legal_action_codes()?),
        RoundQuery::IsRoundOver => RoundQueryResponse::IsRoundOver(table.is_round_over()),
    };
    Ok(response)
}

/// Сформировать DTO раунда. До `start_round` ставки нулевые, действий нет.
pub fn build_round_view(table: &RoundTable) -> RoundViewDto {
    let state = table.round_state();

    let seats = table
        .seats
        .iter()
        .enumerate()
        .map(|(i, p)| SeatViewDto {
            seat_index: i as u8,
            player_id: p.player_id,
            remained_chips: p.remained_chips,
            in_chips: p.in_chips,
            status: p.status,
            raised: state
                .and_then(|s| s.raised.get(i).copied())
                .unwrap_or_default(),
        })
        .collect();

    RoundViewDto {
        game_pointer: state.map(|s| s.game_pointer),
        pot: table.pot(),
        seats,
        legal_actions: table.legal_action_codes().unwrap_or_default(),
        is_over: table.is_round_over(),
    }
}
