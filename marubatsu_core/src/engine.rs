/// 盤面（ビットボード）とテキスト表現・勝敗判定の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type Mark = types::Mark;
pub type MoveError = types::MoveError;
pub type PlayError = game::PlayError;
pub type Slot = types::Slot;
