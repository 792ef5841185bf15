use crate::engine::board::Board;
use crate::engine::types::Slot;

/// 手を選択するAI。
pub trait Ai {
    /// 現在の盤面から次の手を選択する。
    ///
    /// `None` は「打てる手がない」（盤面が満杯）を表す。エラーではなく
    /// 正常な結果として扱う。
    fn select_move(&mut self, board: Board) -> Option<Slot>;
}
