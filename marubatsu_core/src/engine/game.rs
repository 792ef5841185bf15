use crate::engine::board::Board;
use crate::engine::types::{Mark, MoveError, Slot};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 引き分け（盤面が満杯で勝者なし）。
    Draw,
    /// 進行中。
    InProgress,
    /// 勝者が決まった。
    Won {
        /// 勝者の印。
        winner: Mark,
    },
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 盤面側で着手が拒否された。
    Move(MoveError),
}

impl core::fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::GameOver => formatter.write_str("The game is already over"),
            Self::Move(err) => write!(formatter, "{err}"),
        }
    }
}

/// 1ゲームの進行を管理する構造体。
///
/// 終局時にプロセスを終了するのではなく、`play` が `Status` を返すことで
/// 呼び出し側がループの終了・再戦・プログラム的な対局を制御できる。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 現手番の印。
    turn: Mark,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(self) -> Board {
        self.board
    }

    /// 任意の盤面と手番からゲームを再開する。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, turn: Mark) -> Self {
        Self { board, turn }
    }

    /// 空の盤面・×の手番からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::empty(),
            turn: Mark::Cross,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        !matches!(self.status(), Status::InProgress)
    }

    /// 現手番の1手を適用し、適用後のゲーム状態を返す。
    ///
    /// 失敗した場合、盤面・手番とも一切変化しない。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::Move`: 指定マスがすでに占有されている場合
    ///
    #[inline]
    pub fn play(&mut self, slot: Slot) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let next = match self.board.apply_move(slot, self.turn) {
            Ok(next_board) => next_board,
            Err(err) => return Err(PlayError::Move(err)),
        };

        tracing::debug!(
            mark = %self.turn.as_char(),
            number = slot.number(),
            "move accepted"
        );

        self.board = next;
        self.turn = self.turn.opponent();

        let status = self.status();
        if !matches!(status, Status::InProgress) {
            tracing::debug!(status = ?status, "game finished");
        }

        Ok(status)
    }

    /// 現在のゲーム状態を返す。
    ///
    /// 勝者の有無を満杯判定より先に確認する。満杯かつラインが完成して
    /// いる盤面は `Draw` ではなく `Won`。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        if let Some(winner) = self.board.winner() {
            return Status::Won { winner };
        }

        if self.board.is_full() {
            return Status::Draw;
        }

        Status::InProgress
    }

    /// 現手番の印を返す。
    #[inline]
    #[must_use]
    pub const fn turn(self) -> Mark {
        self.turn
    }
}
