use crate::engine::types::{Mark, MoveError, Slot};

/// 盤面全体（9マス）のマスク。
const FULL_MASK: u16 = 0b1_1111_1111;

/// 勝利となる8本のライン（対角2本、横3本、縦3本）。
///
/// 手番号で書くと [1,5,9], [3,5,7], [1,2,3], [1,4,7], [2,5,8], [3,6,9],
/// [4,5,6], [7,8,9] の順。
const LINE_MASKS: [u16; 8] = [
    0b1_0001_0001,
    0b0_0101_0100,
    0b0_0000_0111,
    0b0_0100_1001,
    0b0_1001_0010,
    0b1_0010_0100,
    0b0_0011_1000,
    0b1_1100_0000,
];

/// 盤面（3x3）。
///
/// ×と○の占有ビットボードを持ち、どちらのビットも立っていないマスが
/// 空きマスとなる（空きを表す番兵値は持たない）。
/// 不変条件: `crosses & noughts == 0`。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// ×のビットボード。
    crosses: u16,
    /// ○のビットボード。
    noughts: u16,
}

impl Board {
    /// 着手を適用した新しい盤面を返す。
    ///
    /// 範囲・書式の検証は `Slot` の生成側で済んでいるため、ここでは
    /// 占有チェックのみを行う。失敗時に元の盤面は変化しない。
    ///
    /// # Errors
    ///
    /// 指定マスにすでに印が置かれている場合、`MoveError::CellOccupied` を返す。
    ///
    #[inline]
    pub fn apply_move(self, slot: Slot, mark: Mark) -> Result<Self, MoveError> {
        if self.mark_at(slot).is_some() {
            tracing::debug!(number = slot.number(), "move rejected: cell occupied");
            return Err(MoveError::CellOccupied);
        }

        Ok(self.with_mark(slot, mark))
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            crosses: u16::MIN,
            noughts: u16::MIN,
        }
    }

    /// 空きマスのビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn free_mask(self) -> u16 {
        !(self.crosses | self.noughts) & FULL_MASK
    }

    /// 空きマスを手番号の昇順で返す。空の列は盤面が満杯であることを表す。
    #[inline]
    #[must_use]
    pub fn free_slots(self) -> Vec<Slot> {
        let free = self.free_mask();
        let mut slots = Vec::with_capacity(usize::from(Slot::CELL_COUNT));

        for index in u8::MIN..Slot::CELL_COUNT {
            let slot = Slot::from_index_unchecked(index);
            if free & slot.bit() != u16::MIN {
                slots.push(slot);
            }
        }

        slots
    }

    /// テキスト表現から盤面を生成する。
    ///
    /// 先頭9文字を走査し、`'X'` / `'O'` に完全一致する文字だけを印として
    /// 取り込む。それ以外の文字・9文字に満たない部分は空きマスのまま。
    /// 10文字目以降は無視する。どんな入力でも失敗しない。
    #[inline]
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let mut board = Self::empty();

        for (position, ch) in raw.chars().take(usize::from(Slot::CELL_COUNT)).enumerate() {
            let index = match u8::try_from(position) {
                Ok(value) => value,
                Err(_conversion_error) => break,
            };

            if let Some(mark) = Mark::from_char(ch) {
                board = board.with_mark(Slot::from_index_unchecked(index), mark);
            }
        }

        board
    }

    /// 盤面が満杯かどうかを返す。
    ///
    /// 引き分け判定の盤面側の述語。呼び出し側は先に `winner` を確認すること。
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.free_mask() == u16::MIN
    }

    /// 指定マスの印を返す（`None` = 空き）。
    #[inline]
    #[must_use]
    pub fn mark_at(self, slot: Slot) -> Option<Mark> {
        let mask = slot.bit();
        if self.crosses & mask != u16::MIN {
            Some(Mark::Cross)
        } else if self.noughts & mask != u16::MIN {
            Some(Mark::Nought)
        } else {
            None
        }
    }

    /// テキスト表現（9文字）を返す。
    ///
    /// マスの順に印の文字を、空きマスは `' '` を並べる。
    /// `{X, O, ' '}` 上の9文字列に対して `from_text` と往復で一致する。
    #[inline]
    #[must_use]
    pub fn to_text(self) -> String {
        let mut text = String::with_capacity(usize::from(Slot::CELL_COUNT));

        for index in u8::MIN..Slot::CELL_COUNT {
            let slot = Slot::from_index_unchecked(index);
            let ch = match self.mark_at(slot) {
                Some(mark) => mark.as_char(),
                None => ' ',
            };
            text.push(ch);
        }

        text
    }

    /// 指定マスに印を置いた新しい盤面を返す（占有チェックなし）。
    ///
    /// 検証は `apply_move` が担う。
    #[inline]
    #[must_use]
    pub(crate) fn with_mark(self, slot: Slot, mark: Mark) -> Self {
        let mask = slot.bit();
        match mark {
            Mark::Cross => Self {
                crosses: self.crosses | mask,
                noughts: self.noughts,
            },
            Mark::Nought => Self {
                crosses: self.crosses,
                noughts: self.noughts | mask,
            },
        }
    }

    /// 勝者の印を返す（`None` = 勝者なし。引き分けとは区別される）。
    ///
    /// 8本のラインを固定順で走査し、ラインごとに×を先に確認する。
    /// 通常の交互着手では複数ラインが同時に完成して曖昧になることはないが、
    /// 任意の盤面に対してはどのラインが優先されるかは契約上未規定。
    #[inline]
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        for mask in LINE_MASKS {
            if self.crosses & mask == mask {
                return Some(Mark::Cross);
            }
            if self.noughts & mask == mask {
                return Some(Mark::Nought);
            }
        }

        None
    }
}
