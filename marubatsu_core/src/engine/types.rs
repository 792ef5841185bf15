/// プレイヤーの印。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Mark {
    /// ×印（慣例としてコンピュータ側）。
    Cross,
    /// ○印（慣例として人間側）。
    Nought,
}

impl Mark {
    /// テキスト表現の1文字を返す。
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Cross => 'X',
            Self::Nought => 'O',
        }
    }

    /// 1文字から `Mark` を生成する（`'X'` / `'O'` の完全一致のみ）。
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Self::Cross),
            'O' => Some(Self::Nought),
            _ => None,
        }
    }

    /// 相手側の印を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Cross => Self::Nought,
            Self::Nought => Self::Cross,
        }
    }
}

/// 盤面上のマス（0..=8のインデックス）。
///
/// 外部へは 1..=9 の「手番号」（行優先: 手1 = 左上、手5 = 中央、手9 = 右下）
/// として見せる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Slot(
    /// `row * 3 + col` に対応する0..=8の値。
    u8,
);

impl Slot {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 3;

    /// 盤のマス数。
    pub const CELL_COUNT: u8 = 9;

    /// そのマスを表すビット（`u16`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u16 {
        let one = u16::MIN.wrapping_add(1);
        let shift = u32::from(self.0);

        one.checked_shl(shift).unwrap_or(u16::MIN)
    }

    /// 列（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// インデックスから `Slot` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 手番号（1..=9）から `Slot` を生成する。
    ///
    /// # Errors
    ///
    /// 手番号が 1..=9 の範囲外の場合、`MoveError::OutOfRange` を返す。
    ///
    #[inline]
    pub const fn from_number(number: u8) -> Result<Self, MoveError> {
        if number < 1 || number > Self::CELL_COUNT {
            return Err(MoveError::OutOfRange);
        }

        Ok(Self(number.wrapping_sub(1)))
    }

    /// 盤面座標（row, col）から `Slot` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(col) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=8 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 手番号（1..=9）を返す。
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        match self.0.checked_add(1) {
            Some(value) => value,
            None => u8::MAX,
        }
    }

    /// 行（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl core::str::FromStr for Slot {
    type Err = MoveError;

    /// ユーザー入力の文字列を手番号として解釈する。
    ///
    /// - 前後の空白は無視する。
    /// - 整数として解釈できない入力は `MoveError::InvalidInput`。
    /// - 整数だが 1..=9 の範囲外（負数を含む）は `MoveError::OutOfRange`。
    #[inline]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let number = match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_parse_error) => return Err(MoveError::InvalidInput),
        };

        let number_u8 = match u8::try_from(number) {
            Ok(value) => value,
            Err(_conversion_error) => return Err(MoveError::OutOfRange),
        };

        Self::from_number(number_u8)
    }
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MoveError {
    /// 指定マスにはすでに印が置かれている。
    CellOccupied,
    /// 入力を整数として解釈できない。
    InvalidInput,
    /// 手番号が盤の範囲外。
    OutOfRange,
}

impl core::fmt::Display for MoveError {
    #[inline]
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match *self {
            Self::CellOccupied => "Cell occupied, choose another",
            Self::InvalidInput => "Your move was not recognised",
            Self::OutOfRange => "Your move was outside the board bounds. Try again.",
        };

        formatter.write_str(message)
    }
}
