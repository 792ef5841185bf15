use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::Slot;
use rand::Rng;
use rand::SeedableRng as _;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom as _;

/// 空きマスから一様ランダムに1手を選択するAI。
///
/// 乱数源は所有する `R` として注入する（隠れたグローバルは使わない）。
/// テストでは固定シードや任意の `Rng` 実装を渡して決定的に再現できる。
#[derive(Debug)]
pub struct Agent<R = SmallRng> {
    /// 乱数生成器。
    rng: R,
}

impl Agent<SmallRng> {
    /// `seed` を用いて初期化する。同じシードなら選択列も同じになる。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Agent<R> {
    /// 任意の乱数生成器を注入して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Ai for Agent<R> {
    #[inline]
    fn select_move(&mut self, board: Board) -> Option<Slot> {
        let free = board.free_slots();

        let choice = match free.as_slice() {
            [] => None,
            // candidate が1つだけなら乱数を消費せずそのまま返す。
            [only] => Some(*only),
            slots => slots.choose(&mut self.rng).copied(),
        };

        if let Some(slot) = choice {
            tracing::trace!(
                candidates = free.len(),
                number = slot.number(),
                "random move selected"
            );
        }

        choice
    }
}

#[cfg(test)]
mod tests {
    use super::Agent;
    use crate::ai::types::Ai as _;
    use crate::engine::board::Board;
    use rand::SeedableRng as _;
    use rand::rngs::SmallRng;

    #[test]
    fn full_board_yields_no_move() {
        let board = Board::from_text("XOXOXOXOX");
        let mut agent = Agent::new(0);
        assert_eq!(agent.select_move(board), None);
    }

    #[test]
    fn single_free_cell_is_chosen_deterministically() {
        // 手9だけが空き。
        let board = Board::from_text("XOXOXOXO ");
        let mut agent = Agent::new(42);

        for _trial in 0_u8..10 {
            let slot = agent.select_move(board).unwrap();
            assert_eq!(slot.number(), 9);
        }
    }

    #[test]
    fn chosen_move_is_always_free() {
        let board = Board::from_text("XOX   XOX");
        let mut agent = Agent::new(7);

        for _trial in 0_u8..50 {
            let slot = agent.select_move(board).unwrap();
            assert!(board.mark_at(slot).is_none());
            assert!((4..=6).contains(&slot.number()));
        }
    }

    #[test]
    fn both_of_two_free_cells_appear_over_many_trials() {
        // 手1と手9だけが空き。
        let board = Board::from_text(" OXOXOXO ");
        let mut agent = Agent::new(1234);
        let mut seen_one = false;
        let mut seen_nine = false;

        for _trial in 0_u8..100 {
            match agent.select_move(board).map(|slot| slot.number()) {
                Some(1) => seen_one = true,
                Some(9) => seen_nine = true,
                other => panic!("unexpected selection: {other:?}"),
            }
        }

        assert!(seen_one, "move 1 never selected in 100 trials");
        assert!(seen_nine, "move 9 never selected in 100 trials");
    }

    #[test]
    fn same_seed_reproduces_the_same_selections() {
        let board = Board::from_text("X   O    ");
        let mut first = Agent::new(99);
        let mut second = Agent::new(99);

        for _trial in 0_u8..20 {
            assert_eq!(
                first.select_move(board).map(|slot| slot.number()),
                second.select_move(board).map(|slot| slot.number()),
            );
        }
    }

    #[test]
    fn injected_rng_is_used() {
        let board = Board::from_text("XOX   XOX");
        let mut with_rng = Agent::with_rng(SmallRng::seed_from_u64(5));
        let mut seeded = Agent::new(5);

        for _trial in 0_u8..20 {
            assert_eq!(
                with_rng.select_move(board).map(|slot| slot.number()),
                seeded.select_move(board).map(|slot| slot.number()),
            );
        }
    }
}
