//! 結合テスト: CPU同士の対戦が終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use marubatsu_core::ai::types::Ai;
    use marubatsu_core::{ai, engine};

    /// `random` が空きマスのみ選ぶことを確認する。
    #[test]
    fn random_selects_free_cell() {
        let board = engine::Board::from_text("XOX   XOX");
        let mut agent = ai::random::Agent::new(0);

        let slot_opt = agent.select_move(board);
        assert!(slot_opt.is_some(), "a non-full board must yield a move");

        let slot = match slot_opt {
            Some(value) => value,
            None => return,
        };

        assert!(
            board.mark_at(slot).is_none(),
            "random must select a free cell, got={slot:?}"
        );
    }

    /// `random` 同士で対局し、終局時の状態を返す。
    fn play_game_random_vs_random(seed_cross: u64, seed_nought: u64) -> engine::GameStatus {
        let mut game = engine::Game::initial();
        let mut cross_agent = ai::random::Agent::new(seed_cross);
        let mut nought_agent = ai::random::Agent::new(seed_nought);

        // 3x3 なので最大9手で必ず終局する。
        for _turn in u8::MIN..9 {
            let board = game.board();

            let slot_opt = match game.turn() {
                engine::Mark::Cross => cross_agent.select_move(board),
                engine::Mark::Nought => nought_agent.select_move(board),
                _ => None,
            };

            let slot = match slot_opt {
                Some(value) => value,
                None => break,
            };

            assert!(
                board.mark_at(slot).is_none(),
                "agent must select a free cell, got={slot:?}"
            );

            let play_result = game.play(slot);
            assert!(play_result.is_ok(), "play must succeed, got={play_result:?}");

            let status = match play_result {
                Ok(value) => value,
                Err(_err) => break,
            };

            if !matches!(status, engine::GameStatus::InProgress) {
                return status;
            }
        }

        let status = game.status();
        assert!(
            !matches!(status, engine::GameStatus::InProgress),
            "game did not finish within 9 plies, status={status:?}"
        );
        status
    }

    /// `random vs random` が終局まで進む。
    #[test]
    fn random_vs_random_finishes() {
        let _status = play_game_random_vs_random(u64::MIN, u64::MIN.wrapping_add(1));
        let _status = play_game_random_vs_random(42, 4242);
        let _status = play_game_random_vs_random(7, 7);
    }

    /// 同じシードの組なら対局の棋譜も同じになる。
    #[test]
    fn same_seeds_reproduce_the_same_game() {
        fn transcript(seed_cross: u64, seed_nought: u64) -> Vec<u8> {
            let mut game = engine::Game::initial();
            let mut cross_agent = ai::random::Agent::new(seed_cross);
            let mut nought_agent = ai::random::Agent::new(seed_nought);
            let mut moves = Vec::new();

            for _turn in u8::MIN..9 {
                let slot_opt = match game.turn() {
                    engine::Mark::Cross => cross_agent.select_move(game.board()),
                    engine::Mark::Nought => nought_agent.select_move(game.board()),
                    _ => None,
                };

                let slot = match slot_opt {
                    Some(value) => value,
                    None => break,
                };

                moves.push(slot.number());

                let status = match game.play(slot) {
                    Ok(value) => value,
                    Err(_err) => break,
                };

                if !matches!(status, engine::GameStatus::InProgress) {
                    break;
                }
            }

            moves
        }

        let first = transcript(11, 22);
        let second = transcript(11, 22);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
