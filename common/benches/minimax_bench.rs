use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{Board, GameSession, Player, SearchMode, Searcher};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [
        (1, 1, Player::PlayerA),
        (0, 0, Player::PlayerB),
        (2, 2, Player::PlayerA),
    ];
    for (row, col, player) in moves {
        board.place(row, col, player);
    }
    board
}

fn bench_single_move_empty_board(mode: SearchMode) {
    let mut board = Board::new();
    let mut searcher = Searcher::new(mode);
    let best = searcher.best_move(&mut board, Player::PlayerA, Player::PlayerB);
    black_box(best.ok());
}

fn bench_single_move_mid_game() {
    let mut board = mid_game_board();
    let mut searcher = Searcher::new(SearchMode::AlphaBeta);
    let best = searcher.best_move(&mut board, Player::PlayerB, Player::PlayerA);
    black_box(best.ok());
}

fn bench_full_game() {
    let mut session = GameSession::new(SearchMode::AlphaBeta);
    while !session.is_game_over() {
        if session.current_player() == Player::automated() {
            if session.automated_move().is_err() {
                break;
            }
        } else {
            let Ok(hint) = session.hint() else {
                break;
            };
            session.apply_move(hint.position.row, hint.position.col, Player::PlayerA);
        }
    }
    black_box(session.status());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty_alpha_beta", |b| {
        b.iter(|| bench_single_move_empty_board(SearchMode::AlphaBeta))
    });

    group.bench_function("single_move_empty_exhaustive", |b| {
        b.iter(|| bench_single_move_empty_board(SearchMode::Exhaustive))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
