use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::tictactoe::{
    Board, BotInput, Difficulty, Mark, calculate_minimax_move, calculate_move, is_game_over,
};

fn bench_first_reply() {
    let board = Board::new().with_mark(0, Mark::X);
    let input = BotInput::new(board, Mark::O, Mark::X);
    black_box(calculate_minimax_move(&input));
}

fn bench_mid_game_move() {
    let board: Board = "X__ _O_ __X".parse().unwrap();
    let input = BotInput::new(board, Mark::O, Mark::X);
    black_box(calculate_minimax_move(&input));
}

fn bench_pro_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(17);

    while !is_game_over(&board) {
        let input = BotInput::new(board, current_mark, current_mark.opponent().unwrap());
        let Some(index) = calculate_move(Difficulty::Pro, input, &mut session_rng) else {
            break;
        };
        board = board.with_mark(index, current_mark);
        current_mark = current_mark.opponent().unwrap();
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("first_reply", |b| b.iter(bench_first_reply));

    group.bench_function("mid_game_move", |b| b.iter(bench_mid_game_move));

    group.bench_function("pro_self_play", |b| b.iter(bench_pro_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
