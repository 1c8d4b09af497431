use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ledger_chess::game_state::board::Board;
use ledger_chess::notation::log_entry::LogEntry;
use ledger_chess::notation::play_notation::Move;
use ledger_chess::session::game_session::GameSession;
use ledger_chess::session::game_store::InMemoryGameStore;
use ledger_chess::session::replay::replay_log;

// Both castles and an en passant capture within the first fourteen plies.
const GAME_MOVES: &[&str] = &[
    "e2e4", "d7d5", "e4e5", "f7f5", "e5f6", "g8f6", "g1f3", "b8c6", "f1c4", "c8e6", "e1g1",
    "d8d7", "d2d3", "e8c8", "c1g5", "h7h6", "g5h4", "g7g5", "h4g3", "f8g7",
];

fn record_log() -> Vec<LogEntry> {
    let mut board = Board::new_game();
    let mut log = Vec::with_capacity(GAME_MOVES.len());
    for text in GAME_MOVES {
        let mv = Move::parse(text, &board).expect("benchmark move should parse");
        log.push(LogEntry::record(&board, &mv));
        board = board
            .apply(mv.piece_move())
            .expect("benchmark move should apply");
    }
    log
}

fn bench_replay(c: &mut Criterion) {
    let log = record_log();

    let mut group = c.benchmark_group("replay");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(log.len() as u64));

    group.bench_with_input(BenchmarkId::from_parameter("full_log"), &log, |b, log| {
        b.iter(|| black_box(replay_log(black_box(log)).expect("replay should succeed")));
    });

    group.bench_function("session_join", |b| {
        let store = InMemoryGameStore::new();
        let mut white = GameSession::new(store.clone());
        let mut black = GameSession::new(store.clone());
        white.open("bench").expect("open should succeed");
        black.join("bench").expect("join should succeed");
        for (ply, text) in GAME_MOVES.iter().enumerate() {
            let (mover, other) = if ply % 2 == 0 {
                (&mut white, &mut black)
            } else {
                (&mut black, &mut white)
            };
            mover.play(text).expect("play should succeed");
            other.refresh().expect("refresh should succeed");
        }

        b.iter(|| {
            let mut session = GameSession::new(store.clone());
            black_box(session.join("bench").expect("join should succeed"))
        });
    });

    group.finish();
}

criterion_group!(replay_benches, bench_replay);
criterion_main!(replay_benches);
