use criterion::{Criterion, black_box, criterion_group, criterion_main};

use notebeat::beatmap::generate;
use notebeat::config::EngineConfig;
use notebeat::session::{Judge, JudgeWindow, NoteScheduler, ScoreBoard};

fn scheduler_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");

    group.bench_function("tick_loop_burst_chart", |b| {
        let beatmap = generate::bursts(16, 4);
        let config = EngineConfig::default();
        b.iter(|| {
            let mut scheduler = NoteScheduler::new(&beatmap, &config);
            let mut board = ScoreBoard::new(&config);
            let mut t = 0.0;
            while !scheduler.is_exhausted() {
                t += 16.0;
                for judgement in scheduler.admit(black_box(t)) {
                    board.apply(judgement.quality);
                }
                for judgement in scheduler.expire(black_box(t)) {
                    board.apply(judgement.quality);
                }
            }
            black_box(board.miss_count)
        });
    });

    group.finish();
}

fn judge_press_benchmark(c: &mut Criterion) {
    c.bench_function("judge_press_dense_lane", |b| {
        let beatmap = generate::bursts(4, 1);
        let config = EngineConfig::default();
        let judge = Judge::new(JudgeWindow::base());
        b.iter(|| {
            let mut scheduler = NoteScheduler::new(&beatmap, &config);
            scheduler.admit(2_500.0);
            let mut judged = 0u32;
            let mut press_ms = 2_000.0;
            while let Some(result) = judge.judge_press(0, black_box(press_ms), scheduler.active_mut())
            {
                press_ms = result.time_ms + 150.0;
                judged += 1;
            }
            black_box(judged)
        });
    });
}

criterion_group!(benches, scheduler_tick_benchmark, judge_press_benchmark);
criterion_main!(benches);
