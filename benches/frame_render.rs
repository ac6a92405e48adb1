use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gopher::frame::{write_clear, Frame};
use gopher::{Activity, Appearance, Color};

fn bench_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render");

    for (label, text) in [("empty", ""), ("short", "Hey yo!"), ("long", "compiling 312 crates ...")] {
        let appearance = Appearance {
            prefix: text.to_string(),
            suffix: text.to_string(),
            activity: Activity::Boring,
            color: Color::Yellow,
            ..Appearance::default()
        };

        group.bench_with_input(BenchmarkId::new("clear_and_draw", label), &appearance, |b, appearance| {
            let mut buf = Vec::with_capacity(256);
            let mut tick = 0usize;
            b.iter(|| {
                buf.clear();
                let frame = Frame::new(appearance, tick);
                write_clear(&mut buf, frame.width()).unwrap();
                frame.write_to(&mut buf).unwrap();
                tick = tick.wrapping_add(1);
                black_box(&buf);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_render);
criterion_main!(benches);
