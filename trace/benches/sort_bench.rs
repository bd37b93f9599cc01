use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use trace::sort_trace;

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

fn synthetic_trace(segments: usize, events_per_segment: usize) -> String {
    let mut rng = Rng::new(1);
    let mut out = String::new();
    for segment in 0..segments {
        for _ in 0..events_per_segment {
            let time = rng.next_u32() % 1_000_000;
            let thread = rng.next_u32() % 8;
            let addr = u64::from(rng.next_u32()) & 0xFF_FFC0;
            out.push_str(&format!(
                "time : {time}, thread : {thread}, addr: {addr:#x}, probe check(set lock)\n"
            ));
        }
        out.push_str(&format!("sync {segment}\n"));
    }
    out
}

fn bench_sort_trace(c: &mut Criterion) {
    let input = synthetic_trace(64, 256);
    let mut group = c.benchmark_group("sort_trace");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("segments_64x256", |b| {
        b.iter_batched(
            || Vec::with_capacity(input.len()),
            |mut output| sort_trace(input.as_bytes(), &mut output).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_sort_trace);
criterion_main!(benches);
