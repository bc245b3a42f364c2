use criterion::{criterion_group, criterion_main, Criterion};
use gridlife::{random_soup, Engine, Grid, ScanEngine, TallyEngine, Topology};

const N: i64 = 128;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn soup(topology: Topology) -> Grid {
    Grid::with_cells(topology, random_soup(N, N, FILL_RATE, Some(SEED)).unwrap()).unwrap()
}

fn step<E: Engine>(c: &mut Criterion, name: &str, engine: E, topology: Topology) {
    let grid = soup(topology);
    c.bench_function(name, |b| b.iter(|| engine.next_generation(&grid)));
}

fn scan_bounded(c: &mut Criterion) {
    step(c, "scan_bounded", ScanEngine::default(), Topology::Bounded { rows: N, cols: N });
}

fn scan_unbounded(c: &mut Criterion) {
    step(c, "scan_unbounded", ScanEngine::default(), Topology::Unbounded);
}

fn tally_bounded(c: &mut Criterion) {
    step(c, "tally_bounded", TallyEngine, Topology::Bounded { rows: N, cols: N });
}

fn tally_unbounded(c: &mut Criterion) {
    step(c, "tally_unbounded", TallyEngine, Topology::Unbounded);
}

criterion_group!(benches, scan_bounded, scan_unbounded, tally_bounded, tally_unbounded);
criterion_main!(benches);
