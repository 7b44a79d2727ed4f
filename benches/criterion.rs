use criterion::{criterion_group, criterion_main, Criterion};
use hornlog::{SearchMode, TextualDatabase};

macro_rules! sanity_check {
    ($computation:expr,$result:expr) => {{
        let r = $computation;
        assert_eq!(r, $result);
        r
    }};
}

fn prepare_ancestry() -> TextualDatabase {
    let mut tdb = TextualDatabase::new();

    // a chain of ten generations, p0 -> p1 -> ... -> p9
    tdb.load_str(
        "
        parent(p0, p1).
        parent(p1, p2).
        parent(p2, p3).
        parent(p3, p4).
        parent(p4, p5).
        parent(p5, p6).
        parent(p6, p7).
        parent(p7, p8).
        parent(p8, p9).

        ancestor(X, Y) :- parent(X, Y).
        ancestor(X, Y) :- parent(X, Z), ancestor(Z, Y).
    ",
    )
    .unwrap();
    tdb
}

fn ancestry_all(tdb: &TextualDatabase) -> usize {
    let solutions = tdb.run_query("ancestor(p0, X).", SearchMode::All).unwrap();
    sanity_check!(solutions.len(), 9)
}

fn ancestry_first(tdb: &TextualDatabase) -> usize {
    let solutions = tdb
        .run_query("ancestor(X, p9).", SearchMode::First)
        .unwrap();
    sanity_check!(solutions.len(), 1)
}

fn prepare_arithmetic() -> TextualDatabase {
    let mut tdb = TextualDatabase::new();

    tdb.load_str(
        "
        is_natural(z).
        is_natural(s(X)) :- is_natural(X).

        add(X, z, X) :- is_natural(X).
        add(X, s(Y), s(Z)) :- add(X, Y, Z).
    ",
    )
    .unwrap();
    tdb
}

fn arithmetic_add(tdb: &TextualDatabase) -> usize {
    let solutions = tdb
        .run_query(
            "add(s(s(s(s(s(s(s(s(s(s(z)))))))))), s(s(s(s(s(s(s(s(s(s(z)))))))))), X).",
            SearchMode::All,
        )
        .unwrap();
    sanity_check!(solutions.len(), 1)
}

fn arithmetic_add_reverse(tdb: &TextualDatabase) -> usize {
    // all ways of splitting twelve into two summands
    let solutions = tdb
        .run_query(
            "add(X, Y, s(s(s(s(s(s(s(s(s(s(s(s(z))))))))))))).",
            SearchMode::All,
        )
        .unwrap();
    sanity_check!(solutions.len(), 13)
}

fn naturals_prefix(tdb: &TextualDatabase) -> usize {
    let count = tdb
        .query_dfs("is_natural(N).")
        .unwrap()
        .take(64)
        .count();
    sanity_check!(count, 64)
}

fn criterion_benchmark(c: &mut Criterion) {
    let ancestry = prepare_ancestry();
    let arithmetic = prepare_arithmetic();

    c.bench_function("ancestry all", |b| b.iter(|| ancestry_all(&ancestry)));
    c.bench_function("ancestry first", |b| b.iter(|| ancestry_first(&ancestry)));
    c.bench_function("add", |b| b.iter(|| arithmetic_add(&arithmetic)));
    c.bench_function("add reverse", |b| {
        b.iter(|| arithmetic_add_reverse(&arithmetic))
    });
    c.bench_function("naturals prefix", |b| b.iter(|| naturals_prefix(&arithmetic)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
