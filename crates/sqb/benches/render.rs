use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqb::{QueryBuilder, Table, from_};

/// Build a query with `n` selected columns and `n` AND-combined WHERE
/// entries: SELECT col0,col1,... FROM t WHERE col0=0 AND col1=1 ...
fn build_select_query(n: usize) -> QueryBuilder {
    let t = Table::new("t");
    let mut q = from_(&t);
    for i in 0..n {
        q = q.select(t.field(format!("col{i}")));
    }
    for i in 0..n {
        q = q.where_(t.field(format!("col{i}")).eq(i as i64));
    }
    q
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let q = build_select_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let q = build_select_query(n);
                black_box(q.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_isin_list(c: &mut Criterion) {
    use sqb::Term;

    let mut group = c.benchmark_group("render/isin_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let q = from_("t").where_(Term::field("id").isin(values.iter().copied()));
                black_box(q.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_join_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/joins");

    for n in [1, 2, 5, 10] {
        let source = Table::new("t0_src");
        let joined: Vec<Table> = (0..n).map(|i| Table::new(format!("j{i}"))).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &joined, |b, joined| {
            b.iter(|| {
                let mut q = from_(&source).select(source.star());
                for table in joined {
                    q = q
                        .join(table)
                        .on(source.field("id").eq(table.field("src_id")))
                        .unwrap();
                }
                black_box(q.to_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_isin_list,
    bench_join_rendering
);
criterion_main!(benches);
