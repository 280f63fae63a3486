use bank_ledger::run::run;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn bench_process_batch_8000_rows(c: &mut Criterion) {
    c.bench_function("process_batch_8_000", |b| {
        let data = format!(
            "op,account,amount\ncreate,     1,\ncreate,     2,\n{}",
            r#"deposit,    1,  1.00
        deposit,    2,  2.00
        badly formated record
        deposit,    1,  2.00
        withdraw,   1,  1.50
        withdraw,   2,  3.00
        deposit,    2,  -1.00
        another bad record"#
                .repeat(1_000)
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

pub fn bench_process_batch_160000_rows(c: &mut Criterion) {
    c.bench_function("process_batch_160_000", |b| {
        let data = format!(
            "op,account,amount\ncreate,     1,\ncreate,     2,\n{}",
            r#"deposit,    1,  1.00
        deposit,    2,  2.00
        badly formated record
        deposit,    1,  2.00
        withdraw,   1,  1.50
        withdraw,   2,  3.00
        deposit,    2,  -1.00
        another bad record"#
                .repeat(20_000)
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

criterion_group!(
    benches,
    bench_process_batch_8000_rows,
    bench_process_batch_160000_rows,
);
criterion_main!(benches);
