use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hello_birthday::birthday::birthday_message;
use hello_birthday::validation::validate_date_of_birth_at;

fn bench_birthday_message(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2017, 2, 2, 13, 30, 0).unwrap();
    let birth = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();

    c.bench_function("birthday_message", |b| {
        b.iter(|| birthday_message(black_box("test"), black_box(birth), black_box(now)))
    });
}

fn bench_validate_date(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2017, 2, 2, 13, 30, 0).unwrap();

    c.bench_function("validate_date_of_birth", |b| {
        b.iter(|| validate_date_of_birth_at(black_box("2012-12-12"), black_box(now)))
    });
}

criterion_group!(benches, bench_birthday_message, bench_validate_date);
criterion_main!(benches);
