use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use zone53::ConfigGenerator;
use zone53::config::GeneratorConfig;
use zone53::generate::Dialect;

fn bench_generate(c: &mut Criterion) {
    let mut zone = String::from("$ORIGIN example.com.\n$TTL 300\n");
    for i in 0..500u32 {
        zone.push_str(&format!("host-{i} IN A 10.0.{}.{}\n", i / 256, i % 256));
    }

    let config = GeneratorConfig::new(
        "example.com".to_string(),
        None,
        "SOA,NS",
        Dialect::Modern,
    );
    let generator = ConfigGenerator::new(config.dialect);

    c.bench_function("generate modern config, 500 records", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            generator
                .generate(black_box(&config), black_box(&zone), &mut out)
                .unwrap();
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
