use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdforge::length_extension::{forge, search_key_length, KeyLengthSearchConfig};
use mdforge::prefix_mac::PrefixMac;

fn bench_forge(c: &mut Criterion) {
    let mac = PrefixMac::new(b"Secr3t!".to_vec());
    let tag = mac.sign(b"comment=hello");
    c.bench_function("forge", |b| {
        b.iter(|| {
            forge(
                black_box(b"comment=hello"),
                black_box(&tag),
                black_box(b";admin=true"),
                7,
            )
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mac = PrefixMac::new(vec![0x42u8; 48]);
    let tag = mac.sign(b"comment=hello");
    let mut group = c.benchmark_group("search_key_length");
    for parallel in [false, true] {
        let config = KeyLengthSearchConfig {
            parallel,
            ..KeyLengthSearchConfig::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| {
                search_key_length(b"comment=hello", &tag, b";admin=true", &config, |m, t| {
                    mac.verify(m, t)
                })
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forge, bench_search);
criterion_main!(benches);
