// benches/encrypt.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pgp_encryptor::{AeadAlgorithm, DataEncryptor, PgpDataEncryptorBuilder, SymmetricAlgorithm};
use std::hint::black_box;
use std::io::Write;

const KEY: [u8; 32] = [0x42; 32];

const SIZES: [usize; 4] = [
    1024,
    64 * 1024,
    1024 * 1024,
    10 * 1024 * 1024, // 1KiB → 10MiB
];

fn bench_aead(c: &mut Criterion) {
    for aead in [AeadAlgorithm::Eax, AeadAlgorithm::Ocb, AeadAlgorithm::Gcm] {
        let mut group = c.benchmark_group(format!("aead_{}", aead.name().to_lowercase()));
        let builder = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes256)
            .unwrap()
            .with_aead(aead, 16) // 64 KiB chunks
            .unwrap();

        for size in SIZES {
            let input = vec![0x41u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
                b.iter(|| {
                    let encryptor = builder.build(black_box(&KEY)).unwrap();
                    let mut out = encryptor.wrap_output(Vec::with_capacity(size + 1024));
                    out.write_all(black_box(&input)).unwrap();
                    black_box(out.finish().unwrap())
                });
            });
        }
        group.finish();
    }
}

fn bench_legacy(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_cfb");

    for integrity in [false, true] {
        let builder = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes256)
            .unwrap()
            .with_integrity_packet(integrity);
        let label = if integrity { "integrity" } else { "resync" };

        for size in SIZES {
            let input = vec![0x41u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(label, format_size(size)),
                &size,
                |b, _| {
                    b.iter(|| {
                        let encryptor = builder.build(black_box(&KEY)).unwrap();
                        let mut out = encryptor.wrap_output(Vec::with_capacity(size));
                        out.write_all(black_box(&input)).unwrap();
                        black_box(out.finish().unwrap())
                    });
                },
            );
        }
    }
    group.finish();
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

criterion_group!(benches, bench_aead, bench_legacy);
criterion_main!(benches);
