use blowfish_modes::Cipher;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("Blowfish key setup", |b| {
        b.iter(|| {
            let _cipher = black_box(Cipher::new(b"0123456789abcdef0123456789abcdef")).unwrap();
        })
    });

    c.bench_function("Blowfish encrypt 1M (block)", |b| {
        let cipher = Cipher::new(b"0123456789abcdef0123456789abcdef").unwrap();
        let buff = vec![0_u8; 1024 * 1024];
        b.iter(|| {
            buff.chunks_exact(8).for_each(|chunk| {
                black_box(cipher.encrypt_block(chunk).unwrap());
            });
        })
    });

    c.bench_function("Blowfish encrypt 1M (ECB stream)", |b| {
        let cipher = Cipher::new(b"0123456789abcdef0123456789abcdef").unwrap();
        let buff = vec![0_u8; 1024 * 1024];
        b.iter(|| {
            for block in cipher.encrypt_ecb(&buff).unwrap() {
                black_box(block);
            }
        })
    });

    c.bench_function("Blowfish encrypt 1M (CTR stream)", |b| {
        let cipher = Cipher::new(b"0123456789abcdef0123456789abcdef").unwrap();
        let buff = vec![0_u8; 1024 * 1024];
        b.iter(|| {
            let counters = blowfish_modes::ctr_counter(0, u64::wrapping_add);
            for block in cipher.encrypt_ctr(&buff, counters) {
                black_box(block.unwrap());
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
