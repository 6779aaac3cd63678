use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};
use tinct::{
    Bgra8, ColorSource, ColorTarget, Hsv, PixelFormat, Rgb565, Rgb8, Rgba4444, Rgba8, RgbaF,
    convert_pixels, convert_slice,
};

const W: usize = 1920;
const H: usize = 1080;

// === Naive baselines ===

fn naive_rgb8_to_rgb565(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(2)) {
        let r = u16::from(s[0] >> 3);
        let g = u16::from(s[1] >> 2);
        let b = u16::from(s[2] >> 3);
        d.copy_from_slice(&(r | (g << 5) | (b << 11)).to_ne_bytes());
    }
}

fn naive_rgba_to_bgra(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d.copy_from_slice(&[s[2], s[1], s[0], s[3]]);
    }
}

// === Harness ===

/// Benchmark a Pod source two ways: typed slices and runtime byte formats.
fn bench_pair<From, To>(
    group: &mut BenchmarkGroup<WallTime>,
    src: &[From],
    src_format: PixelFormat,
    dst_format: PixelFormat,
) where
    From: ColorSource + Copy + bytemuck::Pod,
    To: ColorTarget + Copy + Default,
{
    group.bench_function("typed", |b| {
        let mut dst = vec![To::default(); src.len()];
        b.iter(|| convert_slice(src, &mut dst).unwrap());
    });

    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_len = src.len() * dst_format.bytes_per_pixel();
    group.bench_function("runtime", |b| {
        let mut dst = vec![0u8; dst_len];
        b.iter(|| convert_pixels(src_format, src_bytes, dst_format, &mut dst).unwrap());
    });
}

// === Benchmark groups ===

fn bench_rgb8_to_rgb565(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb8_to_rgb565");
    group.throughput(Throughput::Elements((W * H) as u64));
    let bytes: Vec<u8> = (0..W * H * 3).map(|i| (i % 251) as u8).collect();
    let src: Vec<Rgb8> = bytes
        .chunks_exact(3)
        .map(|p| Rgb8::new(p[0], p[1], p[2]))
        .collect();
    group.bench_function("typed", |b| {
        let mut dst = vec![Rgb565::default(); src.len()];
        b.iter(|| convert_slice(&src, &mut dst).unwrap());
    });
    group.bench_function("runtime", |b| {
        let mut dst = vec![0u8; W * H * 2];
        b.iter(|| convert_pixels(PixelFormat::Rgb8, &bytes, PixelFormat::Rgb565, &mut dst).unwrap());
    });
    group.bench_function("naive", |b| {
        let mut dst = vec![0u8; W * H * 2];
        b.iter(|| naive_rgb8_to_rgb565(&bytes, &mut dst));
    });
    group.finish();
}

fn bench_rgba_to_bgra(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgba8_to_bgra8");
    group.throughput(Throughput::Elements((W * H) as u64));
    let bytes: Vec<u8> = (0..W * H * 4).map(|i| (i % 251) as u8).collect();
    let src: Vec<Rgba8> = bytes
        .chunks_exact(4)
        .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
        .collect();
    group.bench_function("typed", |b| {
        let mut dst = vec![Bgra8::default(); src.len()];
        b.iter(|| convert_slice(&src, &mut dst).unwrap());
    });
    group.bench_function("runtime", |b| {
        let mut dst = vec![0u8; bytes.len()];
        b.iter(|| convert_pixels(PixelFormat::Rgba8, &bytes, PixelFormat::Bgra8, &mut dst).unwrap());
    });
    group.bench_function("naive", |b| {
        let mut dst = vec![0u8; bytes.len()];
        b.iter(|| naive_rgba_to_bgra(&bytes, &mut dst));
    });
    group.finish();
}

fn bench_packed_to_packed(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb565_to_rgba4444");
    group.throughput(Throughput::Elements((W * H) as u64));
    let src: Vec<Rgb565> = (0..W * H).map(|i| Rgb565::from_bits(i as u16)).collect();
    bench_pair::<Rgb565, Rgba4444>(
        &mut group,
        &src,
        PixelFormat::Rgb565,
        PixelFormat::Rgba4444,
    );
    group.finish();
}

fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv_to_rgbaf");
    group.throughput(Throughput::Elements((W * H) as u64));
    let src: Vec<Hsv> = (0..W * H)
        .map(|i| Hsv::new((i % 360) as f32, 0.75, 0.5))
        .collect();
    group.bench_function("typed", |b| {
        let mut dst = vec![RgbaF::default(); src.len()];
        b.iter(|| convert_slice(&src, &mut dst).unwrap());
    });
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_rgb8_to_rgb565(&mut criterion);
    bench_rgba_to_bgra(&mut criterion);
    bench_packed_to_packed(&mut criterion);
    bench_hsv(&mut criterion);
    criterion.final_summary();
}
