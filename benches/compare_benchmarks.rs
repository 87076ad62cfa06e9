use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sprite_diff::{
    compare_docs, Cel, DiffConfig, Document, Image, Layer, PixelFormat, Rect, Sprite,
};

fn seeded_image(w: u32, h: u32, seed: u8) -> Image {
    let mut img = Image::blank(PixelFormat::Rgba, w, h);
    for (i, byte) in img.pixels_mut().iter_mut().enumerate() {
        *byte = seed.wrapping_add(i as u8);
    }
    img
}

fn build_doc(layers: u32, frames: u32, cel_side: u32) -> Document {
    let mut sprite = Sprite::new(256, 256, PixelFormat::Rgba);
    for _ in 1..frames {
        sprite.add_frame(100);
    }
    for l in 0..layers {
        let mut layer = Layer::image(format!("layer-{l}"), 255);
        for f in 0..frames {
            layer.set_cel(Cel::with_image(
                f,
                Rect::new(0, 0, cel_side, cel_side),
                255,
                seeded_image(cel_side, cel_side, (l * 31 + f) as u8),
            ));
        }
        sprite.add_layer(layer);
    }
    Document::new(sprite)
}

fn bench_identical_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_identical");
    for (layers, frames) in [(4u32, 8u32), (16, 32), (64, 64)] {
        let a = build_doc(layers, frames, 32);
        let b = a.clone();
        let cels = (layers * frames) as u64;
        group.throughput(Throughput::Elements(cels));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{frames}")),
            &(a, b),
            |bench, (a, b)| {
                let config = DiffConfig::default();
                bench.iter(|| compare_docs(a, b, &config));
            },
        );
    }
    group.finish();
}

fn bench_early_layer_mismatch(c: &mut Criterion) {
    // A rename in the first layer stops the layer walk immediately; this
    // measures the fixed per-category overhead.
    let a = build_doc(64, 64, 32);
    let mut b = a.clone();
    b.sprite.root_layers_mut()[0].name = "renamed".into();

    c.bench_function("compare_first_layer_renamed", |bench| {
        let config = DiffConfig::default();
        bench.iter(|| compare_docs(&a, &b, &config));
    });
}

fn bench_single_pixel_change(c: &mut Criterion) {
    // Worst case: every cel image is scanned and the difference sits in the
    // last layer's last frame.
    let a = build_doc(16, 32, 32);
    let mut b = a.clone();
    let last = b.sprite.root_layers_mut().len() - 1;
    let mut cel = Cel::with_image(31, Rect::new(0, 0, 32, 32), 255, seeded_image(32, 32, 7));
    if let Some(img) = cel.image.as_mut() {
        img.pixels_mut()[0] ^= 0xff;
    }
    b.sprite.root_layers_mut()[last].set_cel(cel);

    c.bench_function("compare_last_cel_pixel_changed", |bench| {
        let config = DiffConfig::default();
        bench.iter(|| compare_docs(&a, &b, &config));
    });
}

criterion_group!(
    benches,
    bench_identical_documents,
    bench_early_layer_mismatch,
    bench_single_pixel_change
);
criterion_main!(benches);
