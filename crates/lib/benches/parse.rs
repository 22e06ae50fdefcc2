use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chroma::{convert, parse, standard_registry, Color, NullLogger, Options, OutputMode};

pub fn named_colors(c: &mut Criterion) {
    let names: Vec<String> = standard_registry()
        .iter()
        .filter_map(|color| color.name().map(str::to_owned))
        .collect();

    c.bench_function("named_colors", |b| {
        b.iter(|| {
            for name in &names {
                let _ = black_box(parse(black_box(name), standard_registry()));
            }
        })
    });
}

pub fn mixed_notations(c: &mut Criterion) {
    let input = include_str!("mixed_notations.txt");
    let options = Options::default()
        .mode(OutputMode::Web)
        .logger(&NullLogger);

    c.bench_function("mixed_notations", |b| {
        b.iter(|| convert(black_box(input), &options))
    });
}

pub fn format_every_mode(c: &mut Criterion) {
    let colors: Vec<Color> = standard_registry().iter().collect();

    c.bench_function("format_every_mode", |b| {
        b.iter(|| {
            for color in &colors {
                for mode in OutputMode::ALL {
                    black_box(color.format(mode));
                }
            }
        })
    });
}

criterion_group!(benches, named_colors, mixed_notations, format_every_mode);
criterion_main!(benches);
