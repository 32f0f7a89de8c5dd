use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mathtex::{MathTexContext, Settings, render_to_string};

const CASES: [(&str, &str); 6] = [
    ("symbols", r"a+b=c\cdot d"),
    ("frac", r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}"),
    ("bigop", r"\sum_{i=0}^{n} \frac{i}{2^i}"),
    ("delims", r"\left( \frac{1}{1+\frac{1}{x}} \right)^2"),
    ("matrix", r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}"),
    ("macros", r"\def\f#1{#1^2+#1} \f{x} + \f{y}"),
];

fn bench_render(c: &mut Criterion) {
    let ctx = MathTexContext::default();
    let settings = Settings::builder().display_mode(true).build();

    let mut group = c.benchmark_group("render_to_string");
    for (name, tex) in CASES {
        group.bench_function(name, |b| {
            b.iter(|| render_to_string(&ctx, black_box(tex), &settings).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
