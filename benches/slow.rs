use criterion::{black_box, criterion_group, criterion_main, Criterion};
use web_deslop::Deslopper;

pub fn bench(c: &mut Criterion) {
    let deslopper = Deslopper::builtin().unwrap();
    let text = scraped_page();
    c.bench_function("deslop", |b| {
        b.iter(|| deslopper.deslop_text(black_box(&text)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench
}
criterion_main!(benches);

fn scraped_page() -> String {
    let prose = "Researchers have built a stellarator out of parts you could order online and it works \n";
    let css = ".article-body p { margin: 0 0 1.5em; font-family: Georgia, serif; color: #222 !important; }\n";
    let mut page = String::new();
    for i in 0..2_000 {
        page.push_str(prose);
        if i % 3 == 0 {
            page.push_str(css);
        }
    }
    page
}
