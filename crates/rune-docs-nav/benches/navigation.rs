//! Benchmarks for navigation validation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rune_docs_nav::{NavigationBuilder, Section};

/// Create `sections` top-level sections with `pages` leaves each.
fn create_sections(sections: usize, pages: usize) -> Vec<Section> {
    (0..sections)
        .map(|s| {
            (0..pages).fold(Section::new(format!("Section {s}")), |section, p| {
                section.leaf(format!("Page {p}"), format!("section-{s}/page-{p}"))
            })
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation_build");

    for (sections, pages) in [(5, 5), (20, 20), (50, 100)] {
        let input = create_sections(sections, pages);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}x{pages}")),
            &input,
            |b, input| {
                b.iter(|| {
                    input
                        .iter()
                        .cloned()
                        .fold(NavigationBuilder::new(), NavigationBuilder::section)
                        .max_depth(2)
                        .build()
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let nav = create_sections(50, 100)
        .into_iter()
        .fold(NavigationBuilder::new(), NavigationBuilder::section)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("navigation_find");

    group.bench_function("find_last", |b| b.iter(|| nav.find("section-49/page-99")));
    group.bench_function("find_miss", |b| b.iter(|| nav.find("missing/page")));

    group.finish();
}

criterion_group!(benches, bench_build, bench_find);
criterion_main!(benches);
