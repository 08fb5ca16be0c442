use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yourroom_places::core::config::AppConfig;
use yourroom_places::core::source::BUNDLED_DATASET;
use yourroom_places::{filter, normalize, parse_dataset, InlineDataset, MunicipalityDirectory};

fn synthetic_dataset(rows: usize) -> String {
    let data: Vec<String> = (0..rows)
        .map(|i| {
            let name = match i % 4 {
                0 => format!("Villanueva de San Ramón {}", i),
                1 => format!("Rozas de Ávila {}, Las", i),
                2 => format!("Madrigal {}", i),
                _ => format!("Santa María del Río {}", i),
            };
            format!(r#"["{}", "{}", "{:03}"]"#, name, (i % 52) + 1, i % 1000)
        })
        .collect();

    format!(
        r#"{{ "meta": {{ "columns": [{{ "fieldName": "nombre" }}, {{ "fieldName": "cpro" }}, {{ "fieldName": "cmun" }}] }}, "data": [{}] }}"#,
        data.join(",")
    )
}

// Benchmark dataset parsing
fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("loading");

    group.bench_function("parse_bundled", |b| {
        b.iter(|| parse_dataset(black_box(BUNDLED_DATASET)))
    });

    // Roughly the size of the full INE list
    let full = synthetic_dataset(8_000);
    group.bench_function("parse_8000_rows", |b| {
        b.iter(|| parse_dataset(black_box(&full)))
    });

    let directory = MunicipalityDirectory::new(InlineDataset(full.clone()));
    directory.get_directory().unwrap();
    group.bench_function("cached_get_directory", |b| {
        b.iter(|| black_box(directory.get_directory().unwrap().len()))
    });

    group.finish();
}

// Benchmark query matching
fn bench_matching(c: &mut Criterion) {
    let records = parse_dataset(&synthetic_dataset(8_000)).unwrap();
    let mut group = c.benchmark_group("matching");

    for query in ["ma", "madrigal 79", "avila", "zzz"] {
        group.bench_with_input(BenchmarkId::new("filter", query), &query, |b, q| {
            b.iter(|| filter(black_box(&records), black_box(q), 10))
        });
    }

    group.bench_function("normalize_query", |b| {
        b.iter(|| normalize(black_box("Santa María del Río de Ávila")))
    });

    group.finish();
}

// Benchmark configuration operations
fn bench_config_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_operations");

    let toml_content = r#"
        [server]
        port = 8080
        host = "0.0.0.0"

        [search]
        default_limit = 10
        max_limit = 50
    "#;

    group.bench_function("config_from_toml", |b| {
        b.iter(|| AppConfig::from_toml(black_box(toml_content)))
    });

    group.finish();
}

criterion_group!(benches, bench_loading, bench_matching, bench_config_operations);
criterion_main!(benches);
