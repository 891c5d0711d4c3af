/// Benchmarks for the launch record views.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use launch_dashboard::aggregate::{aggregate_outcomes, correlate};
use launch_dashboard::dataset::{Dataset, LaunchRecord, Outcome};
use launch_dashboard::models::{PayloadRange, SiteSelection};

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn get_test_dataset(size: usize) -> Dataset {
    let records = (0..size)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i % 10000) as f64,
                outcome,
                CATEGORIES[i % CATEGORIES.len()],
            )
        })
        .collect();
    Dataset::new(records).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    for size_k in [1, 16, 256] {
        let size = size_k * 1024;
        let dataset = get_test_dataset(size);
        let sites = [
            SiteSelection::All,
            SiteSelection::Site("KSC LC-39A".to_string()),
        ];
        for site in sites {
            let name = format!("aggregate_outcomes({}, {})", size, site);
            c.bench_function(&name, |b| {
                b.iter(|| aggregate_outcomes(black_box(&dataset), &site))
            });
            let range = PayloadRange::new(2000.0, 8000.0);
            let name = format!("correlate({}, {})", size, site);
            c.bench_function(&name, |b| {
                b.iter(|| correlate(black_box(&dataset), &site, range))
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
