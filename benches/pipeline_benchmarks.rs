use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use xmlpipe::{MemoryLog, Pipeline, check_arguments};

/// Argument lists with a given share of rejected suffixes
fn generate_arguments(count: usize, scenario: &str) -> Vec<String> {
    (0..count)
        .map(|i| match scenario {
            "all_valid" => match i % 3 {
                0 => format!("input{i}.xml"),
                1 => format!("schema{i}.xsd"),
                _ => format!("style{i}.xslt"),
            },
            _ => {
                if i % 4 == 3 {
                    format!("notes{i}.txt")
                } else {
                    format!("input{i}.xml")
                }
            }
        })
        .collect()
}

fn catalog(disks: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<catalog>\n");
    for i in 0..disks {
        xml.push_str(&format!(
            "<disk><title>Title {i}</title><artist>Artist {i}</artist><country>UK</country>\
             <company>Label</company><price>9.90</price><year>1988</year></disk>\n"
        ));
    }
    xml.push_str("</catalog>\n");
    xml
}

fn bench_argument_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("argument_check");
    for scenario in ["all_valid", "mixed"] {
        for count in [4, 64, 1024] {
            let args = generate_arguments(count, scenario);
            group.bench_with_input(BenchmarkId::new(scenario, count), &args, |b, args| {
                b.iter(|| check_arguments(black_box(args)))
            });
        }
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let fixtures = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog");
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["catalog.xsd", "artists.xslt"] {
        std::fs::copy(fixtures.join(name), dir.path().join(name)).expect("copy fixture");
    }

    let mut group = c.benchmark_group("pipeline");
    for disks in [3, 100, 1000] {
        std::fs::write(dir.path().join("catalog.xml"), catalog(disks)).expect("write catalog");
        group.bench_function(BenchmarkId::from_parameter(disks), |b| {
            b.iter(|| {
                let log = MemoryLog::new();
                Pipeline::new(dir.path(), &log)
                    .run(black_box(&["catalog.xml", "catalog.xsd", "artists.xslt", "artists.xml"]))
                    .expect("pipeline succeeds")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_argument_check, bench_pipeline);
criterion_main!(benches);
