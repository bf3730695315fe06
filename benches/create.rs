use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image_cash_letter::document::{Bundle, CashLetter, File};
use image_cash_letter::records::{BundleHeader, CheckDetail, FileHeader};

fn build_sample_file(cash_letters: usize, bundles: usize, checks: usize) -> File {
    let mut header = FileHeader::new();
    header.immediate_destination = "231380104".into();
    header.immediate_origin = "121042882".into();
    header.file_creation_date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single();

    let mut file = File::new();
    file.set_header(header);
    for cl in 0..cash_letters {
        let mut cash_letter = CashLetter::new(format!("CL{cl}"));
        for _ in 0..bundles {
            let mut bundle = Bundle::new(BundleHeader::new());
            for idx in 0..checks {
                bundle.add_check_detail(CheckDetail::new(100 + (idx % 50) as i64));
            }
            cash_letter.add_bundle(bundle);
        }
        file.add_cash_letter(cash_letter);
    }
    file
}

fn bench_create(c: &mut Criterion) {
    let mut file = build_sample_file(black_box(10), 20, 50);

    c.bench_function("file_create_10k_checks", |b| {
        b.iter(|| {
            file.create().expect("create file");
            black_box(&file.control);
        })
    });

    let json = file.to_json().expect("serialize");
    c.bench_function("file_from_json_10k_checks", |b| {
        b.iter(|| {
            let loaded = File::from_json(json.as_bytes()).expect("load file");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_create);
criterion_main!(benches);
