use criterion::{criterion_group, criterion_main, Criterion};
use docsplit::{split, Format, SplitConfig};
use std::io::Cursor;

fn make_json_stream(count: usize) -> Vec<u8> {
    let doc = br#"{"a":[true,2,"3",[4,1.0,-1,-1.0],[],{}]}"#;
    let mut data = Vec::with_capacity(doc.len() * count);
    for _ in 0..count {
        data.extend_from_slice(doc);
    }
    data
}

fn make_xml_stream(count: usize) -> Vec<u8> {
    let doc = b"<record><id>1</id><name>example</name></record>";
    let mut data = Vec::with_capacity(doc.len() * count);
    for _ in 0..count {
        data.extend_from_slice(doc);
    }
    data
}

fn split_throughput(c: &mut Criterion) {
    let json = make_json_stream(2000);
    let xml = make_xml_stream(2000);

    let mut group = c.benchmark_group("split_throughput");
    group.bench_function("json_bufsize_4096", |b| {
        b.iter(|| {
            let count = split(
                Cursor::new(json.clone()),
                SplitConfig::new(Format::Json).bufsize(4096),
            )
            .unwrap()
            .filter(|r| r.is_ok())
            .count();
            criterion::black_box(count)
        })
    });
    group.bench_function("xml_bufsize_4096", |b| {
        b.iter(|| {
            let count = split(
                Cursor::new(xml.clone()),
                SplitConfig::new(Format::Xml).bufsize(4096),
            )
            .unwrap()
            .filter(|r| r.is_ok())
            .count();
            criterion::black_box(count)
        })
    });
    group.finish();
}

criterion_group!(benches, split_throughput);
criterion_main!(benches);
