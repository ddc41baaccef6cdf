//! Performance benchmarks for mhtml2md.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small synthetic archive (~2KB) through the whole pipeline, per preset
//! - The cleanup chain alone on rendered Markdown of growing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mhtml2md::normalize::normalize;
use mhtml2md::{convert, convert_with_options, Options, Preset};

const SAMPLE_ARCHIVE: &str = "From: <Saved by Blink>\r
Snapshot-Content-Location: https://example.com/articles/sample\r
Subject: Sample Article\r
MIME-Version: 1.0\r
Content-Type: multipart/related;\r
\ttype=\"text/html\";\r
\tboundary=\"----MultipartBoundary--bench----\"\r
\r
------MultipartBoundary--bench----\r
Content-Type: text/html\r
Content-Transfer-Encoding: quoted-printable\r
\r
<!DOCTYPE html><html><head><meta charset=3D\"utf-8\"><title>Sample</title>\r
<style>p { color: red; }</style></head><body>\r
<nav><a href=3D\"/\">Home</a> <a href=3D\"/about\">About</a></nav>\r
<main class=3D\"content\">\r
<h1>Sample Article Title</h1>\r
<p>This is the first paragraph of the article. It contains some meaningful=\r
 content that should survive conversion.</p>\r
<p>Here is a second paragraph with a link to <a href=3D\"https://example.com/docs\">the docs</a>\r
and an anchor to <a href=3D\"#part-2\">part two</a>.</p>\r
<p>A third paragraph ensures we have enough content for meaningful benchmarking.</p>\r
</main>\r
<footer><p>Copyright 2024</p></footer>\r
</body></html>\r
------MultipartBoundary--bench----\r
Content-Type: text/css\r
\r
p { color: red; }\r
------MultipartBoundary--bench------\r
";

fn bench_convert_default(c: &mut Criterion) {
    c.bench_function("convert_default", |b| {
        b.iter(|| convert(black_box(SAMPLE_ARCHIVE), "sample"));
    });
}

fn bench_convert_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    for preset in [Preset::Standard, Preset::Classic, Preset::SelectorList] {
        let options = Options::preset(preset);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{preset:?}")),
            &options,
            |b, options| {
                b.iter(|| convert_with_options(black_box(SAMPLE_ARCHIVE), "sample", options));
            },
        );
    }
    group.finish();
}

/// Cleanup chain on rendered Markdown of growing size
fn bench_normalize(c: &mut Criterion) {
    let paragraph = "Some para graph text with=\n a soft wrap and https:// example . com /x link.\n\n";
    let options = Options::default();

    let mut group = c.benchmark_group("normalize");
    for count in [10usize, 100, 1_000] {
        let markdown = format!("# Heading Line\n\n{}", paragraph.repeat(count));
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &markdown, |b, md| {
            b.iter(|| normalize(black_box(md), "bench", &options));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_convert_default,
    bench_convert_presets,
    bench_normalize
);
criterion_main!(benches);
