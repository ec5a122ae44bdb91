//! Criterion benchmarks for zhseg.
//!
//! - Tokenizer pipeline on single texts and batches
//! - Raw segmenter throughput
//! - Punctuation translation

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use zhseg::analysis::char_filter::CharFilter;
use zhseg::analysis::char_filter::punctuation::PunctuationCharFilter;
use zhseg::analysis::segmenter::SegmentOptions;
use zhseg::analysis::tokenizer::chinese::{CallOptions, ChineseTokenizer};
use zhseg::analysis::tokenizer::input::TokenizerInput;

/// Generate mixed Chinese/Latin test sentences.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "学习", "python", "，", "当上", "程序员", "迎娶", "白富美", "走上", "人生", "巅峰",
        "！", "根据", "需求", "我们", "买了", "二十四口", "交换机", "用于", "网络", "设备",
        "的", "更新", "升级", "。", "Rust", "2024",
    ];

    (0..count)
        .map(|i| {
            let length = 10 + (i % 30);
            (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
                .collect::<String>()
        })
        .collect()
}

/// Benchmark the full tokenizer pipeline.
fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    let tokenizer = ChineseTokenizer::new().unwrap();
    let texts = generate_test_texts(1000);

    group.bench_function("tokenize_single_text", |b| {
        b.iter(|| {
            let result = tokenizer.tokenize(black_box(&texts[0]));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("call_batch", |b| {
        b.iter(|| {
            let input = TokenizerInput::batch(texts.iter().take(100));
            black_box(tokenizer.call(input))
        })
    });

    let tagged = CallOptions::default().with_segment(SegmentOptions::tagged());
    group.bench_function("tokenize_tagged", |b| {
        b.iter(|| {
            let result = tokenizer.call_with(black_box(texts[1].as_str()), &tagged);
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark segmenters without the surrounding filters.
fn bench_segmenters(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenter");
    group.sample_size(20);

    let texts = generate_test_texts(100);
    let options = SegmentOptions::default();
    group.throughput(Throughput::Elements(texts.len() as u64));

    #[cfg(feature = "jieba")]
    {
        use zhseg::analysis::segmenter::Segmenter;
        use zhseg::analysis::segmenter::SegmenterSettings;
        use zhseg::analysis::segmenter::jieba::JiebaSegmenter;

        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();
        group.bench_function("jieba", |b| {
            b.iter(|| {
                for text in &texts {
                    let count = segmenter.segment(black_box(text), &options).map(|s| s.count());
                    let _ = black_box(count);
                }
            })
        });
    }

    #[cfg(feature = "lindera")]
    {
        use zhseg::analysis::segmenter::Segmenter;
        use zhseg::analysis::segmenter::SegmenterSettings;
        use zhseg::analysis::segmenter::lindera::LinderaSegmenter;

        let segmenter = LinderaSegmenter::new(SegmenterSettings::default()).unwrap();
        group.bench_function("lindera", |b| {
            b.iter(|| {
                for text in &texts {
                    let count = segmenter.segment(black_box(text), &options).map(|s| s.count());
                    let _ = black_box(count);
                }
            })
        });
    }

    group.finish();
}

/// Benchmark punctuation translation.
fn bench_punctuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("punctuation");

    let filter = PunctuationCharFilter::default();
    let text = generate_test_texts(1).concat().repeat(50);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("translate", |b| {
        b.iter(|| black_box(filter.filter(black_box(&text))))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_segmenters, bench_punctuation);
criterion_main!(benches);
