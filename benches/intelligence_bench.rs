// ABOUTME: Criterion benchmarks for practice analytics algorithms
// ABOUTME: Measures scoring, warmup detection, trend classification, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Criterion benchmarks for practice analytics algorithms.
//!
//! Measures per-component cost over snapshots of increasing size, plus the
//! end-to-end report that composes every component.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use carrylab::config::{ClubCatalog, EngineConfig};
use carrylab::intelligence::{
    MetricExtractor, ProfileKind, QualityScorer, TrendClassifier, WarmupDetector, WeightProfile,
};
use carrylab::reports::{PracticeAnalyzer, TrendPeriod};
use common::fixtures::{generate_snapshot, SessionBatchSize, SHOTS_PER_SESSION};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [SessionBatchSize; 3] = [
    SessionBatchSize::Small,
    SessionBatchSize::Medium,
    SessionBatchSize::Large,
];

fn throughput(size: SessionBatchSize) -> Throughput {
    Throughput::Elements((size.sessions() * SHOTS_PER_SESSION) as u64)
}

/// Benchmark session scoring under both weight profiles
fn bench_quality_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality_scoring");
    let config = EngineConfig::default();
    let catalog = ClubCatalog::builtin();

    for size in SIZES {
        let shots = generate_snapshot(size);
        let extractor = MetricExtractor::new(&config.exclusion);
        let Some(sessions) = extractor.sessions(&shots).ready() else {
            continue;
        };
        group.throughput(throughput(size));

        for profile in WeightProfile::all() {
            let scorer = QualityScorer::new(profile, &catalog);
            group.bench_with_input(
                BenchmarkId::new(profile.kind.as_str(), size.sessions()),
                &sessions,
                |b, sessions| b.iter(|| scorer.score_sessions(black_box(sessions))),
            );
        }
    }

    group.finish();
}

/// Benchmark warmup detection and summary
fn bench_warmup_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("warmup_detection");
    let config = EngineConfig::default();
    let detector = WarmupDetector::new(&config.warmup);

    for size in SIZES {
        let shots = generate_snapshot(size);
        let extractor = MetricExtractor::new(&config.exclusion);
        let Some(sessions) = extractor.sessions(&shots).ready() else {
            continue;
        };
        group.throughput(throughput(size));
        group.bench_with_input(
            BenchmarkId::new("summarize", size.sessions()),
            &sessions,
            |b, sessions| b.iter(|| detector.summarize(black_box(sessions))),
        );
    }

    group.finish();
}

/// Benchmark session and per-club trend classification
fn bench_trend_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_classification");
    let config = EngineConfig::default();
    let catalog = ClubCatalog::builtin();
    let classifier = TrendClassifier::new(&config.trend);

    for size in SIZES {
        let shots = generate_snapshot(size);
        let admitted = MetricExtractor::new(&config.exclusion).admissible(&shots);
        group.throughput(throughput(size));
        group.bench_with_input(
            BenchmarkId::new("club_trends", size.sessions()),
            &admitted,
            |b, admitted| b.iter(|| classifier.club_trends(black_box(admitted), &catalog)),
        );
        group.bench_with_input(
            BenchmarkId::new("monthly_series", size.sessions()),
            &admitted,
            |b, admitted| {
                b.iter(|| {
                    classifier.summarize(TrendClassifier::monthly_series(
                        black_box(admitted),
                        &catalog,
                    ))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the end-to-end practice report
fn bench_practice_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("practice_report");
    group.sample_size(20);
    let config = EngineConfig::default();
    let catalog = ClubCatalog::builtin();
    let analyzer = PracticeAnalyzer::new(&config, &catalog);

    for size in SIZES {
        let shots = generate_snapshot(size);
        group.throughput(throughput(size));
        group.bench_with_input(
            BenchmarkId::new("build_report", size.sessions()),
            &shots,
            |b, shots| b.iter(|| analyzer.build_report(black_box(shots), ProfileKind::Grading)),
        );
        group.bench_with_input(
            BenchmarkId::new("session_trends", size.sessions()),
            &shots,
            |b, shots| b.iter(|| analyzer.trends(black_box(shots), TrendPeriod::Session)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_quality_scoring,
    bench_warmup_detection,
    bench_trend_classification,
    bench_practice_report
);
criterion_main!(benches);
