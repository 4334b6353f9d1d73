// ABOUTME: Criterion benchmarks for the calculation engine and snapshot serialization
// ABOUTME: Measures full-pipeline latency across patient archetypes and JSON snapshot cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calculation engine.
//!
//! Every profile edit reruns the whole pipeline, so its latency bounds how
//! responsive an interactive session feels.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutricare::snapshot::Snapshot;
use nutricare::{compute_with_config, EngineConfig, PatientProfile};
use nutricare_core::models::{AscitesSeverity, ChangeDuration, Gender};

#[derive(Debug, Clone, Copy)]
enum Archetype {
    Adult,
    Obese,
    Infant,
    Hepatic,
}

impl Archetype {
    const ALL: [Self; 4] = [Self::Adult, Self::Obese, Self::Infant, Self::Hepatic];

    const fn name(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Obese => "obese",
            Self::Infant => "infant",
            Self::Hepatic => "hepatic",
        }
    }

    fn profile(self) -> PatientProfile {
        let adult = PatientProfile {
            gender: Gender::Male,
            age: 30,
            height_cm: 170.0,
            current_weight_kg: 70.0,
            selected_weight_kg: 70.0,
            activity_factor: 1.2,
            waist_cm: 88.0,
            hip_cm: 98.0,
            ..PatientProfile::default()
        };
        match self {
            Self::Adult => adult,
            Self::Obese => PatientProfile {
                gender: Gender::Female,
                height_cm: 160.0,
                current_weight_kg: 125.0,
                selected_weight_kg: 125.0,
                desired_body_fat_percent: Some(30.0),
                ..adult
            },
            Self::Infant => PatientProfile {
                age: 0,
                dob: Some("2024-01-10".to_owned()),
                report_date: Some("2024-07-02".to_owned()),
                height_cm: 66.0,
                current_weight_kg: 7.5,
                selected_weight_kg: 7.5,
                ..adult
            },
            Self::Hepatic => PatientProfile {
                age: 58,
                ascites: AscitesSeverity::Severe,
                usual_weight_kg: 82.0,
                change_duration: ChangeDuration::SixMonths,
                ..adult
            },
        }
    }
}

fn bench_compute(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("compute");

    for archetype in Archetype::ALL {
        let profile = archetype.profile();
        group.bench_with_input(
            BenchmarkId::from_parameter(archetype.name()),
            &profile,
            |b, profile| b.iter(|| compute_with_config(black_box(profile), &config)),
        );
    }

    group.finish();
}

fn bench_snapshot_json(c: &mut Criterion) {
    let snapshot = Snapshot::capture(
        "bench-visit",
        Archetype::Obese.profile(),
        &EngineConfig::default(),
    );
    let payload = snapshot.to_json().unwrap();

    let mut group = c.benchmark_group("snapshot_json");
    group.bench_function("serialize", |b| {
        b.iter(|| black_box(&snapshot).to_json().unwrap());
    });
    group.bench_function("deserialize", |b| {
        b.iter(|| Snapshot::from_json(black_box(&payload)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_snapshot_json);
criterion_main!(benches);
