// ABOUTME: Output formatting helpers for nutricare-cli
// ABOUTME: Human-readable rendering of result sets, snapshots, and visit listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricare::snapshot::Snapshot;
use nutricare::{PatientProfile, ResultSet};
use nutricare_engine::energy::predictive::{EquationEstimate, PredictiveEquation};
use nutricare_engine::RequiredKcalSource;

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(80));
}

fn optional_kcal(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |kcal| format!("{kcal:.0}"))
}

/// One-line summary of the measured inputs
pub fn display_profile_summary(profile: &PatientProfile) {
    println!(
        "Patient: {}, {:.0} cm, {:.1} kg current, {:.1} kg selected",
        profile.gender.as_str(),
        profile.height_cm,
        profile.current_weight_kg,
        profile.selected_weight_kg
    );
    if profile.amputation_percent > 0.0 {
        println!("Amputation: {:.1}% of body weight", profile.amputation_percent);
    }
}

/// Header lines for a stored snapshot
pub fn display_snapshot_header(snapshot: &Snapshot) {
    println!("Visit: {}", snapshot.visit_id);
    println!("Saved: {}", snapshot.saved_at.format("%Y-%m-%d %H:%M UTC"));
    display_profile_summary(&snapshot.inputs);
}

/// Stored visit ids, newest first
pub fn display_visit_ids(visit_ids: &[String]) {
    if visit_ids.is_empty() {
        println!("No snapshots stored.");
        return;
    }
    section(&format!("Stored snapshots ({})", visit_ids.len()));
    for visit_id in visit_ids {
        println!("  {visit_id}");
    }
}

/// Full assessment report
pub fn display_result_set(results: &ResultSet, source: RequiredKcalSource) {
    display_anthropometrics(results);
    display_energy(results);
    display_recommendation(results, source);
}

fn display_anthropometrics(results: &ResultSet) {
    let anthro = &results.anthropometrics;
    section("ANTHROPOMETRICS");
    println!("   Age: {} years", results.age.years);
    if let Some(breakdown) = results.age.breakdown {
        println!(
            "   Exact age: {}y {}m {}d",
            breakdown.years, breakdown.months, breakdown.days
        );
    }
    println!("   Dry weight: {:.1} kg", anthro.dry_weight_kg);
    println!("   Selected weight: {:.1} kg", anthro.selected_weight_kg);
    println!(
        "   BMI (dry): {:.1}{}",
        anthro.bmi_dry.value,
        anthro
            .bmi_dry
            .status
            .map_or_else(String::new, |status| format!(" ({})", status.label()))
    );
    println!("   BMI (selected): {:.1}", anthro.bmi_selected.value);
    println!(
        "   Ideal body weight: {:.1} kg (simple), {:.1} kg (Hamwi)",
        anthro.ideal_body_weight.simple_kg, anthro.ideal_body_weight.hamwi_kg
    );
    println!(
        "   Adjusted body weight (Hamwi): {:.1} kg dry, {:.1} kg selected",
        anthro.adjusted_body_weight.hamwi.dry, anthro.adjusted_body_weight.hamwi.selected
    );
    if let Some(amputation) = anthro.amputation_adjusted_weight_kg {
        println!("   Amputation-adjusted weight: {amputation:.1} kg");
    }
    if let Some(risk) = anthro.waist_risk {
        println!("   Waist risk: {risk:?}");
    }
    if let Some(whr) = &anthro.waist_hip_ratio {
        println!("   Waist/hip: {} ({:?})", whr.display, whr.risk);
    }
    if let Some(whtr) = &anthro.waist_height_ratio {
        println!("   Waist/height: {} ({:?})", whtr.display, whtr.band);
    }
    if let Some(arm) = &anthro.arm {
        println!("   Estimated BMI from MAC: {:.1}", arm.estimated_bmi);
        if let Some(mamc) = arm.mamc_cm {
            println!("   MAMC: {mamc:.1} cm");
        }
    }

    println!("   Weight change: {}%", results.weight_change.display);
    if let Some(class) = results.weight_change.classification {
        println!("   Weight change class: {}", class.label());
    }

    if let Some(composition) = &results.body_composition {
        println!(
            "   Body fat: {}% ({:?})",
            composition.display, composition.source
        );
        println!(
            "   Fat mass: {:.1} kg, lean mass: {:.1} kg",
            composition.fat_mass_kg, composition.lean_mass_kg
        );
        if let Some(target) = composition.target {
            println!(
                "   Target weight at {:.0}% fat: {:.1} kg ({:+.1} kg)",
                target.desired_body_fat_percent, target.target_weight_kg, -target.difference_kg
            );
        }
    }

    if let Some(message) = results.elderly_advisory_message() {
        println!("\nWARNING {message}");
    }
}

fn display_equation(equation: PredictiveEquation, estimate: Option<&EquationEstimate>) {
    match estimate {
        Some(estimate) => println!(
            "   {:<16} REE {:>7.0}   TEE {:>7}   net {:>7}",
            equation.name(),
            estimate.kcal,
            optional_kcal(estimate.tee),
            optional_kcal(estimate.net_tee)
        ),
        None => println!("   {:<16} not available", equation.name()),
    }
    println!("   {:<16} {}", "", equation.formula());
}

fn display_energy(results: &ResultSet) {
    section("ENERGY (kcal/day, dry / selected)");
    println!(
        "   BMI factor ({:.0} kcal/kg): {:.0} / {:.0}",
        results.bmi_factor.dry.factor_kcal_per_kg,
        results.bmi_factor.dry.kcal,
        results.bmi_factor.selected.kcal
    );
    for (dry, selected) in results
        .fixed_factor
        .dry
        .iter()
        .zip(results.fixed_factor.selected.iter())
    {
        println!(
            "   {:.0} kcal/kg: {:.0} / {:.0}",
            dry.factor_kcal_per_kg, dry.kcal, selected.kcal
        );
    }

    let ratio = &results.ratio;
    println!(
        "   Ratio ({:?}): sedentary {:.0} / {:.0}, moderate {:.0} / {:.0}, heavy {:.0} / {:.0}",
        ratio.status,
        ratio.dry.sedentary,
        ratio.selected.sedentary,
        ratio.dry.moderate,
        ratio.selected.moderate,
        ratio.dry.heavy,
        ratio.selected.heavy
    );

    let minimum = &results.minimum_requirement;
    println!(
        "   Minimum ({}, -{:.0}% for age): {:.0} / {:.0}",
        minimum.dry.category.label(),
        minimum.age_reduction_percent,
        minimum.dry.kcal,
        minimum.selected.kcal
    );

    let iom = &results.iom;
    println!(
        "   IOM ({}): {:.0} / {}",
        iom.band.label(),
        iom.dry_kcal,
        optional_kcal(iom.selected_kcal)
    );
    println!(
        "   IOM protein: {:.2} g/kg, {:.1} g dry",
        iom.protein_g_per_kg, iom.protein_dry_g
    );

    let predictive = &results.predictive;
    section(&format!(
        "PREDICTIVE EQUATIONS (selected weight, activity {:.2}, thermic {:.2})",
        predictive.activity_factor, predictive.thermic_effect_factor
    ));
    for equation in PredictiveEquation::ALL {
        display_equation(equation, predictive.selected.get(equation));
    }
}

fn display_recommendation(results: &ResultSet, source: RequiredKcalSource) {
    let protocol = &results.recommendation;
    section("RECOMMENDATION");
    println!(
        "   {}: {:.1} kg",
        protocol.basis.label(),
        protocol.recommended_weight_kg
    );
    println!(
        "   High obesity: {}",
        if protocol.is_high_obesity { "Yes" } else { "No" }
    );
    println!(
        "   Required energy ({source}): {} kcal/day",
        optional_kcal(results.required_kcal(source))
    );
    println!("{}", "=".repeat(80));
}
