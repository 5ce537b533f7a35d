//! # Kabelkalk CLI Application
//!
//! Terminal front-end for the cable sizing advisor. Prompts for the load
//! parameters, runs the selection pipeline, and prints a report plus JSON
//! output for scripting.

use std::io::{self, BufRead, Write};

use kabel_core::calculations::protection::Application;
use kabel_core::calculations::{select_protection, SizingInput, ADVISORY_NOTE};
use kabel_core::load::{LoadInput, VoltageClass};
use kabel_core::recommendations::Environment;
use kabel_core::tables::{InstallationMethod, Insulation, Material};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|line| line.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt)
        .and_then(|line| line.parse().ok())
        .unwrap_or(default)
}

fn prompt_index(prompt: &str, count: usize, default: usize) -> usize {
    prompt_line(prompt)
        .and_then(|line| line.parse::<usize>().ok())
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
        .unwrap_or(default)
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "CHECK"
    }
}

fn main() {
    println!("Kabelkalk CLI - Cable Sizing Advisor (SS 424 14 26)");
    println!("===================================================");
    println!();

    println!("Supply:");
    for (i, voltage) in VoltageClass::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, voltage);
    }
    let voltage = VoltageClass::ALL[prompt_index("Choose supply [1]: ", VoltageClass::ALL.len(), 0)];

    let current_a = prompt_f64("Load current (A) [16.0]: ", 16.0);
    let length_m = prompt_f64("Cable run length (m) [20.0]: ", 20.0);

    println!();
    println!("Installation method:");
    for (i, method) in InstallationMethod::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, method.display_name());
    }
    let method = InstallationMethod::ALL[prompt_index(
        "Choose method [3]: ",
        InstallationMethod::ALL.len(),
        2,
    )];

    println!();
    println!("Material:");
    for (i, material) in Material::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, material);
    }
    let material = Material::ALL[prompt_index("Choose material [1]: ", Material::ALL.len(), 0)];

    println!();
    println!("Insulation:");
    for (i, insulation) in Insulation::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, insulation);
    }
    let insulation =
        Insulation::ALL[prompt_index("Choose insulation [1]: ", Insulation::ALL.len(), 0)];

    println!();
    println!("Environment:");
    for (i, environment) in Environment::ALL.iter().enumerate() {
        let range = environment.climate_range();
        println!(
            "  {}. {} ({}-{}°C, typical {}°C)",
            i + 1,
            environment,
            range.min_c,
            range.max_c,
            range.typical_c
        );
    }
    let environment =
        Environment::ALL[prompt_index("Choose environment [1]: ", Environment::ALL.len(), 0)];

    let typical = environment.climate_range().typical_c;
    let ambient_temp_c = prompt_f64(
        &format!("Ambient temperature (°C) [{}]: ", typical),
        typical,
    );
    let grouping = prompt_u32("Grouped circuits [1]: ", 1);

    println!();
    println!("Application:");
    for (i, application) in Application::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, application);
    }
    let application =
        Application::ALL[prompt_index("Choose application [1]: ", Application::ALL.len(), 0)];

    let input = SizingInput {
        voltage,
        load: LoadInput::Current { current_a },
        length_m,
        method,
        material,
        insulation,
        ambient_temp_c,
        grouping,
        application,
        environment,
    };

    println!();
    match select_protection(&input) {
        Ok(result) => {
            println!("=======================================");
            println!("  CABLE SIZING RESULTS");
            println!("=======================================");
            println!();
            println!("Input:");
            println!("  Supply:      {}", voltage);
            println!("  Current:     {:.1} A", result.design_current_a);
            println!("  Run length:  {:.0} m, method {}", length_m, method);
            println!(
                "  Conditions:  {}°C, {} circuit(s), {}",
                ambient_temp_c, grouping, insulation
            );
            println!();
            println!("Shopping list:");
            println!(
                "  Cable:   {} mm² {} ({})",
                result.cable.size_mm2,
                material.symbol(),
                result.recommendations.construction
            );
            println!("           {}", result.recommendations.designation);
            println!(
                "           Length: {:.0} m + 10% = {:.1} m",
                length_m, result.recommendations.purchase_length_m
            );
            println!(
                "  MCB:     {} A, breaking capacity {} kA {}",
                result.breaker_rating_a,
                result.recommendations.breaking_capacity_ka,
                status_icon(result.breaker_coordinated)
            );
            println!(
                "  RCD:     {} mA {}{} - {}",
                result.rcd.sensitivity_ma,
                result.rcd.class,
                if result.rcd.time_delayed {
                    " (time-delayed)"
                } else {
                    ""
                },
                if result.rcd.mandatory {
                    "MANDATORY"
                } else {
                    "recommended"
                }
            );
            println!();
            println!("Checks:");
            println!(
                "  Ampacity:     {:.1} A base, {:.1} A derated (temp {:.2} × group {:.2}) {}",
                result.cable.base_ampacity_a,
                result.cable.derated_ampacity_a,
                result.derating.temperature,
                result.derating.grouping,
                status_icon(result.cable.current_sufficient)
            );
            println!(
                "  Voltage drop: {:.2} V ({:.2}%, limit 4%) {}",
                result.cable.voltage_drop_v,
                result.cable.voltage_drop_percent,
                status_icon(result.cable.voltage_drop_acceptable)
            );
            if result.escalated_for_breaker {
                println!("  Note: cable size raised to satisfy breaker coordination");
            }
            if !result.is_fully_compliant() {
                println!("  WARNING: no fully compliant option - review the flags above");
            }
            println!();
            println!("  {}", result.rcd.rationale);
            println!();
            println!("=======================================");
            println!("  {}", ADVISORY_NOTE);
            println!("=======================================");

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
