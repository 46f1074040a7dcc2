//! Smart Eco City Headless Simulation Harness
//!
//! Validates the simulation logic without the interactive menu.
//! Runs entirely in-process: scripted scenarios go straight into a `City`.
//!
//! Usage:
//!   cargo run -p ecocity-simtest
//!   cargo run -p ecocity-simtest -- --verbose

use ecocity_logic::activity::Activity;
use ecocity_logic::activity_log::{read_log_file, ActivityLog};
use ecocity_logic::building::Building;
use ecocity_logic::citizen::Citizen;
use ecocity_logic::city::City;
use ecocity_logic::command::Command;
use ecocity_logic::config::CityConfig;
use ecocity_logic::constants::capacity::{MAX_BUILDINGS, MAX_LOGS};
use ecocity_logic::emissions::{EmissionRates, EmissionTotals};
use ecocity_logic::entity::EntityKind;
use ecocity_logic::error::CityError;
use ecocity_logic::registry::Registry;
use ecocity_logic::transport::Transport;
use ecocity_logic::upgrade::upgrade;
use serde::Deserialize;

// ── Scenarios (the same commands the menu issues) ──────────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    commands: Vec<Command>,
    #[serde(default)]
    expect: Expectation,
}

#[derive(Debug, Default, Deserialize)]
struct Expectation {
    cox: Option<i64>,
    sox: Option<f64>,
    nox: Option<f64>,
    buildings: Option<usize>,
    transports: Option<usize>,
    citizens: Option<usize>,
    power_sources: Option<usize>,
    log_entries: Option<usize>,
    /// Number of commands expected to fail.
    errors: Option<usize>,
    /// Happiness of each citizen, by index.
    happiness: Option<Vec<i32>>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Smart Eco City Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Emission rate table
    results.extend(validate_emission_table(verbose));

    // 2. Registry bounds
    results.extend(validate_registry(verbose));

    // 3. Citizens and activities
    results.extend(validate_happiness(verbose));

    // 4. Upgrade gate
    results.extend(validate_upgrade(verbose));

    // 5. Activity log buffer and file
    results.extend(validate_activity_log(verbose));

    // 6. Scripted scenarios
    results.extend(validate_scenarios(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ── 1. Emission Table ───────────────────────────────────────────────────

fn validate_emission_table(verbose: bool) -> Vec<TestResult> {
    println!("--- Emission Table ---");
    let mut results = Vec::new();

    let vehicles = [
        (Transport::electric_bus("E"), EmissionRates::new(0, 0.0, 0.0)),
        (Transport::diesel_bus("D"), EmissionRates::new(160, 0.5, 1.0)),
        (Transport::car("C"), EmissionRates::new(140, 0.7, 1.3)),
    ];

    for (vehicle, expected) in &vehicles {
        let label = vehicle.kind().label();
        results.push(TestResult {
            name: format!("rates_{}", label.to_lowercase().replace(' ', "_")),
            passed: vehicle.rates() == *expected,
            detail: format!("{:?}", vehicle.rates()),
        });

        // emit(d) == rate * d across a distance sweep, including 0 and negatives
        let mismatches: Vec<i64> = (-20..=200)
            .filter(|&d| {
                let e = vehicle.emit(d);
                e.cox != expected.cox * d
                    || e.sox != expected.sox * d as f64
                    || e.nox != expected.nox * d as f64
            })
            .collect();
        results.push(TestResult {
            name: format!("emit_linear_{}", label.to_lowercase().replace(' ', "_")),
            passed: mismatches.is_empty(),
            detail: if mismatches.is_empty() {
                "emit(d) == rate × d for d in -20..=200".into()
            } else {
                format!("{} distances mismatched, first {}", mismatches.len(), mismatches[0])
            },
        });
    }

    // Accumulation is order-independent
    let trips: Vec<_> = vehicles
        .iter()
        .flat_map(|(v, _)| [3, 17, 0, -1].map(|d| v.emit(d)))
        .collect();
    let mut forward = EmissionTotals::new();
    trips.iter().for_each(|t| forward.record(t));
    let mut reverse = EmissionTotals::new();
    trips.iter().rev().for_each(|t| reverse.record(t));
    let (f, r) = (forward.snapshot(), reverse.snapshot());
    results.push(TestResult {
        name: "accumulation_order_independent".into(),
        passed: f.cox == r.cox && close(f.sox, r.sox) && close(f.nox, r.nox),
        detail: format!("forward {:?} / reverse {:?}", f, r),
    });

    if verbose {
        for line in forward.report_lines() {
            println!("    {}", line);
        }
    }

    results
}

// ── 2. Registry ─────────────────────────────────────────────────────────

fn validate_registry(_verbose: bool) -> Vec<TestResult> {
    println!("--- Registry ---");
    let mut results = Vec::new();

    let mut reg = Registry::new(EntityKind::Building, MAX_BUILDINGS);
    let indices: Vec<_> = (0..MAX_BUILDINGS)
        .map(|i| reg.add(Building::residential(format!("B{i}"), 10)))
        .collect();
    results.push(TestResult {
        name: "registry_indices_sequential".into(),
        passed: indices
            .iter()
            .enumerate()
            .all(|(i, r)| r.as_ref().ok() == Some(&i)),
        detail: format!("{:?}", indices),
    });

    let overflow = reg.add(Building::commercial("Overflow", 1));
    results.push(TestResult {
        name: "registry_rejects_sixth".into(),
        passed: matches!(overflow, Err(CityError::CapacityExceeded { .. })) && reg.len() == 5,
        detail: format!("len {} after overflow attempt", reg.len()),
    });

    results.push(TestResult {
        name: "registry_out_of_range".into(),
        passed: matches!(reg.get(5), Err(CityError::IndexOutOfRange { .. })),
        detail: "get(5) on 5 entries is an error".into(),
    });

    results
}

// ── 3. Happiness ────────────────────────────────────────────────────────

fn validate_happiness(_verbose: bool) -> Vec<TestResult> {
    println!("--- Citizens ---");
    let mut results = Vec::new();

    let mut citizen = Citizen::new("Probe");
    let mut ok = citizen.happiness() == 50;
    for n in 1..=40 {
        let activity = Activity::ALL[n % Activity::ALL.len()];
        activity.execute(&mut citizen);
        ok &= citizen.happiness() == 50 + 5 * n as i32;
    }
    citizen.participate("something not in the catalog");
    ok &= citizen.happiness() == 50 + 5 * 41;

    results.push(TestResult {
        name: "happiness_linear".into(),
        passed: ok,
        detail: format!("happiness {} after 41 activities", citizen.happiness()),
    });

    results
}

// ── 4. Upgrade ──────────────────────────────────────────────────────────

fn validate_upgrade(_verbose: bool) -> Vec<TestResult> {
    println!("--- Upgrade ---");
    let building = Building::commercial("Gate", 100);
    let refused = upgrade(&building, 499);
    let accepted = upgrade(&building, 500);

    vec![
        TestResult {
            name: "upgrade_refuses_499".into(),
            passed: matches!(refused, Err(CityError::BudgetExceeded { budget: 499 })),
            detail: format!("{:?}", refused),
        },
        TestResult {
            name: "upgrade_accepts_500".into(),
            passed: accepted.is_ok(),
            detail: format!("{:?}", accepted),
        },
    ]
}

// ── 5. Activity Log ─────────────────────────────────────────────────────

fn validate_activity_log(_verbose: bool) -> Vec<TestResult> {
    println!("--- Activity Log ---");
    let mut results = Vec::new();

    let mut log = ActivityLog::new();
    for i in 0..MAX_LOGS {
        let _ = log.add(format!("entry {i}"));
    }
    let rejected = log.add("entry 10");
    results.push(TestResult {
        name: "log_rejects_eleventh".into(),
        passed: rejected.is_err()
            && log.len() == MAX_LOGS
            && log.entries().first().map(String::as_str) == Some("entry 0")
            && log.entries().last().map(String::as_str) == Some("entry 9"),
        detail: format!("{} entries held", log.len()),
    });

    let path = std::env::temp_dir().join(format!("ecocity-simtest-{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let saved = log.save_to_file(&path).and_then(|_| log.save_to_file(&path));
    let lines = read_log_file(&path).map(|t| t.lines().count());
    results.push(TestResult {
        name: "log_save_duplicates".into(),
        passed: saved.is_ok() && lines.as_ref().ok() == Some(&(2 * MAX_LOGS)),
        detail: format!("{:?} lines after two saves", lines),
    });
    let _ = std::fs::remove_file(&path);

    results
}

// ── 6. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    let log_path =
        std::env::temp_dir().join(format!("ecocity-scenario-{}.txt", std::process::id()));

    for scenario in scenarios {
        let mut city = City::new(CityConfig::with_log_path(&log_path));
        let mut errors = 0;
        for command in scenario.commands {
            match city.execute(command) {
                Ok(lines) => {
                    if verbose {
                        for line in lines {
                            println!("    {}", line);
                        }
                    }
                }
                Err(err) => {
                    errors += 1;
                    if verbose {
                        println!("    ! {}", err);
                    }
                }
            }
        }

        let mismatches = check_expectation(&city, errors, &scenario.expect);
        results.push(TestResult {
            name: format!("scenario_{}", scenario.name),
            passed: mismatches.is_empty(),
            detail: if mismatches.is_empty() {
                format!("{:?}", city.total_emissions())
            } else {
                mismatches.join("; ")
            },
        });
    }

    let _ = std::fs::remove_file(&log_path);
    results
}

fn check_expectation(city: &City, errors: usize, expect: &Expectation) -> Vec<String> {
    let mut mismatches = Vec::new();
    let totals = city.total_emissions();

    if let Some(cox) = expect.cox {
        if totals.cox != cox {
            mismatches.push(format!("cox {} != {}", totals.cox, cox));
        }
    }
    if let Some(sox) = expect.sox {
        if !close(totals.sox, sox) {
            mismatches.push(format!("sox {:.4} != {:.4}", totals.sox, sox));
        }
    }
    if let Some(nox) = expect.nox {
        if !close(totals.nox, nox) {
            mismatches.push(format!("nox {:.4} != {:.4}", totals.nox, nox));
        }
    }

    let counts = [
        ("buildings", expect.buildings, city.buildings().len()),
        ("transports", expect.transports, city.transports().len()),
        ("citizens", expect.citizens, city.citizens().len()),
        ("power_sources", expect.power_sources, city.power_sources().len()),
        ("log_entries", expect.log_entries, city.log().len()),
        ("errors", expect.errors, errors),
    ];
    for (label, expected, actual) in counts {
        if let Some(expected) = expected {
            if expected != actual {
                mismatches.push(format!("{} {} != {}", label, actual, expected));
            }
        }
    }

    if let Some(happiness) = &expect.happiness {
        let actual: Vec<i32> = city.citizens().iter().map(Citizen::happiness).collect();
        if &actual != happiness {
            mismatches.push(format!("happiness {:?} != {:?}", actual, happiness));
        }
    }

    mismatches
}
