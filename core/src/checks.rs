//! Hidden checks: scrape lab output for the student's assigned values.
//!
//! Every check is a pure function over captured stdout and returns the
//! list of failures (empty = pass). `HiddenSuite` runs the `lab1`
//! program once per scenario through the subprocess harness and applies
//! the matching checks.

use crate::{
    config::AssignedValues,
    error::LabResult,
    lab::{
        calculations::CoreCalculations,
        sample_entry::{GradeClass, SampleEntry},
        Lab,
    },
    process::{run_captured, HIDDEN_TEST_TIMEOUT},
    variant::{format_decimal, RockType, DEPTH_RANGE, GRADE_RANGE, MASS_RANGE, VOLUME_RANGE},
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Depth placeholder shipped in the starter code.
pub const PLACEHOLDER_DEPTH: i64 = 225;
/// Density and interval produced by the starter mass/volume/depth.
const STARTER_DENSITY: &str = "1.49";
const STARTER_INTERVAL: &str = "125";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailure {
    pub check:   &'static str,
    pub message: String,
}

impl CheckFailure {
    fn new(check: &'static str, message: impl Into<String>) -> Self {
        Self { check, message: message.into() }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.check, self.message)
    }
}

fn require(failures: &mut Vec<CheckFailure>, check: &'static str, ok: bool, message: impl FnOnce() -> String) {
    if !ok {
        failures.push(CheckFailure::new(check, message()));
    }
}

/// The assigned values themselves are within their documented ranges.
pub fn check_expected_ranges(values: &AssignedValues) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let (dlo, dhi) = (i64::from(DEPTH_RANGE.0), i64::from(DEPTH_RANGE.1));
    require(&mut failures, "depth_range", (dlo..=dhi).contains(&values.sample_depth), || {
        format!("sample_depth {} is outside [{dlo}, {dhi}]", values.sample_depth)
    });
    for (check, name, value, (lo, hi)) in [
        ("mass_range", "sample_mass", values.sample_mass, MASS_RANGE),
        ("volume_range", "sample_volume", values.sample_volume, VOLUME_RANGE),
        ("grade_range", "grade_value", values.grade_value, GRADE_RANGE),
    ] {
        require(&mut failures, check, (lo..=hi).contains(&value), || {
            format!("{name} {value} is outside [{lo}, {hi}]")
        });
    }
    require(&mut failures, "rock_type", RockType::from_name(&values.rock_type).is_some(), || {
        format!("rock_type '{}' is not one of {:?}", values.rock_type, RockType::ALL)
    });
    failures
}

/// Variables output shows the assigned depth, grade and rock type, and a
/// line for each of the four value kinds.
pub fn check_variables(output: &str, values: &AssignedValues) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let depth = values.sample_depth.to_string();
    let grade = format_decimal(values.grade_value);

    require(&mut failures, "variables_depth", output.contains(&depth), || {
        format!("expected depth value {depth} not found in output")
    });
    require(&mut failures, "variables_grade", output.contains(&grade), || {
        format!("expected grade value {grade} not found in output")
    });
    require(&mut failures, "variables_rock_type", output.contains(&values.rock_type), || {
        format!("expected rock_type '{}' not found in output", values.rock_type)
    });

    let lower = output.to_lowercase();
    for kind in ["int", "float", "str", "bool"] {
        require(&mut failures, "variables_kinds", lower.contains(kind), || {
            format!("type '{kind}' not shown in output")
        });
    }

    if values.sample_depth != PLACEHOLDER_DEPTH {
        let placeholder = PLACEHOLDER_DEPTH.to_string();
        if let Some(line) = lower.lines().find(|l| l.contains("depth") && l.contains("type")) {
            require(
                &mut failures,
                "variables_placeholder",
                !line.contains(&placeholder) || line.contains("sample_depth"),
                || format!("depth still has the placeholder value {PLACEHOLDER_DEPTH}"),
            );
        }
    }
    failures
}

/// Calculations output reflects the assigned mass, volume and depth.
pub fn check_calculations(output: &str, values: &AssignedValues) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let calc = CoreCalculations::compute(values);

    let density = format!("{:.2}", calc.density);
    require(&mut failures, "calculations_density", output.contains(&density), || {
        format!(
            "expected density {density} (mass={} / volume={}) not found in output",
            format_decimal(values.sample_mass),
            format_decimal(values.sample_volume)
        )
    });

    let interval = calc.interval.to_string();
    require(&mut failures, "calculations_interval", output.contains(&interval), || {
        format!("expected drilling interval {interval} not found in output")
    });

    let average = format!("{:.1}", calc.average_depth);
    let average_found = output.contains(&average)
        || (calc.average_depth.fract() == 0.0 && output.contains(&format!("{}", calc.average_depth as i64)));
    require(&mut failures, "calculations_average", average_found, || {
        format!("expected average depth {average} not found in output")
    });

    let volume = format!("{:.4}", calc.core_volume);
    require(&mut failures, "calculations_core_volume", output.contains(&volume), || {
        format!("expected core volume {volume} not found in output")
    });

    if density != STARTER_DENSITY {
        require(
            &mut failures,
            "calculations_starter_values",
            !(output.contains(STARTER_DENSITY) && output.contains(STARTER_INTERVAL)),
            || "calculations appear to use the starter mass/volume/depth".to_string(),
        );
    }
    failures
}

/// Classification follows the inclusive 2.0% threshold for `grade`.
pub fn check_sample_entry(output: &str, grade: f64) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let lower = output.to_lowercase();
    match GradeClass::classify(grade) {
        GradeClass::Economic => {
            require(
                &mut failures,
                "input_classification",
                lower.contains("economic") && !lower.contains("sub-economic"),
                || format!("grade {grade} should be classified as Economic"),
            );
        }
        GradeClass::SubEconomic => {
            require(&mut failures, "input_classification", lower.contains("sub-economic"), || {
                format!("grade {grade} should be classified as Sub-economic")
            });
        }
    }
    failures
}

/// Summary echoes every entered field.
pub fn check_sample_summary(output: &str, entry: &SampleEntry) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let lower = output.to_lowercase();
    require(&mut failures, "summary_header", lower.contains("summary"), || {
        "should print a 'Summary' header".to_string()
    });
    require(&mut failures, "summary_sample_id", lower.contains(&entry.sample_id.to_lowercase()), || {
        format!("sample ID '{}' not shown", entry.sample_id)
    });
    require(&mut failures, "summary_rock_type", lower.contains(&entry.rock_type.to_lowercase()), || {
        format!("rock type '{}' not shown", entry.rock_type)
    });
    let grade = format!("{:.2}", entry.grade);
    require(&mut failures, "summary_grade", output.contains(&grade), || {
        format!("grade {grade} not shown")
    });
    let depth = entry.depth.to_string();
    require(&mut failures, "summary_depth", output.contains(&depth), || {
        format!("depth {depth} not shown")
    });
    failures
}

/// String-operations output labels each operation and shows the slices.
pub fn check_strings(output: &str) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    let lower = output.to_lowercase();
    require(&mut failures, "strings_original", output.contains("GEO-2024-001"), || {
        "original sample ID not printed".to_string()
    });
    require(&mut failures, "strings_lowercase", lower.contains("lowercase") && output.contains("geo-2024-001"), || {
        "lowercase operation missing".to_string()
    });
    require(&mut failures, "strings_replace", lower.contains("replace") && output.contains("SAMPLE"), || {
        "replace GEO -> SAMPLE missing".to_string()
    });
    require(&mut failures, "strings_strip", lower.contains("strip"), || {
        "strip operation missing".to_string()
    });
    require(&mut failures, "strings_slices", output.contains("2024") && output.contains("GEO"), || {
        "year / first-3-chars slices missing".to_string()
    });
    failures
}

/// One lab program run and the failures found in its output.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    /// `None` for checks on the assigned values themselves.
    pub lab:      Option<Lab>,
    pub failures: Vec<CheckFailure>,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(ScenarioResult::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ScenarioResult, &CheckFailure)> {
        self.results.iter().flat_map(|r| r.failures.iter().map(move |f| (r, f)))
    }
}

/// Runs `program <lab> <extra_args..>` per scenario and checks the output
/// against `expected`.
pub struct HiddenSuite {
    pub program:    PathBuf,
    pub extra_args: Vec<String>,
    pub expected:   AssignedValues,
}

impl HiddenSuite {
    pub fn new(program: impl Into<PathBuf>, expected: AssignedValues) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
            expected,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run `lab` with optional stdin. A non-zero exit or a timeout is an error.
    pub fn run_lab(&self, lab: Lab, stdin: Option<&str>) -> LabResult<String> {
        let mut args = vec![lab.name().to_string()];
        args.extend(self.extra_args.iter().cloned());
        let captured = run_captured(&self.program, &args, stdin, HIDDEN_TEST_TIMEOUT)?.ensure_success()?;
        Ok(captured.stdout)
    }

    pub fn run(&self) -> LabResult<SuiteReport> {
        let expected = &self.expected;
        let mut results = vec![ScenarioResult {
            scenario: "expected_ranges".into(),
            lab:      None,
            failures: check_expected_ranges(expected),
        }];

        let output = self.run_lab(Lab::Variables, None)?;
        results.push(scenario_result("variables", Lab::Variables, check_variables(&output, expected)));

        let output = self.run_lab(Lab::Calculations, None)?;
        results.push(scenario_result("calculations", Lab::Calculations, check_calculations(&output, expected)));

        let entries = [
            ("input_assigned_grade", entry("GEO-TEST", &expected.rock_type, expected.grade_value, 200)),
            ("input_boundary", entry("GEO-BOUNDARY", "Basalt", 2.0, 300)),
            ("input_format", entry("GEO-FORMAT", "Sandstone", 3.25, 400)),
            {
                let alt = AssignedValues::alternative();
                ("input_alternative", entry("GEO-ALT", &alt.rock_type, alt.grade_value, alt.sample_depth))
            },
        ];
        for (scenario, sample) in entries {
            let stdin = format!(
                "{}\n{}\n{}\n{}\n",
                sample.sample_id,
                sample.rock_type,
                format_decimal(sample.grade),
                sample.depth
            );
            let output = self.run_lab(Lab::SampleEntry, Some(&stdin))?;
            let mut failures = check_sample_entry(&output, sample.grade);
            failures.extend(check_sample_summary(&output, &sample));
            results.push(scenario_result(scenario, Lab::SampleEntry, failures));
        }

        let output = self.run_lab(Lab::Strings, None)?;
        results.push(scenario_result("strings", Lab::Strings, check_strings(&output)));

        let report = SuiteReport { results };
        for (result, failure) in report.failures() {
            log::error!("{}: {failure}", result.scenario);
        }
        Ok(report)
    }
}

fn scenario_result(scenario: &str, lab: Lab, failures: Vec<CheckFailure>) -> ScenarioResult {
    log::debug!("scenario {scenario}: {} failure(s)", failures.len());
    ScenarioResult {
        scenario: scenario.to_string(),
        lab: Some(lab),
        failures,
    }
}

fn entry(sample_id: &str, rock_type: &str, grade: f64, depth: i64) -> SampleEntry {
    SampleEntry {
        sample_id: sample_id.to_string(),
        rock_type: rock_type.to_string(),
        grade,
        depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::{calculations, sample_entry, strings, variables};

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn ranges_accept_defaults_and_alternative() {
        assert!(check_expected_ranges(&AssignedValues::default()).is_empty());
        assert!(check_expected_ranges(&AssignedValues::alternative()).is_empty());
    }

    #[test]
    fn ranges_reject_out_of_table_values() {
        let values = AssignedValues {
            sample_depth: 500,
            rock_type: "Marble".into(),
            ..AssignedValues::default()
        };
        let checks: Vec<_> = check_expected_ranges(&values).into_iter().map(|f| f.check).collect();
        assert_eq!(checks, ["depth_range", "rock_type"]);
    }

    #[test]
    fn completed_variables_pass() {
        let values = AssignedValues::alternative();
        let output = render(|out| variables::run(&values, out).expect("run"));
        let failures = check_variables(&output, &values);
        assert!(failures.is_empty(), "{failures:?}");
    }

    #[test]
    fn variables_with_someone_elses_values_fail() {
        let output = render(|out| variables::run(&AssignedValues::default(), out).expect("run"));
        let failures = check_variables(&output, &AssignedValues::alternative());
        assert!(failures.iter().any(|f| f.check == "variables_depth"));
        assert!(failures.iter().any(|f| f.check == "variables_rock_type"));
    }

    #[test]
    fn placeholder_depth_is_flagged() {
        let output = "Depth: 225, type: int\nGrade: 3.78, type: float\nRock type: Schist, type: str\nProcessed: false, type: bool\n";
        let failures = check_variables(output, &AssignedValues::alternative());
        assert!(failures.iter().any(|f| f.check == "variables_placeholder"));
    }

    #[test]
    fn completed_calculations_pass() {
        let values = AssignedValues::alternative();
        let output = render(|out| calculations::run(&values, out).expect("run"));
        let failures = check_calculations(&output, &values);
        assert!(failures.is_empty(), "{failures:?}");
    }

    #[test]
    fn starter_calculations_are_flagged() {
        let starter = AssignedValues {
            sample_depth: PLACEHOLDER_DEPTH,
            sample_mass: 11.6,
            sample_volume: 7.8,
            ..AssignedValues::default()
        };
        let output = render(|out| calculations::run(&starter, out).expect("run"));
        let failures = check_calculations(&output, &AssignedValues::default());
        assert!(failures.iter().any(|f| f.check == "calculations_starter_values"));
        assert!(failures.iter().any(|f| f.check == "calculations_density"));
    }

    #[test]
    fn classification_checks() {
        let run = |stdin: &str| {
            render(|out| sample_entry::run(&mut stdin.as_bytes(), out).expect("run"))
        };
        assert!(check_sample_entry(&run("A\nBasalt\n2.0\n300\n"), 2.0).is_empty());
        assert!(check_sample_entry(&run("A\nBasalt\n1.99\n300\n"), 1.99).is_empty());
        assert!(!check_sample_entry(&run("A\nBasalt\n1.99\n300\n"), 2.0).is_empty());
        assert!(!check_sample_entry("Classification: Economic", 1.5).is_empty());
    }

    #[test]
    fn summary_format() {
        let output = render(|out| {
            sample_entry::run(&mut "GEO-FORMAT\nSandstone\n3.25\n400\n".as_bytes(), out).expect("run")
        });
        let expected = entry("GEO-FORMAT", "Sandstone", 3.25, 400);
        assert!(check_sample_summary(&output, &expected).is_empty());

        let failures = check_sample_summary("nothing here", &expected);
        assert_eq!(failures.len(), 5);
    }

    #[test]
    fn strings_pass_and_fail() {
        let output = render(|out| strings::run(&AssignedValues::default(), out).expect("run"));
        assert!(check_strings(&output).is_empty());
        assert!(!check_strings("Original ID: GEO-2024-001\n").is_empty());
    }
}
