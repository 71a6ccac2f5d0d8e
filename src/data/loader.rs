use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::model::{method_label, Method, Sample, SampleTable, Scenario};
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Input file name for a method / scenario pair:
/// `pendulum_<method>_<with_force|no_force>.csv`.
pub fn file_name(method: &str, scenario: Scenario) -> String {
    format!("pendulum_{method}_{}.csv", scenario.file_tag())
}

/// Full path of the input file under `dir`.
pub fn file_path(dir: &Path, method: &str, scenario: Scenario) -> PathBuf {
    dir.join(file_name(method, scenario))
}

/// Load one series.
///
/// A missing file is expected (that integrator simply was not run) and
/// yields `Ok(None)` after a warning. A file that exists but does not parse
/// is an error.
pub fn load_table(dir: &Path, method: &str, scenario: Scenario) -> Result<Option<SampleTable>> {
    let path = file_path(dir, method, scenario);

    if !path.exists() {
        warn!("File {} not found.", path.display());
        return Ok(None);
    }

    let samples = read_samples(&path)?;
    debug!("{}: {} samples", path.display(), samples.len());

    Ok(Some(SampleTable {
        method: method_label(method),
        scenario,
        samples,
    }))
}

/// Load every `(method, scenario)` pair that has a file, methods outermost.
pub fn load_all(dir: &Path) -> Result<Vec<SampleTable>> {
    let mut tables = Vec::new();
    for method in Method::ALL {
        for scenario in Scenario::ALL {
            if let Some(table) = load_table(dir, method.id(), scenario)? {
                tables.push(table);
            }
        }
    }
    Ok(tables)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Columns every input file must name in its header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["t", "theta", "omega"];

/// CSV layout: header row, comma-delimited, numeric `t`, `theta` and `omega`
/// columns. Other columns are ignored; every record must have the header's
/// field count. A blank cell reads as NaN.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| PlotError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| PlotError::malformed(path, source))?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(PlotError::malformed(
            path,
            format!("missing column(s): {}", missing.join(", ")),
        ));
    }

    reader
        .deserialize::<Sample>()
        .map(|row| row.map_err(|source| PlotError::malformed(path, source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GAUSS_FORCED: &str = "t,theta,omega\n0,0.1,0.0\n1,0.05,-0.05\n2,0.0,-0.1\n";

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn file_names_follow_the_fixed_pattern() {
        assert_eq!(
            file_name("gauss", Scenario::WithForce),
            "pendulum_gauss_with_force.csv"
        );
        assert_eq!(
            file_name("adaptive", Scenario::NoForce),
            "pendulum_adaptive_no_force.csv"
        );
        assert_eq!(
            file_path(Path::new("csv"), "romberg", Scenario::NoForce),
            Path::new("csv/pendulum_romberg_no_force.csv")
        );
    }

    #[test]
    fn missing_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        let loaded = load_table(dir.path(), "gauss", Scenario::WithForce).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn every_combination_gets_constant_labels() {
        let dir = TempDir::new().unwrap();
        for method in Method::ALL {
            for scenario in Scenario::ALL {
                write(dir.path(), &file_name(method.id(), scenario), GAUSS_FORCED);
            }
        }

        for method in Method::ALL {
            for scenario in Scenario::ALL {
                let table = load_table(dir.path(), method.id(), scenario)
                    .unwrap()
                    .unwrap();
                assert_eq!(table.method, method.display_name());
                assert_eq!(table.scenario, scenario);
                assert_eq!(table.len(), 3);
            }
        }
    }

    #[test]
    fn unmapped_method_is_uppercased() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_foo_no_force.csv", GAUSS_FORCED);
        let table = load_table(dir.path(), "foo", Scenario::NoForce)
            .unwrap()
            .unwrap();
        assert_eq!(table.method, "FOO");
        assert_eq!(table.scenario.label(), "No Force");
    }

    #[test]
    fn parses_values_and_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pendulum_gauss_with_force.csv",
            "t, theta, omega, energy\n0.0, 0.2, 0.0, 1.5\n0.01, 0.1999, -0.0196, 1.49\n",
        );
        let samples = read_samples(&dir.path().join("pendulum_gauss_with_force.csv")).unwrap();
        assert_eq!(
            samples,
            vec![
                Sample {
                    t: 0.0,
                    theta: 0.2,
                    omega: 0.0
                },
                Sample {
                    t: 0.01,
                    theta: 0.1999,
                    omega: -0.0196
                },
            ]
        );
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pendulum_romberg_with_force.csv",
            "t,theta,omega\n0,abc,0\n",
        );
        let err = load_table(dir.path(), "romberg", Scenario::WithForce).unwrap_err();
        assert!(matches!(err, PlotError::MalformedInput { .. }));
        assert!(err.to_string().contains("pendulum_romberg_with_force.csv"));
    }

    #[test]
    fn inconsistent_column_count_is_malformed() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pendulum_gauss_no_force.csv",
            "t,theta,omega\n0,0.1,0\n1,0.2\n",
        );
        let err = load_table(dir.path(), "gauss", Scenario::NoForce).unwrap_err();
        assert!(matches!(err, PlotError::MalformedInput { .. }));
    }

    #[test]
    fn missing_required_column_is_malformed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_gauss_no_force.csv", "t,theta\n0,0.1\n");
        let err = load_table(dir.path(), "gauss", Scenario::NoForce).unwrap_err();
        assert!(matches!(err, PlotError::MalformedInput { .. }));
    }

    #[test]
    fn header_only_file_without_omega_is_malformed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_gauss_with_force.csv", "t,theta\n");
        let err = load_table(dir.path(), "gauss", Scenario::WithForce).unwrap_err();
        assert!(matches!(err, PlotError::MalformedInput { .. }));
        let reason = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(reason, "missing column(s): omega");
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_romberg_no_force.csv", "");
        let err = load_table(dir.path(), "romberg", Scenario::NoForce).unwrap_err();
        assert!(matches!(err, PlotError::MalformedInput { .. }));
        let reason = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(reason, "missing column(s): t, theta, omega");
    }

    #[test]
    fn header_only_file_with_all_columns_is_an_empty_table() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_adaptive_no_force.csv", "t,theta,omega\n");
        let table = load_table(dir.path(), "adaptive", Scenario::NoForce)
            .unwrap()
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn blank_cell_reads_as_nan() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pendulum_gauss_no_force.csv",
            "t,theta,omega\n0,,0\n1, ,-0.5\n",
        );
        let table = load_table(dir.path(), "gauss", Scenario::NoForce)
            .unwrap()
            .unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.samples.iter().all(|s| s.theta.is_nan()));
        assert_eq!(table.samples[1].t, 1.0);
        assert_eq!(table.samples[1].omega, -0.5);
    }

    #[test]
    fn load_all_iterates_methods_then_scenarios() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pendulum_adaptive_with_force.csv", GAUSS_FORCED);
        write(dir.path(), "pendulum_gauss_no_force.csv", GAUSS_FORCED);
        write(dir.path(), "pendulum_gauss_with_force.csv", GAUSS_FORCED);

        let order: Vec<(String, Scenario)> = load_all(dir.path())
            .unwrap()
            .into_iter()
            .map(|t| (t.method, t.scenario))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Gauss".to_string(), Scenario::WithForce),
                ("Gauss".to_string(), Scenario::NoForce),
                ("Adaptive".to_string(), Scenario::WithForce),
            ]
        );
    }

    #[test]
    fn load_all_on_empty_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_all(dir.path()).unwrap().is_empty());
    }
}
