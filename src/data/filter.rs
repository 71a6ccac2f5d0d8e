use super::model::{CombinedDataset, LabeledSample, Scenario};

// ---------------------------------------------------------------------------
// Row predicate: which method / scenario to keep
// ---------------------------------------------------------------------------

/// Selection on the label columns. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub method: Option<String>,
    pub scenario: Option<Scenario>,
}

impl RowFilter {
    pub fn scenario(scenario: Scenario) -> Self {
        Self {
            method: None,
            scenario: Some(scenario),
        }
    }

    pub fn method_and_scenario(method: &str, scenario: Scenario) -> Self {
        Self {
            method: Some(method.to_string()),
            scenario: Some(scenario),
        }
    }

    pub fn matches(&self, row: &LabeledSample) -> bool {
        let method_ok = self.method.as_deref().map_or(true, |m| row.method == m);
        let scenario_ok = self.scenario.map_or(true, |s| row.scenario == s);
        method_ok && scenario_ok
    }
}

/// Return indices of rows that pass the filter, in dataset order.
pub fn filtered_indices(dataset: &CombinedDataset, filter: &RowFilter) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| filter.matches(row))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Plot series
// ---------------------------------------------------------------------------

/// One named line: `(x, y)` points in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub method: String,
    pub points: Vec<(f64, f64)>,
}

/// `theta` against `t` for every method present in `scenario`.
///
/// Methods appear in the dataset's first-appearance order; methods with no
/// rows in this scenario are left out. Points are sorted by time.
pub fn time_series_by_method(dataset: &CombinedDataset, scenario: Scenario) -> Vec<Series> {
    dataset
        .methods
        .iter()
        .filter_map(|method| {
            let filter = RowFilter::method_and_scenario(method, scenario);
            let mut points: Vec<(f64, f64)> = dataset
                .rows
                .iter()
                .filter(|row| filter.matches(row))
                .map(|row| (row.sample.t, row.sample.theta))
                .collect();
            if points.is_empty() {
                return None;
            }
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
            Some(Series {
                method: method.clone(),
                points,
            })
        })
        .collect()
}

/// `(theta, omega)` trajectory of one method, in file order.
pub fn phase_trajectory(
    dataset: &CombinedDataset,
    method: &str,
    scenario: Scenario,
) -> Vec<(f64, f64)> {
    let filter = RowFilter::method_and_scenario(method, scenario);
    filtered_indices(dataset, &filter)
        .into_iter()
        .map(|i| {
            let s = &dataset.rows[i].sample;
            (s.theta, s.omega)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Sample, SampleTable};

    fn table(method: &str, scenario: Scenario, ts: &[f64]) -> SampleTable {
        SampleTable {
            method: method.to_string(),
            scenario,
            samples: ts
                .iter()
                .map(|&t| Sample {
                    t,
                    theta: t * 0.5,
                    omega: -t,
                })
                .collect(),
        }
    }

    fn dataset() -> CombinedDataset {
        CombinedDataset::concat(&[
            table("Gauss", Scenario::WithForce, &[0.0, 1.0, 2.0]),
            table("Gauss", Scenario::NoForce, &[0.0, 1.0]),
            table("Adaptive", Scenario::WithForce, &[0.0, 0.5, 1.0, 1.5]),
        ])
    }

    #[test]
    fn scenario_filter_reproduces_per_file_row_counts() {
        let ds = dataset();
        let forced = filtered_indices(&ds, &RowFilter::scenario(Scenario::WithForce));
        let free = filtered_indices(&ds, &RowFilter::scenario(Scenario::NoForce));
        assert_eq!(forced.len(), 3 + 4);
        assert_eq!(free.len(), 2);
        assert_eq!(filtered_indices(&ds, &RowFilter::default()).len(), ds.len());
    }

    #[test]
    fn time_series_skip_methods_without_rows() {
        let ds = dataset();
        let free = time_series_by_method(&ds, Scenario::NoForce);
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].method, "Gauss");
        assert_eq!(free[0].points, vec![(0.0, 0.0), (1.0, 0.5)]);

        let forced = time_series_by_method(&ds, Scenario::WithForce);
        let names: Vec<&str> = forced.iter().map(|s| s.method.as_str()).collect();
        assert_eq!(names, vec!["Gauss", "Adaptive"]);
    }

    #[test]
    fn time_series_are_sorted_by_time() {
        let ds = CombinedDataset::concat(&[table("Romberg", Scenario::WithForce, &[2.0, 0.0, 1.0])]);
        let series = time_series_by_method(&ds, Scenario::WithForce);
        let ts: Vec<f64> = series[0].points.iter().map(|p| p.0).collect();
        assert_eq!(ts, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn phase_trajectory_keeps_file_order() {
        let ds = CombinedDataset::concat(&[table("Romberg", Scenario::WithForce, &[2.0, 0.0])]);
        assert_eq!(
            phase_trajectory(&ds, "Romberg", Scenario::WithForce),
            vec![(1.0, -2.0), (0.0, -0.0)]
        );
    }

    #[test]
    fn phase_trajectory_of_absent_method_is_empty() {
        let ds = dataset();
        assert!(phase_trajectory(&ds, "Romberg", Scenario::WithForce).is_empty());
        assert!(phase_trajectory(&ds, "Adaptive", Scenario::NoForce).is_empty());
    }
}
