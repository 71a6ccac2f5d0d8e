use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Method – which integrator produced a series
// ---------------------------------------------------------------------------

/// The integrators whose output is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Gauss,
    Romberg,
    Adaptive,
}

/// Identifier → display name lookup, indexed by discriminant.
const METHOD_NAMES: [(Method, &str, &str); 3] = [
    (Method::Gauss, "gauss", "Gauss"),
    (Method::Romberg, "romberg", "Romberg"),
    (Method::Adaptive, "adaptive", "Adaptive"),
];

impl Method {
    /// All methods, in the order files are loaded and phase panels are laid out.
    pub const ALL: [Method; 3] = [Method::Gauss, Method::Romberg, Method::Adaptive];

    /// Identifier used in file names.
    pub fn id(self) -> &'static str {
        METHOD_NAMES[self as usize].1
    }

    /// Name shown in legends and titles.
    pub fn display_name(self) -> &'static str {
        METHOD_NAMES[self as usize].2
    }

    pub fn from_id(id: &str) -> Option<Method> {
        METHOD_NAMES
            .iter()
            .find(|(_, known, _)| *known == id)
            .map(|(m, _, _)| *m)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display label for a raw method identifier.
///
/// Unknown identifiers are shown upper-cased rather than rejected.
pub fn method_label(id: &str) -> String {
    match Method::from_id(id) {
        Some(method) => method.display_name().to_string(),
        None => id.to_uppercase(),
    }
}

// ---------------------------------------------------------------------------
// Scenario – driven or free pendulum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scenario {
    WithForce,
    NoForce,
}

impl Scenario {
    /// Load order: forced first.
    pub const ALL: [Scenario; 2] = [Scenario::WithForce, Scenario::NoForce];

    pub fn from_forced(forced: bool) -> Self {
        if forced {
            Scenario::WithForce
        } else {
            Scenario::NoForce
        }
    }

    pub fn is_forced(self) -> bool {
        self == Scenario::WithForce
    }

    /// Value of the `Scenario` label column.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::WithForce => "With Force",
            Scenario::NoForce => "No Force",
        }
    }

    /// Fragment used in file names.
    pub fn file_tag(self) -> &'static str {
        match self {
            Scenario::WithForce => "with_force",
            Scenario::NoForce => "no_force",
        }
    }
}

impl From<bool> for Scenario {
    fn from(forced: bool) -> Self {
        Scenario::from_forced(forced)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Sample – one row of an input file
// ---------------------------------------------------------------------------

/// One simulation timestep. Blank cells read as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time (s).
    #[serde(deserialize_with = "nan_if_blank")]
    pub t: f64,
    /// Angle (rad).
    #[serde(deserialize_with = "nan_if_blank")]
    pub theta: f64,
    /// Angular velocity (rad/s).
    #[serde(deserialize_with = "nan_if_blank")]
    pub omega: f64,
}

fn nan_if_blank<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

// ---------------------------------------------------------------------------
// SampleTable – one parsed input file with its labels
// ---------------------------------------------------------------------------

/// The parsed contents of one `(method, scenario)` file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// Display label of the method (constant for the table).
    pub method: String,
    pub scenario: Scenario,
    pub samples: Vec<Sample>,
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CombinedDataset – all loaded tables, concatenated
// ---------------------------------------------------------------------------

/// One row of the combined dataset: a sample plus its label columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub sample: Sample,
    pub method: String,
    pub scenario: Scenario,
}

/// Row-union of every loaded table, in load order.
#[derive(Debug, Clone, Default)]
pub struct CombinedDataset {
    pub rows: Vec<LabeledSample>,
    /// Method labels in order of first appearance.
    pub methods: Vec<String>,
}

impl CombinedDataset {
    /// Concatenate tables without reordering or deduplicating rows.
    pub fn concat(tables: &[SampleTable]) -> Self {
        let total = tables.iter().map(SampleTable::len).sum();
        let mut rows = Vec::with_capacity(total);
        let mut methods: Vec<String> = Vec::new();

        for table in tables {
            if !table.is_empty() && !methods.contains(&table.method) {
                methods.push(table.method.clone());
            }
            rows.extend(table.samples.iter().map(|&sample| LabeledSample {
                sample,
                method: table.method.clone(),
                scenario: table.scenario,
            }));
        }

        CombinedDataset { rows, methods }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
