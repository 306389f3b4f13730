use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{ast::extract_variables, error::Error, evaluate::Interpretation, parser::parse};

/// Hard cap on distinct variables per table. A deliberate usability bound
/// (32 rows), not a theoretical limit.
pub const MAX_VARIABLES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingency,
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Classification::Tautology => "tautology",
                Classification::Contradiction => "contradiction",
                Classification::Contingency => "contingency",
            }
        )
    }
}

/// One truth-table row: the variable assignment and the value of every
/// expression under it. Both maps keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub inputs: IndexMap<String, bool>,
    pub outputs: IndexMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub expressions: Vec<String>,
    pub rows: Vec<Row>,
    pub classification: IndexMap<String, Classification>,
    pub equivalences: Vec<(String, String)>,
}

/// Builds the full truth table for a labelled set of formulas.
///
/// The variable set is the union of all variables referenced by the
/// formulas, sorted ascending, unless the caller supplies an explicit
/// ordering. Any parse failure aborts the whole call; there are no partial
/// results.
pub fn generate_truth_table(
    expressions: &IndexMap<String, String>,
    variables: Option<Vec<String>>,
) -> Result<TruthTable, Error> {
    let mut parsed = IndexMap::new();
    let mut all_variables = IndexSet::new();

    for (label, formula) in expressions {
        let formula = parse(formula)?;
        all_variables.extend(extract_variables(&formula));
        parsed.insert(label.clone(), formula);
    }

    let variables = variables.unwrap_or_else(|| {
        let mut names = all_variables.into_iter().collect::<Vec<_>>();
        names.sort();
        names
    });

    if variables.len() > MAX_VARIABLES {
        return Err(Error::TooManyVariables {
            count: variables.len(),
        });
    }

    let mut rows = Vec::with_capacity(1 << variables.len());

    for interpretation in Interpretation::generate_all(variables.clone()) {
        let mut outputs = IndexMap::new();

        for (label, formula) in &parsed {
            outputs.insert(label.clone(), formula.evaluate(&interpretation)?);
        }

        rows.push(Row {
            inputs: interpretation.0,
            outputs,
        });
    }

    let mut classification = IndexMap::new();

    for label in parsed.keys() {
        let mut valid = true;
        let mut satisfiable = false;

        for row in &rows {
            let value = row.outputs[label.as_str()];
            valid &= value;
            satisfiable |= value;
        }

        let class = if valid {
            Classification::Tautology
        } else if !satisfiable {
            Classification::Contradiction
        } else {
            Classification::Contingency
        };

        classification.insert(label.clone(), class);
    }

    // Every equivalent unordered pair is reported, in declaration order.
    let labels = parsed.keys().cloned().collect::<Vec<_>>();
    let equivalences = labels
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| {
            rows.iter()
                .all(|row| row.outputs[a.as_str()] == row.outputs[b.as_str()])
        })
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect();

    Ok(TruthTable {
        variables,
        expressions: labels,
        rows,
        classification,
        equivalences,
    })
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for variable in &self.variables {
            write!(f, "| {variable} ")?;
        }
        for label in &self.expressions {
            write!(f, "| {label} ")?;
        }
        writeln!(f, "|")?;

        for _ in 0..self.variables.len() + self.expressions.len() {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            for value in row.inputs.values().chain(row.outputs.values()) {
                write!(f, "| {} ", if *value { "T" } else { "F" })?;
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}
