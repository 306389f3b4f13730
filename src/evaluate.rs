use std::fmt::Display;

use indexmap::IndexMap;

use crate::{
    ast::{BinaryOp, Formula},
    error::Error,
};

/// A truth assignment for a set of propositional variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<String, bool>);

impl Interpretation {
    /// Enumerates all 2^n assignments over `variables` in binary-counting
    /// order: assignment `i` encodes the bits of `i` with the first
    /// variable in the highest bit, so the all-false row comes first.
    pub fn generate_all(variables: Vec<String>) -> impl Iterator<Item = Interpretation> {
        let n = variables.len();

        (0..1usize << n).map(move |i| {
            let mut interpretation = Interpretation(IndexMap::new());

            for (j, variable) in variables.iter().enumerate() {
                let value = (i >> (n - 1 - j)) & 1 == 1;
                interpretation.0.insert(variable.clone(), value);
            }

            interpretation
        })
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|(variable, value)| {
                let prefix = if *value { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

impl Formula {
    /// Evaluates the formula under an interpretation. Pure and total except
    /// for variables the interpretation does not bind.
    pub fn evaluate(&self, interpretation: &Interpretation) -> Result<bool, Error> {
        match self {
            Formula::Variable(name) => {
                interpretation
                    .0
                    .get(name)
                    .copied()
                    .ok_or_else(|| Error::UndefinedVariable { name: name.clone() })
            }
            Formula::Literal(value) => Ok(*value),
            Formula::Not(operand) => Ok(!operand.evaluate(interpretation)?),
            Formula::Binary { op, left, right } => {
                let left = left.evaluate(interpretation)?;
                let right = right.evaluate(interpretation)?;

                Ok(match op {
                    BinaryOp::And => left && right,
                    BinaryOp::Or => left || right,
                    BinaryOp::Xor => left != right,
                    BinaryOp::Implies => !left || right,
                    BinaryOp::Biconditional => left == right,
                })
            }
        }
    }
}
