use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use indexmap::IndexSet;
use strum::EnumIter;
use termtree::Tree;

use crate::parser;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Implies,
    Biconditional,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BinaryOp::And => "∧",
                BinaryOp::Or => "∨",
                BinaryOp::Xor => "⊕",
                BinaryOp::Implies => "→",
                BinaryOp::Biconditional => "↔",
            }
        )
    }
}

/// A parsed formula. Trees are immutable and strictly owned: every node
/// belongs to exactly one parent, and the parser is the sole constructor
/// of non-trivial trees.
#[derive(Debug, Clone, Hash, PartialEq, Eq, EnumAsInner)]
pub enum Formula {
    Variable(String),
    Literal(bool),
    Not(Box<Formula>),
    Binary {
        op: BinaryOp,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet(pub IndexSet<String>);

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|variable| variable.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

impl Formula {
    /// Collects the distinct variables of the formula, in first-occurrence
    /// order.
    pub fn variables(&self) -> VariableSet {
        let mut variables = VariableSet(IndexSet::new());
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut VariableSet) {
        match self {
            Formula::Variable(name) => {
                variables.0.insert(name.clone());
            }
            Formula::Literal(_) => {}
            Formula::Not(operand) => operand.collect_variables(variables),
            Formula::Binary { left, right, .. } => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        match self {
            Formula::Variable(name) => Tree::new(name.clone()),
            Formula::Literal(value) => Tree::new(literal_symbol(*value).to_owned()),
            Formula::Not(operand) => {
                Tree::new("¬".to_owned()).with_leaves(vec![operand.get_tree()])
            }
            Formula::Binary { op, left, right } => {
                Tree::new(op.to_string()).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }
}

fn literal_symbol(value: bool) -> &'static str {
    if value {
        "⊤"
    } else {
        "⊥"
    }
}

/// Renders with canonical symbolic connectives. A child is parenthesized
/// exactly when it is itself a binary node, regardless of precedence, so
/// same-precedence chains come out verbose but unambiguous.
impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{name}"),
            Formula::Literal(value) => write!(f, "{}", literal_symbol(*value)),
            Formula::Not(operand) => {
                if operand.is_binary() {
                    write!(f, "¬({operand})")
                } else {
                    write!(f, "¬{operand}")
                }
            }
            Formula::Binary { op, left, right } => {
                if left.is_binary() {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }

                write!(f, " {op} ")?;

                if right.is_binary() {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            }
        }
    }
}

/// The distinct variables of a formula, sorted ascending.
pub fn extract_variables(formula: &Formula) -> Vec<String> {
    let mut names = formula.variables().0.into_iter().collect::<Vec<_>>();
    names.sort();
    names
}

/// Best-effort variant for UI use: parse failures yield an empty list
/// instead of an error.
pub fn extract_variables_from_formula(formula: &str) -> Vec<String> {
    parser::parse(formula)
        .map(|formula| extract_variables(&formula))
        .unwrap_or_default()
}
