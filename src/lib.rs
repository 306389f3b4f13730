//! Propositional-logic formula engine.
//!
//! Formulas are written in any mix of symbolic (`¬ ∧ ∨ ⊕ → ↔`), C-like
//! (`! && || -> <->`) and word (`not and or xor`) notation. The engine
//! tokenizes and parses them into a [`Formula`] tree, evaluates trees under
//! an [`Interpretation`], and builds full truth tables with per-formula
//! classification and pairwise equivalence detection.
//!
//! ```
//! use indexmap::indexmap;
//! use propcalc::{generate_truth_table, Classification};
//!
//! let table = generate_truth_table(
//!     &indexmap! { "x".to_owned() => "p || !p".to_owned() },
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(table.classification["x"], Classification::Tautology);
//! ```

pub mod ast;
pub mod error;
pub mod evaluate;
pub mod parser;
pub mod table;
pub mod token;

pub use ast::{extract_variables, extract_variables_from_formula, BinaryOp, Formula, VariableSet};
pub use error::Error;
pub use evaluate::Interpretation;
pub use parser::parse;
pub use table::{generate_truth_table, Classification, Row, TruthTable, MAX_VARIABLES};
pub use token::{tokenize, Token, TokenKind};
