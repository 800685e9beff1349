pub use element::{BinOp, Element};
pub use parser::{ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{evaluate, EvalErr};

use thiserror::Error;

mod element;

pub mod parser;

mod rpnprint;
mod rpneval;


#[derive(Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// Parse `expr` into postfix form and reduce it to a single integer.
///
/// ```
/// assert_eq!(intcalc::calculate("(2 + 3) * 4"), Ok(20));
/// assert_eq!(intcalc::calculate("10 - 2 - 3"), Ok(5));
/// ```
pub fn calculate(expr: &str) -> Result<i64, CalcError> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(rpn.eval()?)
}
