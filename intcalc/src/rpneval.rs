use crate::element::{BinOp, Element};
use crate::parser::RPNExpr;
use log::{debug, trace};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EvalErr {
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(BinOp),
    #[error("division by zero")]
    DivisionByZero,
    #[error("'{0}' overflows a 64-bit integer")]
    Overflow(BinOp),
    #[error("empty expression")]
    EmptyExpression,
    #[error("{0} values left without an operator to combine them")]
    DanglingOperands(usize),
}

fn apply(op: BinOp, a: i64, b: i64) -> Result<i64, EvalErr> {
    let result = match op {
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div if b == 0 => return Err(EvalErr::DivisionByZero),
        // truncates toward zero, i64::MIN / -1 is the only overflow
        BinOp::Div => a.checked_div(b),
    };
    result.ok_or(EvalErr::Overflow(op))
}

/// Reduce a postfix program on a value stack. Each operator pops its right
/// operand first, then its left one.
pub fn evaluate(rpn: &RPNExpr) -> Result<i64, EvalErr> {
    let mut operands = Vec::new();

    for element in rpn.iter() {
        match *element {
            Element::Number(n) => operands.push(n),
            Element::Operator(op) => {
                let b = operands.pop().ok_or(EvalErr::MissingOperand(op))?;
                let a = operands.pop().ok_or(EvalErr::MissingOperand(op))?;
                let r = apply(op, a, b)?;
                trace!("{} {} {} = {}", a, op, b, r);
                operands.push(r);
            }
        }
    }
    match operands[..] {
        [] => Err(EvalErr::EmptyExpression),
        [value] => {
            debug!("result: {}", value);
            Ok(value)
        }
        _ => Err(EvalErr::DanglingOperands(operands.len())),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<i64, EvalErr> {
        evaluate(self)
    }
}
