use crate::element::{BinOp, Element};
use lexers::{ArithToken, ArithTokenizer};
use log::{debug, trace};
use std::ops::Deref;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("literal {0} doesn't fit in a 64-bit integer")]
    LiteralOverflow(String),
}

/// Binding strength of each operator, all of them are left-associative.
pub fn precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Add | BinOp::Sub => 1,
        BinOp::Mul | BinOp::Div => 2,
    }
}

/// Postfix program, elements are in evaluation order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Element>);

impl Deref for RPNExpr {
    type Target = [Element];
    fn deref(&self) -> &[Element] { &self.0 }
}

// Entries waiting on the operator stack. Parens carry no precedence.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    OParen,
    Op(BinOp),
}

// Pop operators binding at least as tight as 'bound' into 'out'. An open
// paren stops the drain and is only consumed when 'bound' is 0, which is
// how a ')' eats its match; operators always have precedence >= 1.
fn move_operators(stack: &mut Vec<Pending>, out: &mut Vec<Element>, bound: u8) {
    while let Some(&top) = stack.last() {
        match top {
            Pending::OParen => {
                if bound < 1 {
                    stack.pop();
                }
                break;
            }
            Pending::Op(op) if precedence(op) >= bound => {
                out.push(Element::Operator(op));
                stack.pop();
            }
            Pending::Op(_) => break,
        }
    }
}

fn fold_literal(digits: &str) -> Result<i64, ParseError> {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .try_fold(0i64, |value, digit| value.checked_mul(10)?.checked_add(digit as i64))
        .ok_or_else(|| ParseError::LiteralOverflow(digits.to_string()))
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut ArithTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = ArithToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            trace!("token {:?} stack {:?}", token, stack);
            match token {
                ArithToken::Number(digits) => out.push(Element::Number(fold_literal(&digits)?)),
                ArithToken::OParen => stack.push(Pending::OParen),
                // unmatched ')' just drains whatever is pending
                ArithToken::CParen => move_operators(&mut stack, &mut out, 0),
                ArithToken::Op(symbol) => match BinOp::from_symbol(symbol) {
                    Some(op) => {
                        move_operators(&mut stack, &mut out, precedence(op));
                        stack.push(Pending::Op(op));
                    }
                    None => trace!("skipping operator {:?}", symbol),
                },
            }
        }
        // unwind everything left, unmatched '(' are dropped on the way
        while !stack.is_empty() {
            move_operators(&mut stack, &mut out, 0);
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn.postfix());
        Ok(rpn)
    }
}
