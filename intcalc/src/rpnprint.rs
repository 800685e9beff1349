use crate::element::{BinOp, Element};
use crate::parser::{precedence, RPNExpr};
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(i64),
    Node(BinOp, Box<AST>, Box<AST>),
}

impl RPNExpr {
    // None if the program doesn't reduce to exactly one tree
    fn build_ast(&self) -> Option<AST> {
        let mut nodes = Vec::new();
        for element in self.iter() {
            match *element {
                Element::Number(n) => nodes.push(AST::Leaf(n)),
                Element::Operator(op) => {
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
            }
        }
        let root = nodes.pop()?;
        if nodes.is_empty() { Some(root) } else { None }
    }

    /// Space separated postfix form, eg: `2 3 4 * +`
    pub fn postfix(&self) -> String {
        self.iter()
            .map(|element| element.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, u8) {
            match root {
                AST::Leaf(n) => (format!("{}", n), u8::MAX),
                AST::Node(op, lhs, rhs) => {
                    let prec = precedence(*op);
                    let (lhs, lprec) = printer(lhs);
                    let (rhs, rprec) = printer(rhs);
                    let lh = if prec > lprec { format!("({})", lhs) } else { lhs };
                    // left-assoc: an equal precedence rhs was grouped explicitly
                    let rh = if prec >= rprec { format!("({})", rhs) } else { rhs };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }

        match self.build_ast() {
            Some(root) => write!(f, "{}", printer(&root).0),
            None => write!(f, "{}", self.postfix()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
