use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(symbol: char) -> Option<BinOp> {
        match symbol {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One step of a postfix program.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    Number(i64),
    Operator(BinOp),
}

impl From<i64> for Element {
    fn from(n: i64) -> Self { Element::Number(n) }
}

impl From<BinOp> for Element {
    fn from(op: BinOp) -> Self { Element::Operator(op) }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Element::Number(n) => write!(f, "{}", n),
            Element::Operator(op) => write!(f, "{}", op),
        }
    }
}
