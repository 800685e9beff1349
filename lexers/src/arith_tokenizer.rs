#![deny(warnings)]

use crate::scanner::Scanner;
use log::trace;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static OPERATORS: &[char] = &['+', '-', '*', '/'];

#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Number(String), // decimal digits, folded by the parser
    Op(char),
    OParen, CParen,
}

/// Tokenizer for integer arithmetic.
///
/// Whitespace and unrecognized characters are dropped without ending a
/// pending literal, so `1 2` is the number 12. Only operators, `)` and end
/// of input flush digits. A `(` is emitted as soon as it is seen while the
/// pending literal keeps growing.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    digits: String,
    // token held back while a pending literal is handed out first
    queued: Option<ArithToken>,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source), digits: String::new(), queued: None}
    }

    // emit the pending literal, if any, before 'then'
    fn flush(&mut self, then: Option<ArithToken>) -> Option<ArithToken> {
        if self.digits.is_empty() {
            return then;
        }
        self.queued = then;
        Some(ArithToken::Number(std::mem::take(&mut self.digits)))
    }

    fn get_token(&mut self) -> Option<ArithToken> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }
        loop {
            if self.src.skip_all(DIGITS) {
                let run = self.src.extract_string();
                self.digits.push_str(&run);
                continue;
            }
            let c = match self.src.next() {
                Some(c) => c,
                None => return self.flush(None),
            };
            self.src.ignore();
            match c {
                '(' => return Some(ArithToken::OParen),
                ')' => return self.flush(Some(ArithToken::CParen)),
                op if OPERATORS.contains(&op) => return self.flush(Some(ArithToken::Op(op))),
                other => trace!("ignoring {:?}", other),
            }
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = ArithToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ArithToken, ArithTokenizer};

    fn tokens(src: &str) -> Vec<ArithToken> {
        ArithTokenizer::new(src.chars()).collect()
    }

    #[test]
    fn basic_ops() {
        let expect = vec![
            ArithToken::Number(format!("3")),
            ArithToken::Op('+'),
            ArithToken::Number(format!("42")),
            ArithToken::Op('*'),
            ArithToken::OParen,
            ArithToken::Number(format!("10")),
            ArithToken::Op('-'),
            ArithToken::Number(format!("5")),
            ArithToken::CParen,
            ArithToken::Op('/'),
            ArithToken::Number(format!("7")),
        ];
        assert_eq!(tokens("3+42*(10-5)/7"), expect);
    }

    #[test]
    fn whitespace() {
        assert_eq!(tokens("  2  +  3  "), tokens("2+3"));
        assert_eq!(tokens("\t7\n/ 2\r"), tokens("7/2"));
        assert_eq!(tokens("   "), vec![]);
        assert_eq!(tokens(""), vec![]);
    }

    #[test]
    fn split_literals() {
        // ignored characters never end a literal
        assert_eq!(tokens("1 2+3"), vec![
            ArithToken::Number(format!("12")),
            ArithToken::Op('+'),
            ArithToken::Number(format!("3")),
        ]);
        assert_eq!(tokens("4x5"), vec![ArithToken::Number(format!("45"))]);
    }

    #[test]
    fn oparen_inside_literal() {
        assert_eq!(tokens("2(3)"), vec![
            ArithToken::OParen,
            ArithToken::Number(format!("23")),
            ArithToken::CParen,
        ]);
    }

    #[test]
    fn unknown_chars() {
        assert_eq!(tokens("a^b%c!"), vec![]);
        assert_eq!(tokens("6 ^ 2"), vec![ArithToken::Number(format!("62"))]);
        assert_eq!(tokens("9 % + 1"), vec![
            ArithToken::Number(format!("9")),
            ArithToken::Op('+'),
            ArithToken::Number(format!("1")),
        ]);
    }

    #[test]
    fn fused() {
        let mut lx = ArithTokenizer::new("8)".chars());
        assert_eq!(lx.next(), Some(ArithToken::Number(format!("8"))));
        assert_eq!(lx.next(), Some(ArithToken::CParen));
        assert_eq!(lx.next(), None);
        assert_eq!(lx.next(), None);
    }
}
