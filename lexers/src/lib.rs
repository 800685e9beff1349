mod scanner;
mod arith_tokenizer;

pub use scanner::Scanner;
pub use arith_tokenizer::{ArithTokenizer, ArithToken};

#[cfg(test)]
mod scanner_test;
