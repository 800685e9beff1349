use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("12 + 3@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('1'));
    assert_eq!(s.curr(), Some('1'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.peek(), None);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("345*(6)".chars());
    for _ in 0..3 { assert!(s.next().is_some()); }
    assert_eq!(s.view(), &['3', '4', '5']);
    assert_eq!(s.extract_string(), "345");
    assert_eq!(s.curr(), None);
    assert_eq!(s.peek(), Some('*'));
    assert_eq!(s.next(), Some('*'));
    s.ignore();
    assert_eq!(s.next(), Some('('));
    assert_eq!(s.next(), Some('6'));
    assert_eq!(s.extract_string(), "(6");
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("20/4".chars());
    assert_eq!(s.accept(&'/'), None);
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept(&'2'), Some('2'));
    assert_eq!(s.accept_any(&['+', '-']), None);
    assert_eq!(s.accept_any(&['0', '1']), Some('0'));
    assert_eq!(s.extract_string(), "20");
    assert_eq!(s.accept_any(&['*', '/']), Some('/'));
}

#[test]
fn test_skip_all() {
    let digits = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
    let mut s = Scanner::new("9876-5".chars());
    assert!(s.skip_all(&digits));
    assert_eq!(s.curr(), Some('6'));
    assert!(!s.skip_all(&digits));
    assert_eq!(s.extract_string(), "9876");
    assert_eq!(s.next(), Some('-'));
}

#[test]
fn test_rewind() {
    let mut s = Scanner::new("1+2".chars());
    let start = s.cursor();
    s.next();
    s.next();
    assert_eq!(s.curr(), Some('+'));
    assert!(s.rewind(start));
    assert_eq!(s.next(), Some('1'));
    assert!(!s.rewind(10));
    assert_eq!(s.curr(), Some('1'));
}
