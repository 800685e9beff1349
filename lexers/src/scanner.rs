#![deny(warnings)]

/// Buffered scanner over any iterator.
///
/// Items pulled from the source stay in `buf` until `ignore` or `extract`
/// drops them, so the scanner can backtrack freely over the current lexeme.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    // number of buffered items consumed so far, curr() is buf[cursor - 1]
    cursor: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.buf.len() {
            self.buf.push(self.src.next()?);
        }
        self.cursor += 1;
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), cursor: 0}
    }

    pub fn cursor(&self) -> usize { self.cursor }

    // Backtrack to a previously saved cursor
    pub fn rewind(&mut self, cursor: usize) -> bool {
        if cursor > self.buf.len() {
            return false;
        }
        self.cursor = cursor;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        self.cursor.checked_sub(1).and_then(|i| self.buf.get(i)).cloned()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.cursor;
        let peeked = self.next();
        self.cursor = backtrack;
        peeked
    }

    // items consumed since the last ignore/extract
    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.cursor]
    }

    pub fn ignore(&mut self) {
        self.buf = self.buf.split_off(self.cursor);
        self.cursor = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let rest = self.buf.split_off(self.cursor);
        self.cursor = 0;
        std::mem::replace(&mut self.buf, rest)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        let backtrack = self.cursor;
        match self.next() {
            Some(next) if &next == what => Some(next),
            _ => { self.rewind(backtrack); None }
        }
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.cursor;
        match self.next() {
            Some(next) if any.contains(&next) => Some(next),
            _ => { self.rewind(backtrack); None }
        }
    }

    // Skip over the 'over' set, returns if the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
