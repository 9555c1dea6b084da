use super::Cutoff;

/// Takes the first `n` cutoffs from one sequence and continues with a second sequence afterwards.
#[derive(Debug)]
pub struct AppendCutoff {
    first: Box<dyn Cutoff>,
    remaining_from_first: u64,
    second: Box<dyn Cutoff>,
}

impl AppendCutoff {
    pub fn new(first: Box<dyn Cutoff>, n: u64, second: Box<dyn Cutoff>) -> AppendCutoff {
        AppendCutoff {
            first,
            remaining_from_first: n,
            second,
        }
    }
}

impl Cutoff for AppendCutoff {
    fn next(&mut self) -> u64 {
        if self.remaining_from_first > 0 {
            self.remaining_from_first -= 1;
            self.first.next()
        } else {
            self.second.next()
        }
    }
}
