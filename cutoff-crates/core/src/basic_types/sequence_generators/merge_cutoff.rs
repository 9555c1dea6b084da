use super::Cutoff;

/// Alternates between two sequences, starting with the first one.
#[derive(Debug)]
pub struct MergeCutoff {
    current: Box<dyn Cutoff>,
    other: Box<dyn Cutoff>,
}

impl MergeCutoff {
    pub fn new(first: Box<dyn Cutoff>, second: Box<dyn Cutoff>) -> MergeCutoff {
        MergeCutoff {
            current: first,
            other: second,
        }
    }
}

impl Cutoff for MergeCutoff {
    fn next(&mut self) -> u64 {
        let next_value = self.current.next();
        std::mem::swap(&mut self.current, &mut self.other);
        next_value
    }
}
