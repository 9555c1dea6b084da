use super::Cutoff;
use crate::basic_types::CutoffError;

/// Repeats every value of the underlying sequence `n` times.
#[derive(Debug)]
pub struct RepeatCutoff {
    cutoff: Box<dyn Cutoff>,
    current_value: u64,
    repetitions: u64,
    times_emitted: u64,
}

impl RepeatCutoff {
    pub fn new(mut cutoff: Box<dyn Cutoff>, n: u64) -> Result<RepeatCutoff, CutoffError> {
        if n == 0 {
            return Err(CutoffError::ZeroRepetitions);
        }

        let current_value = cutoff.next();
        Ok(RepeatCutoff {
            cutoff,
            current_value,
            repetitions: n,
            times_emitted: 0,
        })
    }
}

impl Cutoff for RepeatCutoff {
    fn next(&mut self) -> u64 {
        let next_value = self.current_value;
        self.times_emitted += 1;
        if self.times_emitted == self.repetitions {
            self.current_value = self.cutoff.next();
            self.times_emitted = 0;
        }
        next_value
    }
}
