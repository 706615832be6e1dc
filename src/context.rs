use crate::utils::{generate_qid, time_us};


/// Per-request bookkeeping used to correlate log lines
pub struct Context {
    pub qid: String,
    pub start_time_us: u128,
    pub finish_time_us: u128,
}

impl Context {
    pub fn new() -> Context {
        Context {
            qid: generate_qid(),
            start_time_us: time_us(),
            finish_time_us: 0,
        }
    }

    pub fn fix(&mut self) {
        self.finish_time_us = time_us();
    }

    pub fn time_ms(&self) -> f32 {
        (self.finish_time_us.saturating_sub(self.start_time_us) as f32) / 1000.0
    }
}
