use std::time::{SystemTime, UNIX_EPOCH};


/// Random request id: 32 random bits as 8 lowercase hex digits
pub fn generate_qid() -> String {
    format!("{:08x}", rand::random::<u32>())
}

/// Microseconds since the unix epoch, 0 if the clock is set before it
pub fn time_us() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_micros()).unwrap_or(0)
}
