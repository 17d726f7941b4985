/// Visit length used when the duration text cannot be understood.
pub const DEFAULT_VISIT_DURATION_SECONDS: u64 = 3600;

/// Reference mileage reimbursement rate (USD per mile).
pub const MILEAGE_RATE_PER_MILE: f64 = 0.67;

pub const MILES_PER_METER: f64 = 0.000621371;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Longest visit accepted from duration text (one leap year).
pub const MAX_VISIT_DURATION_SECONDS: u64 = 366 * SECONDS_PER_DAY;
