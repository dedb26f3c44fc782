// Roll domain
pub const ROLL_MIN: u32 = 1;
pub const ROLL_MAX: u32 = 1000;

// Rate doubling event multiplies a tier's base ceiling
pub const DOUBLING_FACTOR: u32 = 2;

// Persistence and reporting
pub const DEFAULT_MERCY_FILE: &str = "mercy.json";
pub const REPORT_FILE_PREFIX: &str = "summon_report";
