use chrono::NaiveTime;
use dotenvy::dotenv;
use std::env;

/// Default paid leave days per user per calendar year.
pub const DEFAULT_ANNUAL_ALLOWANCE: u32 = 20;

/// Default cutoff for an on-time check-in. Arriving at exactly this time is
/// still "present"; the late boundary is strictly after.
pub const DEFAULT_WORKDAY_START: &str = "09:00:00";

/// Workplace policy knobs for the engines. These were hard-coded literals in
/// the original system; injecting them keeps policy changes testable without
/// touching engine code.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    pub workday_start: NaiveTime,
    pub annual_leave_allowance: u32,
}

impl PolicyConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            workday_start: env::var("WORKDAY_START")
                .unwrap_or_else(|_| DEFAULT_WORKDAY_START.to_string())
                .parse()
                .expect("WORKDAY_START must be HH:MM:SS"),
            annual_leave_allowance: env::var("ANNUAL_LEAVE_ALLOWANCE")
                .unwrap_or_else(|_| DEFAULT_ANNUAL_ALLOWANCE.to_string())
                .parse()
                .expect("ANNUAL_LEAVE_ALLOWANCE must be an integer"),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            workday_start: DEFAULT_WORKDAY_START.parse().unwrap(),
            annual_leave_allowance: DEFAULT_ANNUAL_ALLOWANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy() {
        let cfg = PolicyConfig::default();
        assert_eq!(cfg.annual_leave_allowance, 20);
        assert_eq!(
            cfg.workday_start,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }
}
