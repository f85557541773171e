//! Exit code constants for the barrc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing home directory)
//! - 2: Configuration failure (config missing or unreadable)
//! - 3: Launch failure (one or more entities could not be spawned)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable environment.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: a required config file is missing or unreadable.
pub const CONFIG_FAILURE: i32 = 2;

/// Launch failure: at least one bar or script could not be started.
pub const LAUNCH_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, LAUNCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
