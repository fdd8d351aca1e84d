//! PIN gate: a fixed number of attempts against one stored PIN.

pub const DEFAULT_PIN: i32 = 1234;
pub const MAX_PIN_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFailure {
    /// The entry was not a number. Still costs an attempt.
    Malformed,
    Incorrect,
}

/// Result of one PIN attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Granted,
    Rejected { failure: PinFailure, remaining: u32 },
    /// The gate was already locked; nothing was checked.
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGate {
    pin: i32,
    attempts_remaining: u32,
    authenticated: bool,
}

impl PinGate {
    pub fn new(pin: i32, max_attempts: u32) -> Self {
        Self {
            pin,
            attempts_remaining: max_attempts,
            authenticated: false,
        }
    }

    /// Check one entry. `None` is a non-numeric entry.
    pub fn attempt(&mut self, entry: Option<i32>) -> AuthStep {
        if self.authenticated {
            return AuthStep::Granted;
        }
        if self.is_locked() {
            return AuthStep::Locked;
        }
        let failure = match entry {
            Some(pin) if pin == self.pin => {
                self.authenticated = true;
                return AuthStep::Granted;
            }
            Some(_) => PinFailure::Incorrect,
            None => PinFailure::Malformed,
        };
        self.attempts_remaining -= 1;
        AuthStep::Rejected {
            failure,
            remaining: self.attempts_remaining,
        }
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// No attempts left and never authenticated. Permanent for this session.
    pub fn is_locked(&self) -> bool {
        !self.authenticated && self.attempts_remaining == 0
    }
}

impl Default for PinGate {
    fn default() -> Self {
        Self::new(DEFAULT_PIN, MAX_PIN_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_pin_first_try() {
        let mut gate = PinGate::default();
        assert_eq!(gate.attempt(Some(1234)), AuthStep::Granted);
        assert!(gate.is_authenticated());
        assert_eq!(gate.attempts_remaining(), 3);
    }

    #[test]
    fn correct_pin_on_third_attempt() {
        let mut gate = PinGate::default();
        assert_eq!(
            gate.attempt(Some(1111)),
            AuthStep::Rejected {
                failure: PinFailure::Incorrect,
                remaining: 2
            }
        );
        assert_eq!(
            gate.attempt(None),
            AuthStep::Rejected {
                failure: PinFailure::Malformed,
                remaining: 1
            }
        );
        assert_eq!(gate.attempt(Some(1234)), AuthStep::Granted);
        assert!(!gate.is_locked());
    }

    #[test]
    fn three_failures_lock_permanently() {
        let mut gate = PinGate::default();
        gate.attempt(Some(1));
        gate.attempt(None);
        assert_eq!(
            gate.attempt(Some(2)),
            AuthStep::Rejected {
                failure: PinFailure::Incorrect,
                remaining: 0
            }
        );
        assert!(gate.is_locked());
        assert_eq!(gate.attempt(Some(1234)), AuthStep::Locked);
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn two_failures_do_not_lock() {
        let mut gate = PinGate::default();
        gate.attempt(Some(1));
        gate.attempt(Some(2));
        assert!(!gate.is_locked());
        assert_eq!(gate.attempts_remaining(), 1);
    }
}
