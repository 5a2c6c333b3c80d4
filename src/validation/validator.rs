//! Generic validator over any [`Validatable`] object.

use crate::error::TaskError;

/// A single zero-argument check bound to an object.
pub type Check<T> = fn(&T) -> Result<(), TaskError>;

/// Capability required to be validated by [`Validator`].
///
/// Any task-like type exposing these operations can be validated by the
/// same routine, so new task shapes do not require changes here.
pub trait Validatable {
    /// Check that the declared type is one the runner understands.
    fn validate_type(&self) -> Result<(), TaskError>;

    /// Check the arguments and the target state they describe.
    ///
    /// Argument rules depend on the type, so this runs after
    /// [`validate_type`](Self::validate_type).
    fn validate_arguments(&self) -> Result<(), TaskError>;

    /// Decide whether a failure of this object halts the whole run.
    fn handle_abort_on_fail(&self, err: &TaskError) -> bool;

    /// Default ordered check list: type first, then arguments.
    fn checks() -> Vec<Check<Self>>
    where
        Self: Sized,
    {
        vec![
            Self::validate_type as Check<Self>,
            Self::validate_arguments as Check<Self>,
        ]
    }
}

/// Runs an ordered list of checks against an object, stopping at the first error.
pub struct Validator<'a, T> {
    object: &'a T,
    checks: Vec<Check<T>>,
}

impl<'a, T: Validatable> Validator<'a, T> {
    /// Bind `object` to an explicit list of checks.
    pub fn new(object: &'a T, checks: Vec<Check<T>>) -> Self {
        Self { object, checks }
    }

    /// Bind `object` to its default checks.
    pub fn for_object(object: &'a T) -> Self {
        Self::new(object, T::checks())
    }

    /// The object under validation.
    pub fn object(&self) -> &'a T {
        self.object
    }

    /// Run every check in order and return the first error.
    pub fn run(&self) -> Result<(), TaskError> {
        for check in &self.checks {
            check(self.object)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use std::cell::Cell;

    struct Probe {
        type_ok: bool,
        args_ok: bool,
        calls: Cell<u32>,
    }

    impl Probe {
        fn new(type_ok: bool, args_ok: bool) -> Self {
            Self {
                type_ok,
                args_ok,
                calls: Cell::new(0),
            }
        }
    }

    impl Validatable for Probe {
        fn validate_type(&self) -> Result<(), TaskError> {
            self.calls.set(self.calls.get() + 1);
            if self.type_ok {
                Ok(())
            } else {
                Err(TaskError::validation(ValidationErrorKind::EmptyType))
            }
        }

        fn validate_arguments(&self) -> Result<(), TaskError> {
            self.calls.set(self.calls.get() + 1);
            if self.args_ok {
                Ok(())
            } else {
                Err(TaskError::validation(ValidationErrorKind::MissingPath))
            }
        }

        fn handle_abort_on_fail(&self, _err: &TaskError) -> bool {
            false
        }
    }

    #[test]
    fn test_all_checks_pass() {
        let probe = Probe::new(true, true);
        assert!(Validator::for_object(&probe).run().is_ok());
        assert_eq!(probe.calls.get(), 2);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let probe = Probe::new(false, false);
        let err = Validator::for_object(&probe).run().unwrap_err();
        assert!(matches!(
            err,
            TaskError::Validation {
                kind: ValidationErrorKind::EmptyType
            }
        ));
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn test_second_check_failure() {
        let probe = Probe::new(true, false);
        let err = Validator::for_object(&probe).run().unwrap_err();
        assert!(matches!(
            err,
            TaskError::Validation {
                kind: ValidationErrorKind::MissingPath
            }
        ));
    }

    #[test]
    fn test_empty_check_list() {
        let probe = Probe::new(false, false);
        let validator = Validator::new(&probe, Vec::new());
        assert!(validator.run().is_ok());
        assert_eq!(probe.calls.get(), 0);
        assert!(!validator.object().handle_abort_on_fail(&TaskError::validation(
            ValidationErrorKind::EmptyType
        )));
    }
}
