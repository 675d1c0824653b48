use alloy::primitives::{Address, U256};

/// Error type for registry operations. Display text is the reason string
/// the equivalent on-chain revert carries.
#[derive(Debug, Copy, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SchoolError {
    /// A principal-only call by someone else.
    #[error("Only the principal can call this")]
    NotPrincipal {
        /// The rejected caller.
        caller: Address,
    },
    /// An enrollment call by someone who is neither a teacher nor the
    /// principal.
    #[error("Only teachers or the principal")]
    NotStaff {
        /// The rejected caller.
        caller: Address,
    },
    /// A teacher was registered twice.
    #[error("Teacher already exists")]
    TeacherExists {
        /// The duplicated address.
        addr: Address,
    },
    /// A student was enrolled twice.
    #[error("Student already exists")]
    StudentExists {
        /// The duplicated address.
        addr: Address,
    },
    /// A tuition payment from an address that is not enrolled.
    #[error("Student not found")]
    StudentNotFound {
        /// The unknown address.
        addr: Address,
    },
    /// A tuition payment for a student who has already paid.
    #[error("Tuition already paid")]
    AlreadyPaid,
    /// A tuition payment whose value does not match the fee.
    #[error("Incorrect tuition fee")]
    IncorrectFee {
        /// The value attached to the call.
        paid: U256,
        /// The fee in force.
        fee: U256,
    },
}
