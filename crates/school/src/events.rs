use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Events the registry journals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolEvent {
    /// A teacher was registered.
    TeacherAdded {
        /// The teacher's address.
        addr: Address,
        /// The teacher's name.
        name: String,
    },
    /// A student was enrolled.
    StudentAdded {
        /// The student's address.
        addr: Address,
        /// The student's name.
        name: String,
    },
    /// The principal set a new tuition fee.
    TuitionFeeSet {
        /// The fee now in force.
        fee: U256,
    },
    /// A student paid tuition.
    TuitionPaid {
        /// The paying student.
        student: Address,
        /// The value paid.
        amount: U256,
    },
}
