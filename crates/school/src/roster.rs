use serde::{Deserialize, Serialize};

/// Gender as the registry records it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gender {
    /// Encoded as 0.
    Male = 0,
    /// Encoded as 1.
    Female = 1,
}

impl Gender {
    /// The numeric encoding the deployed registry stores.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Whether a student's tuition has been settled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum PaymentStatus {
    /// Encoded as 0.
    Unpaid = 0,
    /// Encoded as 1.
    Paid = 1,
}

impl PaymentStatus {
    /// The numeric encoding the deployed registry stores.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A registered teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// The class the teacher takes.
    pub class_id: u8,
    /// Recorded gender.
    pub gender: Gender,
}

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// The class the student attends.
    pub class_id: u8,
    /// Tuition settlement state. Enrollment starts unpaid.
    pub payment_status: PaymentStatus,
}
