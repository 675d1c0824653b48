use crate::{Gender, PaymentStatus, SchoolError, SchoolEvent, Student, Teacher};
use alloy::primitives::{Address, U256};
use campus_types::{CallContext, EventJournal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// The school management registry.
///
/// The deploying account is the principal. The principal sets the tuition
/// fee and appoints teachers; teachers and the principal enroll students;
/// enrolled students settle tuition by paying the exact fee in native
/// value, which accrues to the school treasury.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// The address this instance is deployed at.
    address: Address,
    /// The root authority.
    principal: Address,
    /// The fee students settle. Starts at zero until the principal sets it.
    tuition_fee: U256,
    /// Registered teachers.
    teachers: HashMap<Address, Teacher>,
    /// Teacher addresses in registration order.
    teacher_roster: Vec<Address>,
    /// Enrolled students.
    students: HashMap<Address, Student>,
    /// Student addresses in enrollment order.
    student_roster: Vec<Address>,
    /// Native value accrued from tuition payments.
    treasury: U256,
    /// Journal of emitted events.
    events: EventJournal<SchoolEvent>,
}

impl School {
    /// Deploy a registry at `address` with `principal` as the root
    /// authority.
    pub fn deploy(address: Address, principal: Address) -> Self {
        info!(school = %address, %principal, "deployed school registry");
        Self {
            address,
            principal,
            tuition_fee: U256::ZERO,
            teachers: HashMap::new(),
            teacher_roster: Vec::new(),
            students: HashMap::new(),
            student_roster: Vec::new(),
            treasury: U256::ZERO,
            events: EventJournal::new(),
        }
    }

    /// Set the tuition fee. Principal only.
    pub fn set_tuition_fee(&mut self, ctx: CallContext, fee: U256) -> Result<(), SchoolError> {
        self.ensure_principal(ctx.sender())?;
        self.tuition_fee = fee;
        self.events.record(SchoolEvent::TuitionFeeSet { fee });
        debug!(school = %self.address, %fee, "tuition fee set");
        Ok(())
    }

    /// Register a teacher. Principal only; an address registers once.
    pub fn add_teacher(
        &mut self,
        ctx: CallContext,
        addr: Address,
        name: impl Into<String>,
        age: u8,
        class_id: u8,
        gender: Gender,
    ) -> Result<(), SchoolError> {
        self.ensure_principal(ctx.sender())?;
        if self.teachers.contains_key(&addr) {
            return Err(SchoolError::TeacherExists { addr });
        }

        let name = name.into();
        self.teachers.insert(addr, Teacher { name: name.clone(), age, class_id, gender });
        self.teacher_roster.push(addr);
        self.events.record(SchoolEvent::TeacherAdded { addr, name });
        debug!(school = %self.address, teacher = %addr, "teacher added");
        Ok(())
    }

    /// Enroll a student. Teachers or the principal; an address enrolls
    /// once.
    pub fn add_student(
        &mut self,
        ctx: CallContext,
        addr: Address,
        name: impl Into<String>,
        age: u8,
        class_id: u8,
    ) -> Result<(), SchoolError> {
        self.ensure_staff(ctx.sender())?;
        if self.students.contains_key(&addr) {
            return Err(SchoolError::StudentExists { addr });
        }

        let name = name.into();
        self.students.insert(
            addr,
            Student { name: name.clone(), age, class_id, payment_status: PaymentStatus::Unpaid },
        );
        self.student_roster.push(addr);
        self.events.record(SchoolEvent::StudentAdded { addr, name });
        debug!(school = %self.address, student = %addr, "student enrolled");
        Ok(())
    }

    /// Settle the caller's tuition. `value` is the native value attached to
    /// the call and must match the fee exactly; it accrues to the treasury.
    pub fn pay_tuition_fee(&mut self, ctx: CallContext, value: U256) -> Result<(), SchoolError> {
        let addr = ctx.sender();
        let student = self
            .students
            .get_mut(&addr)
            .ok_or(SchoolError::StudentNotFound { addr })?;
        if student.payment_status == PaymentStatus::Paid {
            return Err(SchoolError::AlreadyPaid);
        }
        if value != self.tuition_fee {
            return Err(SchoolError::IncorrectFee { paid: value, fee: self.tuition_fee });
        }

        student.payment_status = PaymentStatus::Paid;
        self.treasury = self.treasury.saturating_add(value);
        self.events.record(SchoolEvent::TuitionPaid { student: addr, amount: value });
        info!(school = %self.address, student = %addr, %value, "tuition paid");
        Ok(())
    }

    /// The root authority.
    pub const fn principal(&self) -> Address {
        self.principal
    }

    /// The fee in force.
    pub const fn tuition_fee(&self) -> U256 {
        self.tuition_fee
    }

    /// The registered teacher at `addr`, if any.
    pub fn teacher(&self, addr: Address) -> Option<&Teacher> {
        self.teachers.get(&addr)
    }

    /// The enrolled student at `addr`, if any.
    pub fn student(&self, addr: Address) -> Option<&Student> {
        self.students.get(&addr)
    }

    /// Number of registered teachers.
    pub fn total_teachers(&self) -> u64 {
        self.teacher_roster.len() as u64
    }

    /// Number of enrolled students.
    pub fn total_students(&self) -> u64 {
        self.student_roster.len() as u64
    }

    /// Teacher addresses in registration order.
    pub fn teacher_addresses(&self) -> &[Address] {
        &self.teacher_roster
    }

    /// Student addresses in enrollment order.
    pub fn student_addresses(&self) -> &[Address] {
        &self.student_roster
    }

    /// Native value accrued from tuition payments.
    pub const fn treasury(&self) -> U256 {
        self.treasury
    }

    /// The address this instance is deployed at.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Borrow the journal of emitted events.
    pub const fn events(&self) -> &EventJournal<SchoolEvent> {
        &self.events
    }

    fn ensure_principal(&self, caller: Address) -> Result<(), SchoolError> {
        if caller != self.principal {
            return Err(SchoolError::NotPrincipal { caller });
        }
        Ok(())
    }

    fn ensure_staff(&self, caller: Address) -> Result<(), SchoolError> {
        if caller != self.principal && !self.teachers.contains_key(&caller) {
            return Err(SchoolError::NotStaff { caller });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn registry() -> (School, Address) {
        let principal = Address::with_last_byte(1);
        (School::deploy(Address::repeat_byte(0xdd), principal), principal)
    }

    #[test]
    fn the_deployer_is_the_principal() {
        let (school, principal) = registry();
        assert_eq!(school.principal(), principal);
        assert_eq!(school.tuition_fee(), U256::ZERO);
    }

    #[test]
    fn fee_setting_is_principal_only() {
        let (mut school, principal) = registry();
        let stranger = Address::with_last_byte(9);

        let err = school
            .set_tuition_fee(CallContext::new(stranger), U256::from(100_000_000u64))
            .unwrap_err();
        assert_eq!(err.to_string(), "Only the principal can call this");

        school.set_tuition_fee(CallContext::new(principal), U256::from(1_000_000_000u64)).unwrap();
        assert_eq!(school.tuition_fee(), U256::from(1_000_000_000u64));
    }

    #[test]
    fn teacher_registration_guards_and_roster() {
        let (mut school, principal) = registry();
        let teacher = Address::with_last_byte(2);

        school
            .add_teacher(CallContext::new(principal), teacher, "Rahmah", 16, 2, Gender::Female)
            .unwrap();
        assert_eq!(school.total_teachers(), 1);
        assert_eq!(school.teacher_addresses(), &[teacher]);

        let record = school.teacher(teacher).unwrap();
        assert_eq!(record.name, "Rahmah");
        assert_eq!(record.age, 16);
        assert_eq!(record.class_id, 2);
        assert_eq!(record.gender, Gender::Female);

        let err = school
            .add_teacher(CallContext::new(principal), teacher, "Rahmah", 16, 2, Gender::Female)
            .unwrap_err();
        assert_eq!(err.to_string(), "Teacher already exists");
    }

    #[test]
    fn enrollment_is_staff_only() {
        let (mut school, principal) = registry();
        let teacher = Address::with_last_byte(2);
        let student = Address::with_last_byte(3);
        let stranger = Address::with_last_byte(9);

        school
            .add_teacher(CallContext::new(principal), teacher, "Teacher", 30, 1, Gender::Female)
            .unwrap();

        let err = school
            .add_student(CallContext::new(stranger), student, "Student", 10, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "Only teachers or the principal");

        school.add_student(CallContext::new(teacher), student, "Jane Doe", 14, 1).unwrap();
        assert_eq!(school.total_students(), 1);

        let err = school
            .add_student(CallContext::new(principal), student, "Jane Doe", 14, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "Student already exists");
    }

    #[test]
    fn tuition_flow() {
        let (mut school, principal) = registry();
        let student = Address::with_last_byte(3);
        let fee = U256::from(1_000_000_000_000_000_000u64);

        school.set_tuition_fee(CallContext::new(principal), fee).unwrap();

        let err = school.pay_tuition_fee(CallContext::new(student), fee).unwrap_err();
        assert_eq!(err.to_string(), "Student not found");

        school.add_student(CallContext::new(principal), student, "Student", 15, 1).unwrap();

        let err = school
            .pay_tuition_fee(CallContext::new(student), fee - U256::from(1u64))
            .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect tuition fee");

        school.pay_tuition_fee(CallContext::new(student), fee).unwrap();
        assert_eq!(school.student(student).unwrap().payment_status, PaymentStatus::Paid);
        assert_eq!(school.student(student).unwrap().payment_status.as_u8(), 1);
        assert_eq!(school.treasury(), fee);

        let err = school.pay_tuition_fee(CallContext::new(student), fee).unwrap_err();
        assert_eq!(err.to_string(), "Tuition already paid");
    }
}
