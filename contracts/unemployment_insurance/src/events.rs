//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------
//
// Audit-log sink for the lifecycle engine. Emission is fire-and-forget and
// never affects control flow.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::storage::CoverageStatus;

/// Event emitted when a company is registered
pub const COMPANY_REGISTERED: Symbol = symbol_short!("cmp_reg");

/// Event emitted when an employee enrolls under a company
pub const EMPLOYEE_REGISTERED: Symbol = symbol_short!("emp_reg");

/// Event emitted on every coverage status transition
pub const EMPLOYEE_STATUS_CHANGED: Symbol = symbol_short!("emp_sts");

/// Event emitted when premium months are paid in
pub const PREMIUM_PAID: Symbol = symbol_short!("prem_pai");

/// Event emitted when an employee submits a claim
pub const CLAIM_SUBMITTED: Symbol = symbol_short!("clm_sub");

/// Event emitted when a claim is confirmed and paid out
pub const CLAIM_CONFIRMED: Symbol = symbol_short!("clm_conf");

/// Event emitted when an employee exits coverage
pub const EMPLOYEE_EXITED: Symbol = symbol_short!("emp_exit");

/// Event emitted when coverage lapses from unpaid premiums
pub const COVERAGE_LAPSED: Symbol = symbol_short!("lapsed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompanyRegisteredEvent {
    pub fingerprint: BytesN<32>,
    pub administrator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRegisteredEvent {
    pub employee: Address,
    pub company: BytesN<32>,
    pub monthly_salary: i128,
    pub contribution_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeStatusChangedEvent {
    pub employee: Address,
    pub old_status: CoverageStatus,
    pub new_status: CoverageStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PremiumPaidEvent {
    pub employee: Address,
    pub months: u32,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSubmittedEvent {
    pub employee: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimConfirmedEvent {
    pub employee: Address,
    pub payout: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeExitedEvent {
    pub employee: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoverageLapsedEvent {
    pub employee: Address,
    /// The payment deadline that was missed
    pub deadline: u64,
    pub timestamp: u64,
}

pub fn emit_company_registered(env: &Env, fingerprint: BytesN<32>, administrator: Address) {
    let topics = (COMPANY_REGISTERED,);
    env.events().publish(
        topics,
        CompanyRegisteredEvent {
            fingerprint,
            administrator,
        },
    );
}

pub fn emit_employee_registered(
    env: &Env,
    employee: Address,
    company: BytesN<32>,
    monthly_salary: i128,
    contribution_amount: i128,
) {
    let topics = (EMPLOYEE_REGISTERED,);
    env.events().publish(
        topics,
        EmployeeRegisteredEvent {
            employee,
            company,
            monthly_salary,
            contribution_amount,
        },
    );
}

pub fn emit_employee_status_changed(
    env: &Env,
    employee: Address,
    old_status: CoverageStatus,
    new_status: CoverageStatus,
) {
    let topics = (EMPLOYEE_STATUS_CHANGED,);
    env.events().publish(
        topics,
        EmployeeStatusChangedEvent {
            employee,
            old_status,
            new_status,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_premium_paid(env: &Env, employee: Address, months: u32, amount: i128) {
    let topics = (PREMIUM_PAID,);
    env.events().publish(
        topics,
        PremiumPaidEvent {
            employee,
            months,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_claim_submitted(env: &Env, employee: Address) {
    let topics = (CLAIM_SUBMITTED,);
    env.events().publish(
        topics,
        ClaimSubmittedEvent {
            employee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_claim_confirmed(env: &Env, employee: Address, payout: i128) {
    let topics = (CLAIM_CONFIRMED,);
    env.events().publish(
        topics,
        ClaimConfirmedEvent {
            employee,
            payout,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_employee_exited(env: &Env, employee: Address) {
    let topics = (EMPLOYEE_EXITED,);
    env.events().publish(
        topics,
        EmployeeExitedEvent {
            employee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_coverage_lapsed(env: &Env, employee: Address, deadline: u64) {
    let topics = (COVERAGE_LAPSED,);
    env.events().publish(
        topics,
        CoverageLapsedEvent {
            employee,
            deadline,
            timestamp: env.ledger().timestamp(),
        },
    );
}
