use soroban_sdk::{token, Address, BytesN, Env, String, Vec};

use crate::errors::ContractError;
use crate::events::{
    emit_claim_confirmed, emit_claim_submitted, emit_company_registered, emit_coverage_lapsed,
    emit_employee_exited, emit_employee_registered, emit_employee_status_changed,
    emit_premium_paid,
};
use crate::fees;
use crate::storage::{self, Company, CoverageStatus, Employee};

/// A coverage month, for premium and lapse accounting.
pub const SECONDS_PER_MONTH: u64 = 30 * 86_400;

/// Months of unpaid premiums tolerated beyond the months already covered
/// before coverage is forcibly closed.
pub const GRACE_MONTHS: u64 = 3;

/// Cumulative premium months required before a claim may be submitted.
pub const MONTHS_FOR_ELIGIBILITY: u32 = 3;

/// Registers a company under the fingerprint of its name.
///
/// Only the contract owner may register companies. The administrator is
/// fixed here; there is no rotation.
///
/// # State Transition
/// (creates the Company record; companies have no state machine)
pub fn register_company(
    env: &Env,
    caller: Address,
    name: String,
    administrator: Address,
) -> Result<BytesN<32>, ContractError> {
    let owner = storage::get_owner(env).ok_or(ContractError::NotInitialized)?;
    if caller != owner {
        return Err(ContractError::Unauthorized);
    }
    if name.len() == 0 {
        return Err(ContractError::InvalidInput);
    }

    let fingerprint = storage::company_fingerprint(env, &name);
    if storage::has_company(env, &fingerprint) {
        return Err(ContractError::CompanyExists);
    }

    let company = Company {
        administrator: administrator.clone(),
        name,
        employees: Vec::new(env),
    };
    storage::put_company(env, &fingerprint, &company);

    emit_company_registered(env, fingerprint.clone(), administrator);

    Ok(fingerprint)
}

/// Enrolls the caller as an employee of the named company.
///
/// The company must already exist; enrolling against an unknown name is
/// rejected rather than producing a record with a dangling company link.
/// Salary and the derived contribution amount are fixed for the lifetime of
/// the record.
///
/// # State Transition
/// (none) -> Registered
pub fn register_employee(
    env: &Env,
    caller: Address,
    company_name: String,
    monthly_salary: i128,
    name_fingerprint: BytesN<32>,
    email: String,
    national_id: String,
) -> Result<(), ContractError> {
    if company_name.len() == 0 || monthly_salary <= 0 {
        return Err(ContractError::InvalidInput);
    }
    if storage::has_employee(env, &caller) {
        return Err(ContractError::EmployeeExists);
    }

    let company_key = storage::company_fingerprint(env, &company_name);
    let mut company =
        storage::get_company(env, &company_key).ok_or(ContractError::CompanyNotFound)?;

    company.employees.push_back(caller.clone());
    storage::put_company(env, &company_key, &company);

    let contribution_amount = fees::contribution_for(monthly_salary);
    let record = Employee {
        name_fingerprint,
        email,
        national_id,
        monthly_salary,
        contribution_amount,
        payment_timestamps: Vec::new(env),
        months_paid: 0,
        status: CoverageStatus::Registered,
        verified_at: None,
    };
    storage::put_employee(env, &caller, &record);

    emit_employee_registered(env, caller, company_key, monthly_salary, contribution_amount);

    Ok(())
}

/// Confirms an employee's employment, starting the premium clock.
///
/// The caller must be the administrator of the company resolved from the
/// supplied name. Legal only from Registered: confirmation never regresses
/// an employee who has already advanced.
///
/// # State Transition
/// Registered -> Confirmed
pub fn confirm_employment(
    env: &Env,
    caller: Address,
    company_name: String,
    employee: Address,
) -> Result<(), ContractError> {
    let company_key = storage::company_fingerprint(env, &company_name);
    let company = storage::get_company(env, &company_key).ok_or(ContractError::CompanyNotFound)?;
    if caller != company.administrator {
        return Err(ContractError::Unauthorized);
    }

    let mut record =
        storage::get_employee(env, &employee).ok_or(ContractError::EmployeeNotFound)?;
    if record.status != CoverageStatus::Registered {
        return Err(ContractError::InvalidState);
    }

    record.status = CoverageStatus::Confirmed;
    record.verified_at = Some(env.ledger().timestamp());
    storage::put_employee(env, &employee, &record);

    emit_employee_status_changed(
        env,
        employee,
        CoverageStatus::Registered,
        CoverageStatus::Confirmed,
    );

    Ok(())
}

/// Re-evaluates the lapse window for an employee and returns the current
/// (possibly freshly closed) status.
///
/// Runs implicitly at the start of [`pay_premium`] and [`submit_claim`], and
/// may be invoked standalone by anyone. Idempotent; lapsing is surfaced only
/// through the audit log, never as a caller-facing error.
pub fn lapse_check(env: &Env, employee: &Address) -> Result<CoverageStatus, ContractError> {
    let mut record =
        storage::get_employee(env, employee).ok_or(ContractError::EmployeeNotFound)?;
    apply_lapse(env, employee, &mut record);
    Ok(record.status)
}

/// Pays `months` premium months at the employee's fixed contribution rate.
///
/// The supplied amount must match `contribution_amount * months` exactly;
/// both under- and overpayment are rejected before any funds move. Funds are
/// pulled from the caller into the contract's custody balance. Reaching
/// three cumulative months promotes Confirmed -> Eligible, once.
///
/// # State Transition
/// Confirmed -> Confirmed | Eligible
/// Eligible  -> Eligible
pub fn pay_premium(
    env: &Env,
    caller: Address,
    months: u32,
    amount: i128,
) -> Result<(), ContractError> {
    let mut record = storage::get_employee(env, &caller).ok_or(ContractError::EmployeeNotFound)?;
    apply_lapse(env, &caller, &mut record);

    if months == 0 {
        return Err(ContractError::InvalidInput);
    }
    match record.status {
        CoverageStatus::Confirmed | CoverageStatus::Eligible => {}
        _ => return Err(ContractError::InvalidState),
    }

    let due = record
        .contribution_amount
        .checked_mul(months as i128)
        .ok_or(ContractError::InvalidInput)?;
    if amount != due {
        return Err(ContractError::InvalidInput);
    }
    let new_months_paid = record
        .months_paid
        .checked_add(months)
        .ok_or(ContractError::InvalidInput)?;

    let token = storage::get_token(env).ok_or(ContractError::NotInitialized)?;
    let token_client = token::Client::new(env, &token);
    token_client.transfer(&caller, &env.current_contract_address(), &amount);

    let now = env.ledger().timestamp();
    for _ in 0..months {
        record.payment_timestamps.push_back(now);
    }
    record.months_paid = new_months_paid;

    let became_eligible = record.status == CoverageStatus::Confirmed
        && record.months_paid >= MONTHS_FOR_ELIGIBILITY;
    if became_eligible {
        record.status = CoverageStatus::Eligible;
    }
    storage::put_employee(env, &caller, &record);

    emit_premium_paid(env, caller.clone(), months, amount);
    if became_eligible {
        emit_employee_status_changed(
            env,
            caller,
            CoverageStatus::Confirmed,
            CoverageStatus::Eligible,
        );
    }

    Ok(())
}

/// Submits an unemployment claim for the calling employee.
///
/// # State Transition
/// Eligible -> ClaimSubmitted
pub fn submit_claim(env: &Env, caller: Address) -> Result<(), ContractError> {
    let mut record = storage::get_employee(env, &caller).ok_or(ContractError::EmployeeNotFound)?;
    apply_lapse(env, &caller, &mut record);

    if record.status != CoverageStatus::Eligible {
        return Err(ContractError::InvalidState);
    }

    record.status = CoverageStatus::ClaimSubmitted;
    storage::put_employee(env, &caller, &record);

    emit_employee_status_changed(
        env,
        caller.clone(),
        CoverageStatus::Eligible,
        CoverageStatus::ClaimSubmitted,
    );
    emit_claim_submitted(env, caller);

    Ok(())
}

/// Confirms a submitted claim and releases the payout to the employee.
///
/// The caller must be the administrator of the company resolved from the
/// supplied name. The status is persisted as Closed before the token leaves
/// custody, so a repeated or re-entrant confirmation observes Closed and
/// fails; a trapped transfer reverts the whole invocation, status write
/// included.
///
/// # State Transition
/// ClaimSubmitted -> Closed
pub fn confirm_claim(
    env: &Env,
    caller: Address,
    company_name: String,
    employee: Address,
) -> Result<i128, ContractError> {
    let company_key = storage::company_fingerprint(env, &company_name);
    let company = storage::get_company(env, &company_key).ok_or(ContractError::CompanyNotFound)?;
    if caller != company.administrator {
        return Err(ContractError::Unauthorized);
    }

    let mut record =
        storage::get_employee(env, &employee).ok_or(ContractError::EmployeeNotFound)?;
    if record.status != CoverageStatus::ClaimSubmitted {
        return Err(ContractError::InvalidState);
    }

    let payout = fees::payout_for(record.monthly_salary);
    let token = storage::get_token(env).ok_or(ContractError::NotInitialized)?;
    let token_client = token::Client::new(env, &token);
    if token_client.balance(&env.current_contract_address()) < payout {
        return Err(ContractError::InsufficientFunds);
    }

    record.status = CoverageStatus::Closed;
    storage::put_employee(env, &employee, &record);

    token_client.transfer(&env.current_contract_address(), &employee, &payout);

    emit_employee_status_changed(
        env,
        employee.clone(),
        CoverageStatus::ClaimSubmitted,
        CoverageStatus::Closed,
    );
    emit_claim_confirmed(env, employee, payout);

    Ok(payout)
}

/// Closes an employee's coverage from any state.
///
/// Restricted to the employee themself or the contract owner.
///
/// # State Transition
/// any -> Closed
pub fn exit_coverage(env: &Env, caller: Address, employee: Address) -> Result<(), ContractError> {
    if caller != employee {
        let owner = storage::get_owner(env).ok_or(ContractError::NotInitialized)?;
        if caller != owner {
            return Err(ContractError::Unauthorized);
        }
    }

    let mut record =
        storage::get_employee(env, &employee).ok_or(ContractError::EmployeeNotFound)?;
    let old_status = record.status.clone();
    record.status = CoverageStatus::Closed;
    storage::put_employee(env, &employee, &record);

    emit_employee_status_changed(env, employee.clone(), old_status, CoverageStatus::Closed);
    emit_employee_exited(env, employee);

    Ok(())
}

/// Forces Closed when the premium deadline has passed.
///
/// The window is anchored at the confirmation timestamp and extends one
/// month per paid month plus the grace allowance, so it only applies to
/// Confirmed and Eligible records. Persists and emits only on an actual
/// lapse; when the enclosing operation is then rejected, the host rolls the
/// write back with the rest of the invocation, so the standalone
/// [`lapse_check`] entrypoint is the committing path.
fn apply_lapse(env: &Env, employee: &Address, record: &mut Employee) {
    match record.status {
        CoverageStatus::Confirmed | CoverageStatus::Eligible => {}
        _ => return,
    }
    let verified_at = match record.verified_at {
        Some(ts) => ts,
        None => return,
    };

    let covered_months = record.months_paid as u64 + GRACE_MONTHS;
    let deadline = verified_at + covered_months * SECONDS_PER_MONTH;
    if env.ledger().timestamp() <= deadline {
        return;
    }

    let old_status = record.status.clone();
    record.status = CoverageStatus::Closed;
    storage::put_employee(env, employee, record);

    emit_coverage_lapsed(env, employee.clone(), deadline);
    emit_employee_status_changed(env, employee.clone(), old_status, CoverageStatus::Closed);
}
