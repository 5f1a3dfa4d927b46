#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, String, Vec};

mod errors;
mod events;
mod fees;
mod lifecycle;
mod storage;

#[cfg(test)]
mod tests;

pub use errors::ContractError;
pub use storage::{Company, CoverageStatus, Employee};

/// Employer-sponsored unemployment-insurance ledger.
///
/// Companies register under the fingerprint of their name, employees enroll
/// under a company, pay monthly premiums into custody, and are paid a
/// salary-banded payout when the company confirms their claim. The employee
/// lifecycle is a closed state machine:
///
/// Registered -> Confirmed -> Eligible -> ClaimSubmitted -> Closed
///
/// Closed is terminal. Falling more than three months behind on premiums
/// closes coverage automatically, re-evaluated lazily on access.
///
/// # Security Model
///
/// - Only the contract owner registers companies
/// - Only a company's administrator confirms employment and claims
/// - Employees act solely on their own record; identity is always an
///   explicit, authenticated argument
/// - Every rejection leaves records and custody balances unchanged
#[contract]
pub struct UnemploymentInsuranceContract;

#[contractimpl]
impl UnemploymentInsuranceContract {
    /// Initializes the contract.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `owner` - The privileged owner (must authenticate)
    /// * `token` - The custody token premiums are paid in and payouts are
    ///   released from
    ///
    /// # Access Control
    ///
    /// Only callable once.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ContractError> {
        owner.require_auth();
        if storage::get_owner(&env).is_some() {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        Ok(())
    }

    /// Registers a company and its fixed administrator.
    ///
    /// # Arguments
    ///
    /// * `caller` - The contract owner (must authenticate)
    /// * `name` - Company name; its sha256 fingerprint becomes the key
    /// * `administrator` - Address authorized to confirm employment and
    ///   claims for this company
    ///
    /// # Returns
    ///
    /// The company's name fingerprint.
    ///
    /// # Access Control
    ///
    /// Owner only.
    ///
    /// # Events
    ///
    /// Emits `cmp_reg` on success.
    pub fn register_company(
        env: Env,
        caller: Address,
        name: String,
        administrator: Address,
    ) -> Result<BytesN<32>, ContractError> {
        caller.require_auth();
        lifecycle::register_company(&env, caller, name, administrator)
    }

    /// Enrolls the caller as an employee of an existing company.
    ///
    /// # Arguments
    ///
    /// * `caller` - The enrolling employee (must authenticate)
    /// * `company_name` - Name of the company to enroll under
    /// * `monthly_salary` - Positive, immutable; fixes the contribution
    ///   amount via the fee schedule
    /// * `name_fingerprint` - Opaque hash of the employee's name,
    ///   informational only
    /// * `email` - Contact address
    /// * `national_id` - National identity string
    ///
    /// # Events
    ///
    /// Emits `emp_reg` on success.
    pub fn register_employee(
        env: Env,
        caller: Address,
        company_name: String,
        monthly_salary: i128,
        name_fingerprint: BytesN<32>,
        email: String,
        national_id: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::register_employee(
            &env,
            caller,
            company_name,
            monthly_salary,
            name_fingerprint,
            email,
            national_id,
        )
    }

    /// Confirms an employee's employment, starting the premium clock.
    ///
    /// # Arguments
    ///
    /// * `caller` - The company administrator (must authenticate)
    /// * `company_name` - Name the company is resolved from
    /// * `employee` - The employee being confirmed
    ///
    /// # Access Control
    ///
    /// Administrator of the named company only.
    ///
    /// # Events
    ///
    /// Emits `emp_sts` on success.
    pub fn confirm_employment(
        env: Env,
        caller: Address,
        company_name: String,
        employee: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::confirm_employment(&env, caller, company_name, employee)
    }

    /// Re-evaluates the lapse window for an employee.
    ///
    /// Anyone may invoke this; it is also run implicitly by `pay_premium`
    /// and `submit_claim`. Idempotent.
    ///
    /// # Returns
    ///
    /// The employee's current status after the check.
    ///
    /// # Events
    ///
    /// Emits `lapsed` and `emp_sts` when coverage actually lapses.
    pub fn lapse_check(env: Env, employee: Address) -> Result<CoverageStatus, ContractError> {
        lifecycle::lapse_check(&env, &employee)
    }

    /// Pays premium months at the caller's fixed contribution rate.
    ///
    /// # Arguments
    ///
    /// * `caller` - The paying employee (must authenticate)
    /// * `months` - Number of months to pay, positive
    /// * `amount` - Must equal `contribution_amount * months` exactly
    ///
    /// # Requirements
    ///
    /// * Status Confirmed or Eligible after the implicit lapse check
    /// * Caller holds `amount` of the custody token
    ///
    /// # Events
    ///
    /// Emits `prem_pai`, plus `emp_sts` when the third cumulative month
    /// promotes the employee to Eligible.
    pub fn pay_premium(
        env: Env,
        caller: Address,
        months: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::pay_premium(&env, caller, months, amount)
    }

    /// Submits an unemployment claim for the calling employee.
    ///
    /// # Requirements
    ///
    /// * Status Eligible after the implicit lapse check
    ///
    /// # Events
    ///
    /// Emits `emp_sts` and `clm_sub` on success.
    pub fn submit_claim(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::submit_claim(&env, caller)
    }

    /// Confirms a submitted claim and releases the payout.
    ///
    /// # Arguments
    ///
    /// * `caller` - The company administrator (must authenticate)
    /// * `company_name` - Name the company is resolved from
    /// * `employee` - The claiming employee
    ///
    /// # Returns
    ///
    /// The payout amount released.
    ///
    /// # Requirements
    ///
    /// * Employee status is ClaimSubmitted
    /// * Custody balance covers the salary-banded payout
    ///
    /// # Access Control
    ///
    /// Administrator of the named company only.
    ///
    /// # Events
    ///
    /// Emits `emp_sts` and `clm_conf` on success.
    pub fn confirm_claim(
        env: Env,
        caller: Address,
        company_name: String,
        employee: Address,
    ) -> Result<i128, ContractError> {
        caller.require_auth();
        lifecycle::confirm_claim(&env, caller, company_name, employee)
    }

    /// Closes an employee's coverage from any state.
    ///
    /// # Access Control
    ///
    /// The employee themself or the contract owner.
    ///
    /// # Events
    ///
    /// Emits `emp_sts` and `emp_exit` on success.
    pub fn exit_coverage(
        env: Env,
        caller: Address,
        employee: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::exit_coverage(&env, caller, employee)
    }

    /// Gets an employee record by identity.
    pub fn get_employee(env: Env, employee: Address) -> Option<Employee> {
        storage::get_employee(&env, &employee)
    }

    /// Gets a company record by name.
    pub fn get_company(env: Env, name: String) -> Option<Company> {
        let fingerprint = storage::company_fingerprint(&env, &name);
        storage::get_company(&env, &fingerprint)
    }

    /// Gets the membership list of a company by name.
    ///
    /// # Returns
    ///
    /// The enrolled employee addresses, empty if the company is unknown.
    pub fn get_company_employees(env: Env, name: String) -> Vec<Address> {
        let fingerprint = storage::company_fingerprint(&env, &name);
        match storage::get_company(&env, &fingerprint) {
            Some(company) => company.employees,
            None => Vec::new(&env),
        }
    }

    /// Gets the contract's custody-token balance available for payouts.
    pub fn pool_balance(env: Env) -> Result<i128, ContractError> {
        let token = storage::get_token(&env).ok_or(ContractError::NotInitialized)?;
        let token_client = token::Client::new(&env, &token);
        Ok(token_client.balance(&env.current_contract_address()))
    }
}
