use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, String, Vec};

extern crate alloc;

/// Lifecycle states for employee coverage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CoverageStatus {
    /// Enrolled but employment not yet confirmed by the company
    Registered,
    /// Employment confirmed; premium clock running
    Confirmed,
    /// Enough premiums paid to submit a claim
    Eligible,
    /// Claim submitted, awaiting company confirmation
    ClaimSubmitted,
    /// Terminal: paid out, exited, or lapsed
    Closed,
}

/// One coverage record per employee identity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub name_fingerprint: BytesN<32>,
    pub email: String,
    pub national_id: String,
    /// Positive, immutable after registration
    pub monthly_salary: i128,
    /// Derived once from salary via the fee schedule, immutable
    pub contribution_amount: i128,
    /// Append-only; `months_paid` always equals its length
    pub payment_timestamps: Vec<u64>,
    pub months_paid: u32,
    pub status: CoverageStatus,
    /// Set once, on employment confirmation
    pub verified_at: Option<u64>,
}

/// One record per company, keyed by its name fingerprint
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Company {
    /// Fixed at registration; authorizes confirmations
    pub administrator: Address,
    pub name: String,
    /// Append-only membership list, for enumeration only.
    /// Authorization always re-derives the company from a caller-supplied
    /// name instead of consulting this list.
    pub employees: Vec<Address>,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Privileged contract owner
    Owner,
    /// Custody token address
    Token,
    /// Company by name fingerprint
    Company(BytesN<32>),
    /// Employee record by identity
    Employee(Address),
}

/// Derives the primary key for a company name: sha256 over the raw name
/// bytes. Deterministic; equal fingerprints mean the same company.
pub fn company_fingerprint(env: &Env, name: &String) -> BytesN<32> {
    let len = name.len() as usize;
    let mut buf = alloc::vec![0u8; len];
    name.copy_into_slice(&mut buf);
    env.crypto().sha256(&Bytes::from_slice(env, &buf)).to_bytes()
}

pub fn get_employee(env: &Env, id: &Address) -> Option<Employee> {
    env.storage()
        .persistent()
        .get(&StorageKey::Employee(id.clone()))
}

pub fn put_employee(env: &Env, id: &Address, record: &Employee) {
    env.storage()
        .persistent()
        .set(&StorageKey::Employee(id.clone()), record);
}

pub fn has_employee(env: &Env, id: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Employee(id.clone()))
}

pub fn get_company(env: &Env, fingerprint: &BytesN<32>) -> Option<Company> {
    env.storage()
        .persistent()
        .get(&StorageKey::Company(fingerprint.clone()))
}

pub fn put_company(env: &Env, fingerprint: &BytesN<32>, record: &Company) {
    env.storage()
        .persistent()
        .set(&StorageKey::Company(fingerprint.clone()), record);
}

pub fn has_company(env: &Env, fingerprint: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Company(fingerprint.clone()))
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&StorageKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&StorageKey::Owner, owner);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&StorageKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().persistent().set(&StorageKey::Token, token);
}
