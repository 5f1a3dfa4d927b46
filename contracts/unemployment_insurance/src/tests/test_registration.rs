#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, String};

use crate::{
    ContractError, CoverageStatus, UnemploymentInsuranceContract,
    UnemploymentInsuranceContractClient,
};

const STANDARD_SALARY: i128 = 3_000;

fn create_test_environment() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env
}

/// Registers the contract, a custody token and the owner, and initializes.
fn setup_contract(env: &Env) -> (UnemploymentInsuranceContractClient<'static>, Address) {
    let contract_id = env.register(UnemploymentInsuranceContract, ());
    let client = UnemploymentInsuranceContractClient::new(env, &contract_id);
    let owner = Address::generate(env);
    let token_admin = Address::generate(env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    client.initialize(&owner, &token);
    (client, owner)
}

fn company_name(env: &Env) -> String {
    String::from_str(env, "Acme")
}

fn person_fingerprint(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7u8; 32])
}

fn register_employee(
    env: &Env,
    client: &UnemploymentInsuranceContractClient,
    name: &String,
    salary: i128,
) -> Address {
    let employee = Address::generate(env);
    client.register_employee(
        &employee,
        name,
        &salary,
        &person_fingerprint(env),
        &String::from_str(env, "e@example.com"),
        &String::from_str(env, "ID-123"),
    );
    employee
}

#[test]
fn test_initialize_only_once() {
    let env = create_test_environment();
    let contract_id = env.register(UnemploymentInsuranceContract, ());
    let client = UnemploymentInsuranceContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    client.initialize(&owner, &token);
    let res = client.try_initialize(&owner, &token);
    assert_eq!(res, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_register_company_requires_initialization() {
    let env = create_test_environment();
    let contract_id = env.register(UnemploymentInsuranceContract, ());
    let client = UnemploymentInsuranceContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    let res = client.try_register_company(&caller, &company_name(&env), &caller);
    assert_eq!(res, Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_register_company_owner_only() {
    let env = create_test_environment();
    let (client, _owner) = setup_contract(&env);
    let intruder = Address::generate(&env);
    let admin = Address::generate(&env);

    let res = client.try_register_company(&intruder, &company_name(&env), &admin);
    assert_eq!(res, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn test_register_company_validates_name_and_uniqueness() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let admin = Address::generate(&env);

    let res = client.try_register_company(&owner, &String::from_str(&env, ""), &admin);
    assert_eq!(res, Err(Ok(ContractError::InvalidInput)));

    client.register_company(&owner, &company_name(&env), &admin);
    let res = client.try_register_company(&owner, &company_name(&env), &admin);
    assert_eq!(res, Err(Ok(ContractError::CompanyExists)));
}

#[test]
fn test_register_company_stores_record() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let admin = Address::generate(&env);
    let name = company_name(&env);

    client.register_company(&owner, &name, &admin);

    let company = client.get_company(&name).unwrap();
    assert_eq!(company.administrator, admin);
    assert_eq!(company.name, name);
    assert_eq!(company.employees.len(), 0);
}

#[test]
fn test_register_employee_creates_record_with_derived_contribution() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let admin = Address::generate(&env);
    let name = company_name(&env);
    client.register_company(&owner, &name, &admin);

    let employee = register_employee(&env, &client, &name, STANDARD_SALARY);

    let record = client.get_employee(&employee).unwrap();
    assert_eq!(record.monthly_salary, STANDARD_SALARY);
    assert_eq!(record.contribution_amount, 25); // tier-2 band
    assert_eq!(record.status, CoverageStatus::Registered);
    assert_eq!(record.months_paid, 0);
    assert_eq!(record.payment_timestamps.len(), 0);
    assert_eq!(record.verified_at, None);

    // Membership list is appended
    let members = client.get_company_employees(&name);
    assert_eq!(members.len(), 1);
    assert_eq!(members.get(0).unwrap(), employee);
}

#[test]
fn test_register_employee_rejects_bad_input() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let name = company_name(&env);
    client.register_company(&owner, &name, &Address::generate(&env));
    let employee = Address::generate(&env);
    let fingerprint = person_fingerprint(&env);
    let email = String::from_str(&env, "e@example.com");
    let national_id = String::from_str(&env, "ID-123");

    // Empty company name
    let res = client.try_register_employee(
        &employee,
        &String::from_str(&env, ""),
        &STANDARD_SALARY,
        &fingerprint,
        &email,
        &national_id,
    );
    assert_eq!(res, Err(Ok(ContractError::InvalidInput)));

    // Non-positive salary
    let res =
        client.try_register_employee(&employee, &name, &0, &fingerprint, &email, &national_id);
    assert_eq!(res, Err(Ok(ContractError::InvalidInput)));
    let res =
        client.try_register_employee(&employee, &name, &-50, &fingerprint, &email, &national_id);
    assert_eq!(res, Err(Ok(ContractError::InvalidInput)));
}

#[test]
fn test_register_employee_requires_existing_company() {
    let env = create_test_environment();
    let (client, _owner) = setup_contract(&env);

    let employee = Address::generate(&env);
    let res = client.try_register_employee(
        &employee,
        &String::from_str(&env, "Ghost Corp"),
        &STANDARD_SALARY,
        &person_fingerprint(&env),
        &String::from_str(&env, "e@example.com"),
        &String::from_str(&env, "ID-123"),
    );
    assert_eq!(res, Err(Ok(ContractError::CompanyNotFound)));
}

#[test]
fn test_register_employee_rejects_duplicate_identity() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let name = company_name(&env);
    client.register_company(&owner, &name, &Address::generate(&env));

    let employee = register_employee(&env, &client, &name, STANDARD_SALARY);
    let res = client.try_register_employee(
        &employee,
        &name,
        &STANDARD_SALARY,
        &person_fingerprint(&env),
        &String::from_str(&env, "e@example.com"),
        &String::from_str(&env, "ID-123"),
    );
    assert_eq!(res, Err(Ok(ContractError::EmployeeExists)));

    // The first registration is untouched
    let members = client.get_company_employees(&name);
    assert_eq!(members.len(), 1);
}

#[test]
fn test_company_lookup_is_name_deterministic() {
    let env = create_test_environment();
    let (client, owner) = setup_contract(&env);
    let admin = Address::generate(&env);
    client.register_company(&owner, &company_name(&env), &admin);

    // A second String with the same content resolves to the same company
    let looked_up = client.get_company(&String::from_str(&env, "Acme")).unwrap();
    assert_eq!(looked_up.administrator, admin);

    // Different name, different key
    assert_eq!(client.get_company(&String::from_str(&env, "Acme 2")), None);
}
