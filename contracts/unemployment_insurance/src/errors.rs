use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Contract Errors
//-----------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// Raised when the caller is not allowed to perform the action
    Unauthorized = 1,
    /// Raised when no company is registered under the supplied name
    CompanyNotFound = 2,
    /// Raised when no employee record exists for the supplied identity
    EmployeeNotFound = 3,
    /// Raised on empty names, non-positive salaries or wrong payment amounts
    InvalidInput = 4,
    /// Raised when the operation is not legal in the current coverage status
    InvalidState = 5,
    /// Raised when the custody balance cannot cover the requested payout
    InsufficientFunds = 6,
    /// Raised when a company with the same name fingerprint already exists
    CompanyExists = 7,
    /// Raised when the caller already has an employee record
    EmployeeExists = 8,
    /// Raised when initialize is called more than once
    AlreadyInitialized = 9,
    /// Raised when the contract has not been initialized
    NotInitialized = 10,
}
