use soroban_sdk::contracterror;

/// Failure kinds surfaced by every fallible entry point.
///
/// Any invocation returning one of these is rolled back by the host, so a
/// rejected call leaves storage and token balances untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidAmount = 4,
    InsufficientContribution = 5,
    Unauthorized = 6,
    NotApprover = 7,
    AlreadyApproved = 8,
    AlreadyFinalized = 9,
    QuorumNotMet = 10,
    InsufficientFunds = 11,
    IndexOutOfRange = 12,
    ArithmeticError = 13,
    InvalidRecipient = 14,
}
