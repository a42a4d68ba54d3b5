use soroban_sdk::{contracterror, contractevent, contracttype, Address, Env};

/// Errors that can occur during configuration operations
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConfigError {
    /// Caller is not the governance admin
    Unauthorized = 1,
    /// Amount is zero or negative
    InvalidAmount = 2,
    /// Admin has already been set
    AlreadyInitialized = 3,
}

/// Storage keys for governance configuration
#[contracttype]
#[derive(Clone)]
pub enum ConfigDataKey {
    /// The admin address with exclusive rights over configuration
    Admin,
    /// The token contract used to weight votes (held opaquely)
    GovernanceToken,
    /// Total eligible voting weight, sizes the quorum threshold
    TotalTokenSupply,
}

/// Event data emitted when the admin is set.
#[contractevent]
#[derive(Clone, Debug)]
pub struct AdminSetEvent {
    pub admin: Address,
}

/// Event data emitted when the total token supply changes.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TotalSupplySetEvent {
    pub admin: Address,
    pub amount: i128,
}

/// Event data emitted when the governance token reference changes.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GovernanceTokenSetEvent {
    pub admin: Address,
    pub token: Address,
}

/// Set the admin address. Can only be called once.
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The admin address
pub fn initialize(env: &Env, admin: Address) -> Result<(), ConfigError> {
    if env.storage().persistent().has(&ConfigDataKey::Admin) {
        return Err(ConfigError::AlreadyInitialized);
    }
    env.storage().persistent().set(&ConfigDataKey::Admin, &admin);

    AdminSetEvent { admin }.publish(env);

    Ok(())
}

/// Require that the caller is the governance admin
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ConfigError> {
    let admin = get_admin(env).ok_or(ConfigError::Unauthorized)?;
    if admin != *caller {
        return Err(ConfigError::Unauthorized);
    }
    Ok(())
}

/// Set the total token supply used to size the quorum threshold (admin only)
///
/// # Arguments
/// * `env` - The contract environment
/// * `caller` - The caller address (must be admin and authorize)
/// * `amount` - The new total supply, must be positive
pub fn set_total_token_supply(
    env: &Env,
    caller: Address,
    amount: i128,
) -> Result<(), ConfigError> {
    caller.require_auth();
    require_admin(env, &caller)?;

    if amount <= 0 {
        return Err(ConfigError::InvalidAmount);
    }

    env.storage()
        .persistent()
        .set(&ConfigDataKey::TotalTokenSupply, &amount);

    TotalSupplySetEvent {
        admin: caller,
        amount,
    }
    .publish(env);

    Ok(())
}

/// Set the governance token reference (admin only)
///
/// The token address is stored opaquely; the contract never calls into it.
/// Vote weights are supplied by the caller at vote time.
pub fn set_governance_token(env: &Env, caller: Address, token: Address) -> Result<(), ConfigError> {
    caller.require_auth();
    require_admin(env, &caller)?;

    env.storage()
        .persistent()
        .set(&ConfigDataKey::GovernanceToken, &token);

    GovernanceTokenSetEvent {
        admin: caller,
        token,
    }
    .publish(env);

    Ok(())
}

/// Get the admin address
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&ConfigDataKey::Admin)
}

/// Get the governance token reference
pub fn get_governance_token(env: &Env) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&ConfigDataKey::GovernanceToken)
}

/// Get the total token supply, 0 when never set
pub fn get_total_token_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&ConfigDataKey::TotalTokenSupply)
        .unwrap_or(0)
}
