use soroban_sdk::{contracterror, contractevent, contracttype, Address, Env, String, Symbol, Vec};

/// Errors that can occur during proposal and voting operations
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    /// Proposal id is unknown
    ProposalNotFound = 1,
    /// Voting duration is zero
    InvalidDuration = 2,
    /// Proposal is not accepting votes (finalized, or window elapsed)
    ProposalNotActive = 3,
    /// Voter already has a vote record for this proposal
    AlreadyVoted = 4,
    /// Vote weight is negative
    InvalidWeight = 5,
    /// Voting window has not elapsed yet
    VotingStillOpen = 6,
    /// Proposal is not in the Approved state
    NotApproved = 7,
    /// The proposal's target action failed
    ExecutionFailed = 8,
    /// Arithmetic overflow in tally accounting
    Overflow = 9,
}

/// Storage keys for the proposal registry
#[contracttype]
#[derive(Clone)]
pub enum ProposalDataKey {
    /// A single proposal record
    Proposal(u64),
    /// Number of proposals ever created; also the next id to assign
    ProposalCount,
}

/// Proposal lifecycle status. Transitions are forward-only:
/// Active -> Approved -> Executed, or Active -> Rejected.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Accepting votes while the voting window is open
    Active,
    /// Passed finalization, eligible for execution
    Approved,
    /// Failed finalization, can never execute
    Rejected,
    /// Target action was carried out
    Executed,
}

/// The action carried out when an approved proposal executes.
///
/// Resolved by cross-contract invocation at execution time; the governance
/// contract never interprets the function name or arguments itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Action {
    /// Contract to invoke
    pub contract: Address,
    /// Function to call on the target contract
    pub function: Symbol,
    /// Arguments passed to the target function
    pub args: Vec<String>,
}

/// A governance proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id, assigned at creation starting from 0
    pub id: u64,
    /// Address that created the proposal
    pub proposer: Address,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Action executed on approval
    pub action: Action,
    /// Ledger sequence at creation
    pub created_at: u32,
    /// Number of ledgers the voting window stays open
    pub duration: u32,
    /// Weighted total of For votes
    pub votes_for: i128,
    /// Weighted total of Against votes
    pub votes_against: i128,
    /// Weighted total of Abstain votes
    pub votes_abstain: i128,
    /// Current lifecycle status
    pub status: ProposalStatus,
}

impl Proposal {
    /// First ledger sequence at which the voting window is closed
    pub fn voting_ends_at(&self) -> u32 {
        self.created_at.saturating_add(self.duration)
    }
}

/// Event data emitted when a proposal is created.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalCreatedEvent {
    pub proposal_id: u64,
    pub proposer: Address,
    pub voting_ends_at: u32,
}

/// Create a new proposal
///
/// Open to any identity. Ids are assigned sequentially starting at 0 and
/// are never reused.
///
/// # Arguments
/// * `env` - The contract environment
/// * `proposer` - The creator's address (must authorize)
/// * `title` - Short title
/// * `description` - Longer description
/// * `duration` - Voting window length in ledgers, must be positive
/// * `action` - The action executed if the proposal passes
///
/// # Returns
/// Returns the new proposal id on success
pub fn create_proposal(
    env: &Env,
    proposer: Address,
    title: String,
    description: String,
    duration: u32,
    action: Action,
) -> Result<u64, GovernanceError> {
    proposer.require_auth();

    if duration == 0 {
        return Err(GovernanceError::InvalidDuration);
    }

    let id = get_proposal_count(env);
    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        title,
        description,
        action,
        created_at: env.ledger().sequence(),
        duration,
        votes_for: 0,
        votes_against: 0,
        votes_abstain: 0,
        status: ProposalStatus::Active,
    };

    let voting_ends_at = proposal.voting_ends_at();
    save_proposal(env, &proposal);
    env.storage()
        .persistent()
        .set(&ProposalDataKey::ProposalCount, &(id + 1));

    ProposalCreatedEvent {
        proposal_id: id,
        proposer,
        voting_ends_at,
    }
    .publish(env);

    Ok(id)
}

/// Get a proposal by id, `None` when the id is unknown
pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&ProposalDataKey::Proposal(proposal_id))
}

/// Number of proposals ever created; equals the next id to be assigned
pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&ProposalDataKey::ProposalCount)
        .unwrap_or(0)
}

/// Load a proposal, failing with `ProposalNotFound` for unknown ids
pub fn load_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
    get_proposal(env, proposal_id).ok_or(GovernanceError::ProposalNotFound)
}

/// Persist a proposal record
pub fn save_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&ProposalDataKey::Proposal(proposal.id), proposal);
}
