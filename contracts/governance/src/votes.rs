use crate::proposals::{self, GovernanceError, ProposalStatus};
use soroban_sdk::{contractevent, contracttype, Address, Env};

/// How a vote counts toward the tallies.
///
/// Discriminants match the wire values accepted by `vote`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteKind {
    For = 1,
    Against = 2,
    Abstain = 3,
}

/// Storage keys for the vote ledger
#[contracttype]
#[derive(Clone)]
pub enum VoteDataKey {
    /// Existence of a record means the voter already voted on the proposal
    Record(u64, Address),
}

/// Event data emitted when a vote is accepted.
#[contractevent]
#[derive(Clone, Debug)]
pub struct VoteCastEvent {
    pub proposal_id: u64,
    pub voter: Address,
    pub kind: VoteKind,
    pub weight: i128,
}

/// Record a weighted vote on an active proposal
///
/// The weight is supplied by the caller from the external token balance;
/// it is not cross-checked against the governance token here. Each voter
/// may vote at most once per proposal.
///
/// # Arguments
/// * `env` - The contract environment
/// * `voter` - The voter's address (must authorize)
/// * `proposal_id` - The proposal to vote on
/// * `kind` - For, Against, or Abstain
/// * `weight` - Non-negative voting weight
///
/// # Errors
/// - `ProposalNotFound` - Unknown proposal id
/// - `ProposalNotActive` - Proposal finalized, or the window has elapsed
/// - `InvalidWeight` - Weight is negative
/// - `AlreadyVoted` - Voter already has a record for this proposal
/// - `Overflow` - Tally would overflow
pub fn record_vote(
    env: &Env,
    voter: Address,
    proposal_id: u64,
    kind: VoteKind,
    weight: i128,
) -> Result<(), GovernanceError> {
    voter.require_auth();

    let mut proposal = proposals::load_proposal(env, proposal_id)?;

    if proposal.status != ProposalStatus::Active {
        return Err(GovernanceError::ProposalNotActive);
    }

    // The window closes at created_at + duration; a vote at that exact
    // sequence is already too late and must go through finalize.
    if env.ledger().sequence() >= proposal.voting_ends_at() {
        return Err(GovernanceError::ProposalNotActive);
    }

    if weight < 0 {
        return Err(GovernanceError::InvalidWeight);
    }

    let record_key = VoteDataKey::Record(proposal_id, voter.clone());
    if env.storage().persistent().has(&record_key) {
        return Err(GovernanceError::AlreadyVoted);
    }

    let tally = match kind {
        VoteKind::For => &mut proposal.votes_for,
        VoteKind::Against => &mut proposal.votes_against,
        VoteKind::Abstain => &mut proposal.votes_abstain,
    };
    *tally = tally.checked_add(weight).ok_or(GovernanceError::Overflow)?;

    env.storage().persistent().set(&record_key, &true);
    proposals::save_proposal(env, &proposal);

    VoteCastEvent {
        proposal_id,
        voter,
        kind,
        weight,
    }
    .publish(env);

    Ok(())
}

/// Check whether a voter already voted on a proposal
pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&VoteDataKey::Record(proposal_id, voter.clone()))
}
