use crate::config;
use crate::proposals::{self, GovernanceError, ProposalStatus};
use soroban_sdk::{contractevent, Address, Env, IntoVal, Val, Vec};

/// Quorum threshold as a fraction of the total token supply, in basis
/// points. Participation across all three tallies must reach this floor
/// before a proposal can be approved.
const QUORUM_BPS: i128 = 2_000; // 20%
const BASIS_POINTS_SCALE: i128 = 10_000;

/// Event data emitted when a proposal is finalized.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalFinalizedEvent {
    pub proposal_id: u64,
    pub approved: bool,
    pub votes_for: i128,
    pub votes_against: i128,
    pub votes_abstain: i128,
}

/// Event data emitted when a proposal is executed.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalExecutedEvent {
    pub proposal_id: u64,
    pub executor: Address,
}

/// Finalize a proposal whose voting window has elapsed
///
/// Open to any caller. Approves if participation reaches the quorum floor
/// and strictly more weight voted For than Against; rejects otherwise,
/// ties included.
///
/// # Errors
/// - `ProposalNotFound` - Unknown proposal id
/// - `ProposalNotActive` - Already finalized or executed
/// - `VotingStillOpen` - Window has not elapsed yet
/// - `Overflow` - Participation sum or quorum arithmetic would overflow
pub fn finalize_proposal(env: &Env, proposal_id: u64) -> Result<(), GovernanceError> {
    let mut proposal = proposals::load_proposal(env, proposal_id)?;

    if proposal.status != ProposalStatus::Active {
        return Err(GovernanceError::ProposalNotActive);
    }

    if env.ledger().sequence() < proposal.voting_ends_at() {
        return Err(GovernanceError::VotingStillOpen);
    }

    let participation = proposal
        .votes_for
        .checked_add(proposal.votes_against)
        .and_then(|sum| sum.checked_add(proposal.votes_abstain))
        .ok_or(GovernanceError::Overflow)?;

    let quorum = config::get_total_token_supply(env)
        .checked_mul(QUORUM_BPS)
        .map(|scaled| scaled / BASIS_POINTS_SCALE)
        .ok_or(GovernanceError::Overflow)?;
    let approved = participation >= quorum && proposal.votes_for > proposal.votes_against;

    proposal.status = if approved {
        ProposalStatus::Approved
    } else {
        ProposalStatus::Rejected
    };
    proposals::save_proposal(env, &proposal);

    ProposalFinalizedEvent {
        proposal_id,
        approved,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
        votes_abstain: proposal.votes_abstain,
    }
    .publish(env);

    Ok(())
}

/// Execute an approved proposal's target action
///
/// Invokes the action's function on its target contract. The proposal is
/// marked Executed only if the invocation succeeds; a failed action leaves
/// it Approved so execution can be retried.
///
/// # Errors
/// - `ProposalNotFound` - Unknown proposal id
/// - `NotApproved` - Proposal is active, rejected, or already executed
/// - `ExecutionFailed` - The target action returned an error or trapped
pub fn execute_proposal(
    env: &Env,
    executor: Address,
    proposal_id: u64,
) -> Result<(), GovernanceError> {
    executor.require_auth();

    let mut proposal = proposals::load_proposal(env, proposal_id)?;

    if proposal.status != ProposalStatus::Approved {
        return Err(GovernanceError::NotApproved);
    }

    let mut args: Vec<Val> = Vec::new(env);
    for arg in proposal.action.args.iter() {
        args.push_back(arg.into_val(env));
    }

    let result = env.try_invoke_contract::<Val, soroban_sdk::Error>(
        &proposal.action.contract,
        &proposal.action.function,
        args,
    );
    if result.is_err() {
        return Err(GovernanceError::ExecutionFailed);
    }

    proposal.status = ProposalStatus::Executed;
    proposals::save_proposal(env, &proposal);

    ProposalExecutedEvent {
        proposal_id,
        executor,
    }
    .publish(env);

    Ok(())
}
