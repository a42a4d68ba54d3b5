//! # Governance Chain Contract
//!
//! A token-holder governance contract: anyone may create a proposal, token
//! holders cast weighted votes exactly once per proposal while the voting
//! window is open, and after the window elapses the proposal is finalized
//! against a quorum floor. Only approved proposals may execute their
//! target action, via cross-contract invocation.
//!
//! The ledger sequence number serves as the logical clock for voting
//! windows; the host chain guarantees atomic, totally-ordered execution,
//! so no internal locking is needed.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod config;
pub use config::ConfigError;

mod proposals;
pub use proposals::{Action, GovernanceError, Proposal, ProposalStatus};

mod votes;
pub use votes::VoteKind;

mod lifecycle;


#[cfg(test)]
mod proposals_test;



#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContract {
    /// Set the contract admin. Can only be called once.
    ///
    /// # Arguments
    /// * `admin` - The admin address
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Admin was already set
    pub fn initialize(env: Env, admin: Address) -> Result<(), ConfigError> {
        config::initialize(&env, admin)
    }

    /// Set the total token supply used to size the quorum threshold
    /// (admin only)
    ///
    /// Overwrites any previous value.
    ///
    /// # Arguments
    /// * `caller` - The caller address (must be admin and authorize)
    /// * `amount` - The new total supply
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the admin
    /// - `InvalidAmount` - Amount is zero or negative
    pub fn set_total_token_supply(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ConfigError> {
        config::set_total_token_supply(&env, caller, amount)
    }

    /// Set the governance token reference (admin only)
    ///
    /// # Arguments
    /// * `caller` - The caller address (must be admin and authorize)
    /// * `token` - The token contract address
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the admin
    pub fn set_governance_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ConfigError> {
        config::set_governance_token(&env, caller, token)
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Option<Address> {
        config::get_admin(&env)
    }

    /// Get the governance token reference
    pub fn get_governance_token(env: Env) -> Option<Address> {
        config::get_governance_token(&env)
    }

    /// Get the total token supply, 0 when never set
    pub fn get_total_token_supply(env: Env) -> i128 {
        config::get_total_token_supply(&env)
    }

    /// Create a new proposal
    ///
    /// Open to any identity. Ids are sequential starting at 0.
    ///
    /// # Arguments
    /// * `proposer` - The creator's address (must authorize)
    /// * `title` - Short title
    /// * `description` - Longer description
    /// * `duration` - Voting window length in ledgers
    /// * `action` - The action executed if the proposal passes
    ///
    /// # Returns
    /// Returns the new proposal id
    ///
    /// # Errors
    /// - `InvalidDuration` - Duration is zero
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        duration: u32,
        action: Action,
    ) -> Result<u64, GovernanceError> {
        proposals::create_proposal(&env, proposer, title, description, duration, action)
    }

    /// Cast a weighted vote on an active proposal
    ///
    /// Each voter may vote at most once per proposal. Votes are only
    /// accepted while the proposal is active and its window is open.
    ///
    /// # Arguments
    /// * `voter` - The voter's address (must authorize)
    /// * `proposal_id` - The proposal to vote on
    /// * `kind` - For, Against, or Abstain
    /// * `weight` - Non-negative voting weight
    ///
    /// # Errors
    /// - `ProposalNotFound` - Unknown proposal id
    /// - `ProposalNotActive` - Finalized, or window elapsed
    /// - `AlreadyVoted` - Voter already voted on this proposal
    /// - `InvalidWeight` - Weight is negative
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        kind: VoteKind,
        weight: i128,
    ) -> Result<(), GovernanceError> {
        votes::record_vote(&env, voter, proposal_id, kind, weight)
    }

    /// Get a proposal by id
    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        proposals::get_proposal(&env, proposal_id)
    }

    /// Number of proposals ever created
    pub fn get_proposal_count(env: Env) -> u64 {
        proposals::get_proposal_count(&env)
    }

    /// Check whether a voter already voted on a proposal
    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        votes::has_voted(&env, proposal_id, &voter)
    }

    /// Finalize a proposal whose voting window has elapsed
    ///
    /// Open to any caller. Approves if participation reaches the quorum
    /// floor and For strictly exceeds Against; rejects otherwise.
    ///
    /// # Errors
    /// - `ProposalNotFound` - Unknown proposal id
    /// - `ProposalNotActive` - Already finalized
    /// - `VotingStillOpen` - Window has not elapsed yet
    pub fn finalize_proposal(env: Env, proposal_id: u64) -> Result<(), GovernanceError> {
        lifecycle::finalize_proposal(&env, proposal_id)
    }

    /// Execute an approved proposal's target action
    ///
    /// The proposal transitions to Executed only if the target action
    /// succeeds; a failed action leaves it Approved.
    ///
    /// # Arguments
    /// * `executor` - The caller's address (must authorize)
    /// * `proposal_id` - The proposal to execute
    ///
    /// # Errors
    /// - `ProposalNotFound` - Unknown proposal id
    /// - `NotApproved` - Proposal is active, rejected, or already executed
    /// - `ExecutionFailed` - The target action failed
    pub fn execute_proposal(
        env: Env,
        executor: Address,
        proposal_id: u64,
    ) -> Result<(), GovernanceError> {
        lifecycle::execute_proposal(&env, executor, proposal_id)
    }
}
