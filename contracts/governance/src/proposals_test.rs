use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Symbol, Vec};

fn setup() -> (Env, GovernanceContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(GovernanceContract, ());
    let client = GovernanceContractClient::new(&env, &contract_id);

    (env, client)
}

fn test_action(env: &Env) -> Action {
    Action {
        contract: Address::generate(env),
        function: Symbol::new(env, "test_function"),
        args: Vec::from_array(
            env,
            [
                String::from_str(env, "arg1"),
                String::from_str(env, "arg2"),
            ],
        ),
    }
}

#[test]
fn test_create_proposal_stores_record() {
    let (env, client) = setup();

    let proposer = Address::generate(&env);
    let title = String::from_str(&env, "First Proposal");
    let description = String::from_str(&env, "This is the first test proposal");
    let action = test_action(&env);

    let id = client.create_proposal(&proposer, &title, &description, &144, &action);
    assert_eq!(id, 0);

    let proposal = client.get_proposal(&id).unwrap();
    assert_eq!(proposal.id, 0);
    assert_eq!(proposal.proposer, proposer);
    assert_eq!(proposal.title, title);
    assert_eq!(proposal.description, description);
    assert_eq!(proposal.action, action);
    assert_eq!(proposal.created_at, env.ledger().sequence());
    assert_eq!(proposal.duration, 144);
    assert_eq!(proposal.votes_for, 0);
    assert_eq!(proposal.votes_against, 0);
    assert_eq!(proposal.votes_abstain, 0);
    assert_eq!(proposal.status, ProposalStatus::Active);
}

#[test]
fn test_sequential_ids() {
    let (env, client) = setup();

    let title = String::from_str(&env, "Proposal");
    let description = String::from_str(&env, "Description");

    for expected in 0..3u64 {
        let proposer = Address::generate(&env);
        let id = client.create_proposal(&proposer, &title, &description, &144, &test_action(&env));
        assert_eq!(id, expected);
    }
    assert_eq!(client.get_proposal_count(), 3);
}

#[test]
fn test_create_proposal_zero_duration() {
    let (env, client) = setup();

    let proposer = Address::generate(&env);
    let title = String::from_str(&env, "Proposal");
    let description = String::from_str(&env, "Description");

    assert_eq!(
        client.try_create_proposal(&proposer, &title, &description, &0, &test_action(&env)),
        Err(Ok(GovernanceError::InvalidDuration))
    );
    assert_eq!(client.get_proposal_count(), 0);
}

#[test]
fn test_get_unknown_proposal() {
    let (_env, client) = setup();

    assert_eq!(client.get_proposal(&0), None);
    assert_eq!(client.get_proposal_count(), 0);
}

#[test]
fn test_any_identity_may_propose() {
    let (env, client) = setup();

    // No admin is configured at all; proposal creation is unrestricted.
    let proposer = Address::generate(&env);
    let title = String::from_str(&env, "Open access");
    let description = String::from_str(&env, "No authorization gate on creation");

    let id = client.create_proposal(&proposer, &title, &description, &10, &test_action(&env));
    assert_eq!(id, 0);
}
