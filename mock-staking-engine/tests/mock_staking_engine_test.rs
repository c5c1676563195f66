use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;

use mock_staking_engine::mock_staking_engine_proxy::MockStakingEngineProxy;
use mock_staking_engine::types::{ContractStakeInfo, EraStake};

const OWNER: TestAddress = TestAddress::new("owner");
const STAKER: TestAddress = TestAddress::new("staker");
const ENGINE_ADDRESS: TestSCAddress = TestSCAddress::new("staking-engine");
const DAPP_ADDRESS: TestSCAddress = TestSCAddress::new("dapp");
const ENGINE_CODE: MxscPath = MxscPath::new("output/mock-staking-engine.mxsc.json");

const ONE: u64 = 1_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(ENGINE_CODE, mock_staking_engine::ContractBuilder);
    blockchain
}

fn setup() -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.account(STAKER).nonce(1).balance(100 * ONE);

    world
        .tx()
        .from(OWNER)
        .typed(MockStakingEngineProxy)
        .init(7u32)
        .code(ENGINE_CODE)
        .new_address(ENGINE_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .register(DAPP_ADDRESS)
        .run();

    world
}

fn bond(world: &mut ScenarioWorld, amount: u64) {
    world
        .tx()
        .from(STAKER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .bond_and_stake(DAPP_ADDRESS)
        .egld(BigUint::<StaticApi>::from(amount))
        .run();
}

fn advance(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .advance_era(BigUint::<StaticApi>::from(3u64), BigUint::<StaticApi>::from(2u64))
        .run();
}

#[test]
fn test_contract_builds() {
    let _: fn() -> mock_staking_engine::ContractObj<DebugApi> = mock_staking_engine::contract_obj;
}

#[test]
fn test_era_advances_by_one() {
    let mut world = setup();

    for expected in 1u32..=4 {
        world
            .query()
            .to(ENGINE_ADDRESS)
            .typed(MockStakingEngineProxy)
            .get_current_era()
            .returns(ExpectValue(expected))
            .run();
        advance(&mut world);
    }

    world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_unbonding_period()
        .returns(ExpectValue(7u32))
        .run();
}

#[test]
fn test_only_owner_advances_era() {
    let mut world = setup();

    world
        .tx()
        .from(STAKER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .advance_era(BigUint::<StaticApi>::zero(), BigUint::<StaticApi>::zero())
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();
}

#[test]
fn test_history_is_append_only_per_era() {
    let mut world = setup();

    bond(&mut world, ONE);

    world
        .tx()
        .from(STAKER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .bond_and_stake(DAPP_ADDRESS)
        .egld(BigUint::<StaticApi>::from(ONE))
        .returns(ExpectError(4, "ERR_ALREADY_STAKED_IN_ERA"))
        .run();

    advance(&mut world);
    bond(&mut world, 2 * ONE);

    let history: Vec<EraStake<StaticApi>> = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_general_staker_info(STAKER, DAPP_ADDRESS)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].era, 1);
    assert_eq!(history[0].staked, ONE);
    assert_eq!(history[1].era, 2);
    assert_eq!(history[1].staked, 3 * ONE);

    let latest = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_latest_era_stake(STAKER, DAPP_ADDRESS)
        .returns(ReturnsResult)
        .run();
    assert_eq!(latest.into_option(), Some(history[1].clone()));
}

#[test]
fn test_unwritten_records_are_empty() {
    let mut world = setup();

    let info = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_general_era_info(9u32)
        .returns(ReturnsResult)
        .run();
    assert!(info.into_option().is_none());

    let ledger = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_ledger(STAKER)
        .returns(ReturnsResult)
        .run();
    assert!(ledger.into_option().is_none());

    let latest = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_latest_era_stake(STAKER, DAPP_ADDRESS)
        .returns(ReturnsResult)
        .run();
    assert!(latest.into_option().is_none());

    let points = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_contract_era_stake(DAPP_ADDRESS, 1u32)
        .returns(ReturnsResult)
        .run();
    assert!(points.into_option().is_none());
}

#[test]
fn test_closed_era_keeps_its_rewards() {
    let mut world = setup();

    bond(&mut world, ONE);
    advance(&mut world);
    bond(&mut world, ONE);

    let closed = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_general_era_info(1u32)
        .returns(ReturnsResult)
        .run()
        .into_option()
        .unwrap();
    assert_eq!(closed.rewards.stakers, 3u64);
    assert_eq!(closed.rewards.dapps, 2u64);
    assert_eq!(closed.staked, ONE);

    let open = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_general_era_info(2u32)
        .returns(ReturnsResult)
        .run()
        .into_option()
        .unwrap();
    assert_eq!(open.rewards.stakers, 0u64);
    assert_eq!(open.staked, 2 * ONE);
    assert_eq!(open.locked, 2 * ONE);
}

#[test]
fn test_reward_claim_flips_once() {
    let mut world = setup();

    bond(&mut world, ONE);

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .claim_dapp_reward(DAPP_ADDRESS, 1u32)
        .returns(ExpectError(4, "ERR_ERA_NOT_CLOSED"))
        .run();

    advance(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .claim_dapp_reward(DAPP_ADDRESS, 1u32)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .claim_dapp_reward(DAPP_ADDRESS, 1u32)
        .returns(ExpectError(4, "ERR_ALREADY_CLAIMED"))
        .run();

    let points: ContractStakeInfo<StaticApi> = world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .get_contract_era_stake(DAPP_ADDRESS, 1u32)
        .returns(ReturnsResult)
        .run()
        .into_option()
        .unwrap();
    assert_eq!(points.total, ONE);
    assert_eq!(points.number_of_stakers, 1);
    assert!(points.contract_reward_claimed);
}

#[test]
fn test_registration_rules() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .register(DAPP_ADDRESS)
        .returns(ExpectError(4, "ERR_ALREADY_REGISTERED"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .register(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, "ERR_INVALID_ADDRESS"))
        .run();

    world
        .tx()
        .from(STAKER)
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .bond_and_stake(ENGINE_ADDRESS)
        .egld(BigUint::<StaticApi>::from(ONE))
        .returns(ExpectError(4, "ERR_NOT_REGISTERED"))
        .run();

    world
        .query()
        .to(ENGINE_ADDRESS)
        .typed(MockStakingEngineProxy)
        .is_registered(DAPP_ADDRESS)
        .returns(ExpectValue(true))
        .run();
}
