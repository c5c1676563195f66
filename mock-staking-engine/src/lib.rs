#![no_std]

multiversx_sc::imports!();

pub mod mock_staking_engine_proxy;
pub mod types;

use types::{AccountLedger, ContractStakeInfo, EraInfo, EraRewards, EraStake};

pub const ERR_INVALID_ADDRESS: &str = "ERR_INVALID_ADDRESS";
pub const ERR_ALREADY_REGISTERED: &str = "ERR_ALREADY_REGISTERED";
pub const ERR_NOT_REGISTERED: &str = "ERR_NOT_REGISTERED";
pub const ERR_ZERO_AMOUNT: &str = "ERR_ZERO_AMOUNT";
pub const ERR_ALREADY_STAKED_IN_ERA: &str = "ERR_ALREADY_STAKED_IN_ERA";
pub const ERR_ERA_NOT_CLOSED: &str = "ERR_ERA_NOT_CLOSED";
pub const ERR_NO_STAKE_IN_ERA: &str = "ERR_NO_STAKE_IN_ERA";
pub const ERR_ALREADY_CLAIMED: &str = "ERR_ALREADY_CLAIMED";

const FIRST_ERA: u32 = 1;

// ============================================================
// Contract
// ============================================================

/// In-memory staking engine: the authoritative store a mirror reads from.
///
/// It keeps the engine's storage sparse (nothing is written for an era,
/// staker or contract until something happens to it) and only implements
/// as much write path as is needed to move the ledger: registration,
/// bonding, era transitions and reward claims. Era rewards are supplied
/// by the owner when closing an era.
#[multiversx_sc::contract]
pub trait MockStakingEngine {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, unbonding_period: u32) {
        self.unbonding_period().set(unbonding_period);
        self.current_era().set(FIRST_ERA);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: register
    // ========================================================

    #[endpoint(register)]
    fn register(&self, contract: ManagedAddress) {
        require!(!contract.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            self.registered_contracts().insert(contract.clone()),
            ERR_ALREADY_REGISTERED
        );

        let developer = self.blockchain().get_caller();
        self.register_event(&contract, &developer);
    }

    // ========================================================
    // ENDPOINT: bondAndStake
    // Locks the payment and stakes it on a registered contract.
    // ========================================================

    #[endpoint(bondAndStake)]
    #[payable("EGLD")]
    fn bond_and_stake(&self, contract: ManagedAddress) {
        let staker = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            self.registered_contracts().contains(&contract),
            ERR_NOT_REGISTERED
        );

        let era = self.current_era().get();

        // History entries are never rewritten, so one entry per era at most.
        let history_len = self.staker_history(&staker, &contract).len();
        let previous = if history_len == 0 {
            BigUint::zero()
        } else {
            let last = self.staker_history(&staker, &contract).get(history_len);
            require!(last.era < era, ERR_ALREADY_STAKED_IN_ERA);
            last.staked
        };

        let entry = EraStake {
            staked: &previous + &amount,
            era,
        };
        self.staker_history(&staker, &contract).push(&entry);
        self.locked(&staker).update(|locked| *locked += &amount);

        let mut points = self.contract_points_or_zero(&contract, era);
        points.total += &amount;
        if previous == 0u64 {
            points.number_of_stakers += 1;
        }
        self.contract_era_stake(&contract, era).set(&points);

        let mut info = self.era_info_or_zero(era);
        info.staked += &amount;
        info.locked += &amount;
        self.general_era_info(era).set(&info);

        self.bond_and_stake_event(&staker, &contract, era, &amount);
    }

    // ========================================================
    // ENDPOINT: advanceEra
    // Closes the current era with its rewards and opens the next one,
    // carrying totals and contract stakes forward.
    // ========================================================

    #[only_owner]
    #[endpoint(advanceEra)]
    fn advance_era(&self, staker_reward: BigUint, dapp_reward: BigUint) {
        let closing_era = self.current_era().get();
        let next_era = closing_era + 1;

        let mut closed = self.era_info_or_zero(closing_era);
        closed.rewards = EraRewards {
            stakers: staker_reward,
            dapps: dapp_reward,
        };
        self.general_era_info(closing_era).set(&closed);

        let opened = EraInfo {
            rewards: EraRewards::default(),
            staked: closed.staked.clone(),
            locked: closed.locked.clone(),
        };
        self.general_era_info(next_era).set(&opened);

        for contract in self.registered_contracts().iter() {
            if self.contract_era_stake(&contract, closing_era).is_empty() {
                continue;
            }
            let carried = self.contract_era_stake(&contract, closing_era).get();
            let points = ContractStakeInfo {
                total: carried.total,
                number_of_stakers: carried.number_of_stakers,
                contract_reward_claimed: false,
            };
            self.contract_era_stake(&contract, next_era).set(&points);
        }

        self.current_era().set(next_era);

        let total_reward = &closed.rewards.stakers + &closed.rewards.dapps;
        self.era_advanced_event(closing_era, next_era, &total_reward);
    }

    // ========================================================
    // ENDPOINT: claimDappReward
    // ========================================================

    #[endpoint(claimDappReward)]
    fn claim_dapp_reward(&self, contract: ManagedAddress, era: u32) {
        require!(era < self.current_era().get(), ERR_ERA_NOT_CLOSED);
        require!(
            !self.contract_era_stake(&contract, era).is_empty(),
            ERR_NO_STAKE_IN_ERA
        );

        let mut points = self.contract_era_stake(&contract, era).get();
        require!(!points.contract_reward_claimed, ERR_ALREADY_CLAIMED);
        points.contract_reward_claimed = true;
        self.contract_era_stake(&contract, era).set(&points);

        self.dapp_reward_claimed_event(&contract, era);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn era_info_or_zero(&self, era: u32) -> EraInfo<Self::Api> {
        if self.general_era_info(era).is_empty() {
            return EraInfo::default();
        }
        self.general_era_info(era).get()
    }

    fn contract_points_or_zero(
        &self,
        contract: &ManagedAddress,
        era: u32,
    ) -> ContractStakeInfo<Self::Api> {
        if self.contract_era_stake(contract, era).is_empty() {
            return ContractStakeInfo::default();
        }
        self.contract_era_stake(contract, era).get()
    }

    // ========================================================
    // VIEWS: empty results mean "never written"
    // ========================================================

    #[view(getCurrentEra)]
    fn get_current_era(&self) -> u32 {
        self.current_era().get()
    }

    #[view(getUnbondingPeriod)]
    fn get_unbonding_period(&self) -> u32 {
        self.unbonding_period().get()
    }

    #[view(getGeneralEraInfo)]
    fn get_general_era_info(&self, era: u32) -> OptionalValue<EraInfo<Self::Api>> {
        if self.general_era_info(era).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.general_era_info(era).get())
    }

    #[view(getLedger)]
    fn get_ledger(&self, staker: ManagedAddress) -> OptionalValue<AccountLedger<Self::Api>> {
        if self.locked(&staker).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(AccountLedger {
            locked: self.locked(&staker).get(),
        })
    }

    #[view(getLatestEraStake)]
    fn get_latest_era_stake(
        &self,
        staker: ManagedAddress,
        contract: ManagedAddress,
    ) -> OptionalValue<EraStake<Self::Api>> {
        let len = self.staker_history(&staker, &contract).len();
        if len == 0 {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.staker_history(&staker, &contract).get(len))
    }

    #[view(getGeneralStakerInfo)]
    fn get_general_staker_info(
        &self,
        staker: ManagedAddress,
        contract: ManagedAddress,
    ) -> MultiValueEncoded<EraStake<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for stake in self.staker_history(&staker, &contract).iter() {
            result.push(stake);
        }
        result
    }

    #[view(getContractEraStake)]
    fn get_contract_era_stake(
        &self,
        contract: ManagedAddress,
        era: u32,
    ) -> OptionalValue<ContractStakeInfo<Self::Api>> {
        if self.contract_era_stake(&contract, era).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.contract_era_stake(&contract, era).get())
    }

    #[view(isRegistered)]
    fn is_registered(&self, contract: ManagedAddress) -> bool {
        self.registered_contracts().contains(&contract)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("register")]
    fn register_event(
        &self,
        #[indexed] contract: &ManagedAddress,
        #[indexed] developer: &ManagedAddress,
    );

    #[event("bondAndStake")]
    fn bond_and_stake_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] contract: &ManagedAddress,
        #[indexed] era: u32,
        amount: &BigUint,
    );

    #[event("eraAdvanced")]
    fn era_advanced_event(
        &self,
        #[indexed] closed_era: u32,
        #[indexed] new_era: u32,
        total_reward: &BigUint,
    );

    #[event("dappRewardClaimed")]
    fn dapp_reward_claimed_event(&self, #[indexed] contract: &ManagedAddress, #[indexed] era: u32);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("currentEra")]
    fn current_era(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("unbondingPeriod")]
    fn unbonding_period(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("generalEraInfo")]
    fn general_era_info(&self, era: u32) -> SingleValueMapper<EraInfo<Self::Api>>;

    #[storage_mapper("registeredContracts")]
    fn registered_contracts(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("contractEraStake")]
    fn contract_era_stake(
        &self,
        contract: &ManagedAddress,
        era: u32,
    ) -> SingleValueMapper<ContractStakeInfo<Self::Api>>;

    #[storage_mapper("locked")]
    fn locked(&self, staker: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Append-only: one entry per era, strictly increasing ──

    #[storage_mapper("stakerHistory")]
    fn staker_history(
        &self,
        staker: &ManagedAddress,
        contract: &ManagedAddress,
    ) -> VecMapper<EraStake<Self::Api>>;
}
