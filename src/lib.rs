#![no_std]

multiversx_sc::imports!();

pub mod ledger_query;
pub mod staking_engine_proxy;
pub mod staking_mirror_proxy;
pub mod types;

use ledger_query::ERR_INVALID_IDENTITY;
use types::{ContractStakeInfo, EraInfo};

pub const ERR_INVALID_ENGINE: &str = "ERR_INVALID_ENGINE";

// ============================================================
// Contract
// ============================================================

/// Read-only mirror of a staking engine, bound to one contract.
///
/// Every view is a live pass-through to the engine with no rounding or
/// reinterpretation. The mirror stores nothing but its configuration.
#[multiversx_sc::contract]
pub trait StakingMirror: ledger_query::LedgerQueryModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `bound_contract` defaults to the mirror's own address.
    #[init]
    fn init(&self, staking_engine: ManagedAddress, bound_contract: OptionalValue<ManagedAddress>) {
        require!(!staking_engine.is_zero(), ERR_INVALID_ENGINE);

        let bound_contract = match bound_contract {
            OptionalValue::Some(contract) => contract,
            OptionalValue::None => self.blockchain().get_sc_address(),
        };
        require!(!bound_contract.is_zero(), ERR_INVALID_IDENTITY);

        self.staking_engine().set(&staking_engine);
        self.bound_contract().set(&bound_contract);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS: general ledger
    // ========================================================

    #[view(readCurrentEra)]
    fn read_current_era(&self) -> u32 {
        self.current_era()
    }

    #[view(readUnbondingPeriod)]
    fn read_unbonding_period(&self) -> u32 {
        self.unbonding_period()
    }

    #[view(readEraReward)]
    fn read_era_reward(&self, era: u32) -> BigUint {
        self.era_reward(era)
    }

    #[view(readEraStaked)]
    fn read_era_staked(&self, era: u32) -> BigUint {
        self.era_staked(era)
    }

    #[view(readEraInfo)]
    fn read_era_info(&self, era: u32) -> EraInfo<Self::Api> {
        self.era_info(era)
    }

    #[view(readStakedAmount)]
    fn read_staked_amount(&self, staker: ManagedAddress) -> BigUint {
        self.staked_amount(&staker)
    }

    // ========================================================
    // VIEWS: bound contract
    // ========================================================

    /// Total staked on the bound contract in the current era.
    #[view(readContractStake)]
    fn read_contract_stake(&self) -> BigUint {
        let era = self.current_era();
        self.contract_era_stake(&self.bound_contract().get(), era).total
    }

    #[view(readContractEraStake)]
    fn read_contract_era_stake(&self, era: u32) -> ContractStakeInfo<Self::Api> {
        self.contract_era_stake(&self.bound_contract().get(), era)
    }

    /// Latest stake of `staker` (the caller when omitted) on the bound contract.
    #[view(readStakedAmountOnContract)]
    fn read_staked_amount_on_contract(&self, staker: OptionalValue<ManagedAddress>) -> BigUint {
        let staker = match staker {
            OptionalValue::Some(staker) => staker,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        self.staked_amount_on_contract(&staker, &self.bound_contract().get())
    }

    // ========================================================
    // VIEWS: configuration
    // ========================================================

    #[view(getStakingEngine)]
    fn get_staking_engine(&self) -> ManagedAddress {
        self.staking_engine().get()
    }

    #[view(getBoundContract)]
    fn get_bound_contract(&self) -> ManagedAddress {
        self.bound_contract().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("boundContract")]
    fn bound_contract(&self) -> SingleValueMapper<ManagedAddress>;
}
