multiversx_sc::imports!();

use crate::staking_engine_proxy::StakingEngineProxy;
use crate::types::{AccountLedger, ContractStakeInfo, EraInfo, EraStake};

pub const ERR_INVALID_IDENTITY: &str = "ERR_INVALID_IDENTITY";
pub const ERR_STORE_UNAVAILABLE: &str = "ERR_STORE_UNAVAILABLE";

/// Point-in-time lookups against the authoritative staking engine.
///
/// Every lookup is a single synchronous call to an engine view; the views
/// never write, so a lookup leaves the engine's state untouched. Records
/// the engine has never written come back empty and resolve to their zero
/// value here; nothing is cached between calls.
#[multiversx_sc::module]
pub trait LedgerQueryModule {
    fn current_era(&self) -> u32 {
        self.tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .current_era()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn unbonding_period(&self) -> u32 {
        self.tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .unbonding_period()
            .returns(ReturnsResult)
            .sync_call()
    }

    /// The whole aggregate is fetched in one call, so both reward shares
    /// always come from the same record.
    fn era_info(&self, era: u32) -> EraInfo<Self::Api> {
        let info: OptionalValue<EraInfo<Self::Api>> = self
            .tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .general_era_info(era)
            .returns(ReturnsResult)
            .sync_call();
        info.into_option().unwrap_or_default()
    }

    fn era_reward(&self, era: u32) -> BigUint {
        self.era_info(era).total_reward()
    }

    fn era_staked(&self, era: u32) -> BigUint {
        self.era_info(era).staked
    }

    fn staked_amount(&self, staker: &ManagedAddress) -> BigUint {
        self.require_valid_identity(staker);

        let ledger: OptionalValue<AccountLedger<Self::Api>> = self
            .tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .ledger(staker.clone())
            .returns(ReturnsResult)
            .sync_call();
        ledger.into_option().unwrap_or_default().locked
    }

    /// Last entry of the staker's append-only history on `contract`.
    /// The engine serves it by index, never by walking the history.
    fn staked_amount_on_contract(
        &self,
        staker: &ManagedAddress,
        contract: &ManagedAddress,
    ) -> BigUint {
        self.require_valid_identity(staker);
        self.require_valid_identity(contract);

        let latest: OptionalValue<EraStake<Self::Api>> = self
            .tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .latest_era_stake(staker.clone(), contract.clone())
            .returns(ReturnsResult)
            .sync_call();
        latest.into_option().unwrap_or_default().staked
    }

    fn contract_era_stake(
        &self,
        contract: &ManagedAddress,
        era: u32,
    ) -> ContractStakeInfo<Self::Api> {
        self.require_valid_identity(contract);

        let points: OptionalValue<ContractStakeInfo<Self::Api>> = self
            .tx()
            .to(self.require_staking_engine())
            .typed(StakingEngineProxy)
            .contract_era_stake(contract.clone(), era)
            .returns(ReturnsResult)
            .sync_call();
        points.into_option().unwrap_or_default()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_valid_identity(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_IDENTITY);
    }

    /// An engine address that holds no contract can't answer;
    /// that is reported, never read as zero.
    fn require_staking_engine(&self) -> ManagedAddress {
        require!(!self.staking_engine().is_empty(), ERR_STORE_UNAVAILABLE);
        let engine = self.staking_engine().get();
        require!(
            self.blockchain().is_smart_contract(&engine),
            ERR_STORE_UNAVAILABLE
        );
        engine
    }

    #[storage_mapper("stakingEngine")]
    fn staking_engine(&self) -> SingleValueMapper<ManagedAddress>;
}
