multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Staking engine records, as the mirror decodes them.
//
// The engine stores these sparsely: an era, staker or contract it has
// never written reads back empty. `Default` is the zero record and is the
// only interpretation the mirror gives to an absent entry.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EraRewards<M: ManagedTypeApi> {
    pub stakers: BigUint<M>,
    pub dapps: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for EraRewards<M> {
    fn default() -> Self {
        EraRewards {
            stakers: BigUint::zero(),
            dapps: BigUint::zero(),
        }
    }
}

/// Per-era totals across the whole system. Immutable once the era closes.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EraInfo<M: ManagedTypeApi> {
    pub rewards: EraRewards<M>,
    pub staked: BigUint<M>,
    pub locked: BigUint<M>,
}

impl<M: ManagedTypeApi> EraInfo<M> {
    /// Distributable reward of the era: stakers' share plus dapps' share.
    pub fn total_reward(&self) -> BigUint<M> {
        &self.rewards.stakers + &self.rewards.dapps
    }
}

impl<M: ManagedTypeApi> Default for EraInfo<M> {
    fn default() -> Self {
        EraInfo {
            rewards: EraRewards::default(),
            staked: BigUint::zero(),
            locked: BigUint::zero(),
        }
    }
}

/// A single contract's standing within one era.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ContractStakeInfo<M: ManagedTypeApi> {
    pub total: BigUint<M>,
    pub number_of_stakers: u32,
    /// Flips false -> true at most once per (contract, era).
    pub contract_reward_claimed: bool,
}

impl<M: ManagedTypeApi> Default for ContractStakeInfo<M> {
    fn default() -> Self {
        ContractStakeInfo {
            total: BigUint::zero(),
            number_of_stakers: 0,
            contract_reward_claimed: false,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AccountLedger<M: ManagedTypeApi> {
    pub locked: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for AccountLedger<M> {
    fn default() -> Self {
        AccountLedger {
            locked: BigUint::zero(),
        }
    }
}

/// One entry of a staker's append-only history on a contract:
/// the cumulative amount staked as of `era`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EraStake<M: ManagedTypeApi> {
    pub staked: BigUint<M>,
    pub era: u32,
}

impl<M: ManagedTypeApi> Default for EraStake<M> {
    fn default() -> Self {
        EraStake {
            staked: BigUint::zero(),
            era: 0,
        }
    }
}
