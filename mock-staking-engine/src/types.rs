multiversx_sc::imports!();
multiversx_sc::derive_imports!();

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

/// System-wide totals of one era. `rewards` is written once, when the
/// era closes.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EraInfo<M: ManagedTypeApi> {
    pub rewards: EraRewards<M>,
    pub staked: BigUint<M>,
    pub locked: BigUint<M>,
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

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ContractStakeInfo<M: ManagedTypeApi> {
    pub total: BigUint<M>,
    pub number_of_stakers: u32,
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

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EraStake<M: ManagedTypeApi> {
    pub staked: BigUint<M>,
    pub era: u32,
}
