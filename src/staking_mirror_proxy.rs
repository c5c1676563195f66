use multiversx_sc::proxy_imports::*;

use crate::types::{ContractStakeInfo, EraInfo};

pub struct StakingMirrorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for StakingMirrorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = StakingMirrorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        StakingMirrorProxyMethods { wrapped_tx: tx }
    }
}

pub struct StakingMirrorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> StakingMirrorProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<OptionalValue<ManagedAddress<Env::Api>>>,
    >(
        self,
        staking_engine: Arg0,
        bound_contract: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&staking_engine)
            .argument(&bound_contract)
            .original_result()
    }
}

impl<Env, From, To, Gas> StakingMirrorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn read_current_era(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readCurrentEra")
            .original_result()
    }

    pub fn read_unbonding_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readUnbondingPeriod")
            .original_result()
    }

    pub fn read_era_reward<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readEraReward")
            .argument(&era)
            .original_result()
    }

    pub fn read_era_staked<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readEraStaked")
            .argument(&era)
            .original_result()
    }

    pub fn read_era_info<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EraInfo<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readEraInfo")
            .argument(&era)
            .original_result()
    }

    pub fn read_staked_amount<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readStakedAmount")
            .argument(&staker)
            .original_result()
    }

    pub fn read_contract_stake(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readContractStake")
            .original_result()
    }

    pub fn read_contract_era_stake<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ContractStakeInfo<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readContractEraStake")
            .argument(&era)
            .original_result()
    }

    pub fn read_staked_amount_on_contract<
        Arg0: ProxyArg<OptionalValue<ManagedAddress<Env::Api>>>,
    >(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("readStakedAmountOnContract")
            .argument(&staker)
            .original_result()
    }

    pub fn get_staking_engine(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakingEngine")
            .original_result()
    }

    pub fn get_bound_contract(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBoundContract")
            .original_result()
    }
}
