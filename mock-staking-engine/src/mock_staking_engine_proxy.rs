use multiversx_sc::proxy_imports::*;

use crate::types::{AccountLedger, ContractStakeInfo, EraInfo, EraStake};

pub struct MockStakingEngineProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MockStakingEngineProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MockStakingEngineProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MockStakingEngineProxyMethods { wrapped_tx: tx }
    }
}

pub struct MockStakingEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> MockStakingEngineProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<u32>>(
        self,
        unbonding_period: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&unbonding_period)
            .original_result()
    }
}

impl<Env, From, To, Gas> MockStakingEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn register<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contract: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("register")
            .argument(&contract)
            .original_result()
    }

    pub fn bond_and_stake<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contract: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("bondAndStake")
            .argument(&contract)
            .original_result()
    }

    pub fn advance_era<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        staker_reward: Arg0,
        dapp_reward: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("advanceEra")
            .argument(&staker_reward)
            .argument(&dapp_reward)
            .original_result()
    }

    pub fn claim_dapp_reward<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u32>>(
        self,
        contract: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimDappReward")
            .argument(&contract)
            .argument(&era)
            .original_result()
    }

    pub fn get_current_era(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentEra")
            .original_result()
    }

    pub fn get_unbonding_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUnbondingPeriod")
            .original_result()
    }

    pub fn get_general_era_info<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<EraInfo<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGeneralEraInfo")
            .argument(&era)
            .original_result()
    }

    pub fn get_ledger<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<AccountLedger<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLedger")
            .argument(&staker)
            .original_result()
    }

    pub fn get_latest_era_stake<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
        contract: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<EraStake<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLatestEraStake")
            .argument(&staker)
            .argument(&contract)
            .original_result()
    }

    pub fn get_general_staker_info<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
        contract: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, EraStake<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGeneralStakerInfo")
            .argument(&staker)
            .argument(&contract)
            .original_result()
    }

    pub fn get_contract_era_stake<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u32>,
    >(
        self,
        contract: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ContractStakeInfo<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractEraStake")
            .argument(&contract)
            .argument(&era)
            .original_result()
    }

    pub fn is_registered<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contract: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isRegistered")
            .argument(&contract)
            .original_result()
    }
}
