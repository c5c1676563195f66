use multiversx_sc::proxy_imports::*;

use crate::types::{AccountLedger, ContractStakeInfo, EraInfo, EraStake};

pub struct StakingEngineProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for StakingEngineProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = StakingEngineProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        StakingEngineProxyMethods { wrapped_tx: tx }
    }
}

pub struct StakingEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> StakingEngineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn current_era(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentEra")
            .original_result()
    }

    pub fn unbonding_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUnbondingPeriod")
            .original_result()
    }

    pub fn general_era_info<Arg0: ProxyArg<u32>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<EraInfo<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGeneralEraInfo")
            .argument(&era)
            .original_result()
    }

    pub fn ledger<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<AccountLedger<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLedger")
            .argument(&staker)
            .original_result()
    }

    pub fn latest_era_stake<
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

    pub fn contract_era_stake<
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
}
