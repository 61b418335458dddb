use multiversx_sc::proxy_imports::*;

pub struct RebasePolicyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RebasePolicyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RebasePolicyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RebasePolicyProxyMethods { wrapped_tx: tx }
    }
}

pub struct RebasePolicyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> RebasePolicyProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token: Arg0,
        target_oracle: Arg1,
        market_oracle: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&token)
            .argument(&target_oracle)
            .argument(&market_oracle)
            .original_result()
    }
}

impl<Env, From, To, Gas> RebasePolicyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> RebasePolicyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn rebase(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("rebase")
            .original_result()
    }

    pub fn set_deviation_threshold<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        deviation_threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDeviationThreshold")
            .argument(&deviation_threshold)
            .original_result()
    }

    pub fn set_rebase_lag<Arg0: ProxyArg<u64>>(
        self,
        rebase_lag: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRebaseLag")
            .argument(&rebase_lag)
            .original_result()
    }

    pub fn set_rebase_timing_parameters<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        min_rebase_time_interval_sec: Arg0,
        rebase_window_offset_sec: Arg1,
        rebase_window_length_sec: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRebaseTimingParameters")
            .argument(&min_rebase_time_interval_sec)
            .argument(&rebase_window_offset_sec)
            .argument(&rebase_window_length_sec)
            .original_result()
    }

    pub fn set_token<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setToken")
            .argument(&token)
            .original_result()
    }

    pub fn set_target_oracle<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        target_oracle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTargetOracle")
            .argument(&target_oracle)
            .original_result()
    }

    pub fn set_market_oracle<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        market_oracle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMarketOracle")
            .argument(&market_oracle)
            .original_result()
    }

    pub fn in_rebase_window(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("inRebaseWindow")
            .original_result()
    }

    pub fn token(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getToken")
            .original_result()
    }

    pub fn target_oracle(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTargetOracle")
            .original_result()
    }

    pub fn market_oracle(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMarketOracle")
            .original_result()
    }

    pub fn deviation_threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDeviationThreshold")
            .original_result()
    }

    pub fn rebase_lag(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRebaseLag")
            .original_result()
    }

    pub fn min_rebase_time_interval_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinRebaseTimeIntervalSec")
            .original_result()
    }

    pub fn rebase_window_offset_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRebaseWindowOffsetSec")
            .original_result()
    }

    pub fn rebase_window_length_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRebaseWindowLengthSec")
            .original_result()
    }

    pub fn epoch(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEpoch")
            .original_result()
    }

    pub fn last_rebase_timestamp_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastRebaseTimestampSec")
            .original_result()
    }
}
