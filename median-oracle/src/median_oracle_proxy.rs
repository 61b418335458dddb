use multiversx_sc::proxy_imports::*;

use crate::types::Report;

pub struct MedianOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MedianOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MedianOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MedianOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct MedianOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> MedianOracleProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        report_expiration_time_sec: Arg0,
        report_delay_sec: Arg1,
        minimum_providers: Arg2,
        ledger_address: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&report_expiration_time_sec)
            .argument(&report_delay_sec)
            .argument(&minimum_providers)
            .argument(&ledger_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> MedianOracleProxyMethods<Env, From, To, Gas>
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

impl<Env, From, To, Gas> MedianOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn push_report<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        payload: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("pushReport")
            .argument(&payload)
            .original_result()
    }

    pub fn purge_reports(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("purgeReports")
            .original_result()
    }

    pub fn get_data(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<BigUint<Env::Api>, bool, ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getData")
            .original_result()
    }

    pub fn add_provider<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        provider: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addProvider")
            .argument(&provider)
            .original_result()
    }

    pub fn add_main_provider<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        provider: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMainProvider")
            .argument(&provider)
            .original_result()
    }

    pub fn remove_main_provider<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        provider: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMainProvider")
            .argument(&provider)
            .original_result()
    }

    pub fn remove_provider<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        provider: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeProvider")
            .argument(&provider)
            .original_result()
    }

    pub fn set_report_expiration_time_sec<Arg0: ProxyArg<u64>>(
        self,
        report_expiration_time_sec: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setReportExpirationTimeSec")
            .argument(&report_expiration_time_sec)
            .original_result()
    }

    pub fn set_report_delay_sec<Arg0: ProxyArg<u64>>(
        self,
        report_delay_sec: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setReportDelaySec")
            .argument(&report_delay_sec)
            .original_result()
    }

    pub fn set_minimum_providers<Arg0: ProxyArg<u64>>(
        self,
        minimum_providers: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMinimumProviders")
            .argument(&minimum_providers)
            .original_result()
    }

    pub fn set_ledger_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ledger_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setLedgerAddress")
            .argument(&ledger_address)
            .original_result()
    }

    pub fn get_providers(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProviders")
            .original_result()
    }

    pub fn get_main_providers(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMainProviders")
            .original_result()
    }

    pub fn providers_size(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("providersSize")
            .original_result()
    }

    pub fn get_provider_reports<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        provider: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue2<Report<Env::Api>, Report<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProviderReports")
            .argument(&provider)
            .original_result()
    }

    pub fn report_expiration_time_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReportExpirationTimeSec")
            .original_result()
    }

    pub fn report_delay_sec(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReportDelaySec")
            .original_result()
    }

    pub fn minimum_providers(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinimumProviders")
            .original_result()
    }

    pub fn ledger_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLedgerAddress")
            .original_result()
    }
}
