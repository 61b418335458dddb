#![no_std]

multiversx_sc::imports!();

pub mod aggregation;
pub mod median_oracle_proxy;
pub mod types;

use aggregation::{select_report, TieredSample, ValidityWindow};
use types::{recent_index, Report, UNSET_TIMESTAMP};

// ============================================================
// Constants
// ============================================================

/// Upper bound for `reportExpirationTimeSec`: 520 weeks.
const MAX_REPORT_EXPIRATION_TIME: u64 = 520 * 7 * 86_400;

/// `getData` refuses to aggregate below this many registered providers.
const MIN_REGISTERED_PROVIDERS: usize = 2;

// ============================================================
// Contract
// ============================================================

/// Median of time-bounded provider reports.
///
/// Deployed once per feed (target rate, market rate). Providers are added
/// by the ledger contract, promoted to main by the owner, and push reports
/// into a two-slot buffer at their own pace.
#[multiversx_sc::contract]
pub trait MedianOracle: elastic_common::fixed_point::FixedPointModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        report_expiration_time_sec: u64,
        report_delay_sec: u64,
        minimum_providers: u64,
        ledger_address: ManagedAddress,
    ) {
        require!(
            report_expiration_time_sec <= MAX_REPORT_EXPIRATION_TIME,
            "Report expiration time too large"
        );
        require!(minimum_providers > 0, "Minimum providers must be positive");
        require!(!ledger_address.is_zero(), "Invalid ledger address");

        self.report_expiration_time_sec()
            .set(report_expiration_time_sec);
        self.report_delay_sec().set(report_delay_sec);
        self.minimum_providers().set(minimum_providers);
        self.ledger_address().set(&ledger_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: pushReport
    // Overwrites the caller's older slot with a fresh value.
    // ========================================================

    #[endpoint(pushReport)]
    fn push_report(&self, payload: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut reports = self.load_reports(&caller);
        require!(
            reports[0].timestamp > UNSET_TIMESTAMP,
            "Provider not registered"
        );
        require!(payload > 0u64, "Payload must be positive");

        let now = self.blockchain().get_block_timestamp();
        let recent = recent_index(&reports);
        let earliest_next =
            self.safe_add_u64(reports[recent].timestamp, self.report_delay_sec().get());
        require!(earliest_next <= now, "Report delay has not elapsed");

        reports[1 - recent] = Report {
            timestamp: now,
            payload: payload.clone(),
        };
        self.reports(&caller).set(&reports);

        self.report_pushed_event(&caller, now, &payload);
    }

    // ========================================================
    // ENDPOINT: purgeReports
    // Invalidates both slots; the provider stays registered.
    // ========================================================

    #[endpoint(purgeReports)]
    fn purge_reports(&self) {
        let caller = self.blockchain().get_caller();
        let reports = self.load_reports(&caller);
        require!(
            reports[0].timestamp > UNSET_TIMESTAMP,
            "Provider not registered"
        );

        self.reports(&caller)
            .set([Report::purged(), Report::purged()]);

        self.reports_purged_event(&caller);
    }

    // ========================================================
    // ENDPOINT: getData
    // Emits an event per dropped report, hence not a view.
    // ========================================================

    #[endpoint(getData)]
    fn get_data(&self) -> MultiValue3<BigUint, bool, ManagedVec<ManagedAddress>> {
        require!(
            self.providers().len() >= MIN_REGISTERED_PROVIDERS,
            "Not enough providers"
        );
        require!(!self.main_providers().is_empty(), "No main provider");

        let now = self.blockchain().get_block_timestamp();
        let window = ValidityWindow {
            min_valid: self.safe_sub_u64(now, self.report_expiration_time_sec().get()),
            max_valid: self.safe_sub_u64(now, self.report_delay_sec().get()),
        };

        let mut sample = TieredSample::new();
        let mut reporters = ManagedVec::new();

        for provider in self.providers().iter() {
            let reports = self.load_reports(&provider);
            match select_report(&reports, &window) {
                Some(report) => {
                    let is_main = self.main_providers().contains(&provider);
                    sample.record(&report.payload, is_main);
                    reporters.push(provider);
                }
                None => self.report_timestamp_out_of_range_event(&provider),
            }
        }

        let minimum = self.minimum_providers().get();
        if (sample.len() as u64) < minimum || !sample.has_both_tiers() {
            return (BigUint::zero(), false, ManagedVec::new()).into();
        }

        sample.balance_tiers();
        let median = sample
            .median()
            .unwrap_or_else(|err| sc_panic!(err.as_str()));

        (median, true, reporters).into()
    }

    // ========================================================
    // Provider set
    // ========================================================

    /// Registration goes through the ledger, which charges the fee.
    #[endpoint(addProvider)]
    fn add_provider(&self, provider: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.ledger_address().get(),
            "Only the ledger can add providers"
        );
        require!(
            !self.providers().contains(&provider),
            "Provider already registered"
        );

        self.providers().insert(provider.clone());
        self.reports(&provider)
            .set([Report::purged(), Report::unset()]);

        self.provider_added_event(&provider);
    }

    #[only_owner]
    #[endpoint(addMainProvider)]
    fn add_main_provider(&self, provider: ManagedAddress) {
        require!(
            self.providers().contains(&provider),
            "Provider not registered"
        );
        require!(
            self.main_providers().insert(provider.clone()),
            "Already a main provider"
        );

        self.main_provider_added_event(&provider);
    }

    #[only_owner]
    #[endpoint(removeMainProvider)]
    fn remove_main_provider(&self, provider: ManagedAddress) {
        require!(
            self.main_providers().swap_remove(&provider),
            "Not a main provider"
        );

        self.main_provider_removed_event(&provider);
    }

    #[only_owner]
    #[endpoint(removeProvider)]
    fn remove_provider(&self, provider: ManagedAddress) {
        require!(
            self.providers().swap_remove(&provider),
            "Provider not registered"
        );
        self.main_providers().swap_remove(&provider);
        self.reports(&provider).clear();

        self.provider_removed_event(&provider);
    }

    // ========================================================
    // Owner configuration
    // ========================================================

    #[only_owner]
    #[endpoint(setReportExpirationTimeSec)]
    fn set_report_expiration_time_sec(&self, report_expiration_time_sec: u64) {
        require!(
            report_expiration_time_sec <= MAX_REPORT_EXPIRATION_TIME,
            "Report expiration time too large"
        );
        self.report_expiration_time_sec()
            .set(report_expiration_time_sec);
    }

    #[only_owner]
    #[endpoint(setReportDelaySec)]
    fn set_report_delay_sec(&self, report_delay_sec: u64) {
        self.report_delay_sec().set(report_delay_sec);
    }

    #[only_owner]
    #[endpoint(setMinimumProviders)]
    fn set_minimum_providers(&self, minimum_providers: u64) {
        require!(minimum_providers > 0, "Minimum providers must be positive");
        self.minimum_providers().set(minimum_providers);
    }

    #[only_owner]
    #[endpoint(setLedgerAddress)]
    fn set_ledger_address(&self, ledger_address: ManagedAddress) {
        require!(!ledger_address.is_zero(), "Invalid ledger address");
        self.ledger_address().set(&ledger_address);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn load_reports(&self, provider: &ManagedAddress) -> [Report<Self::Api>; 2] {
        let mapper = self.reports(provider);
        if mapper.is_empty() {
            [Report::unset(), Report::unset()]
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProviders)]
    fn get_providers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for provider in self.providers().iter() {
            result.push(provider);
        }
        result
    }

    #[view(getMainProviders)]
    fn get_main_providers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for provider in self.main_providers().iter() {
            result.push(provider);
        }
        result
    }

    #[view(providersSize)]
    fn providers_size(&self) -> u64 {
        self.providers().len() as u64
    }

    #[view(getProviderReports)]
    fn get_provider_reports(
        &self,
        provider: ManagedAddress,
    ) -> MultiValue2<Report<Self::Api>, Report<Self::Api>> {
        let [first, second] = self.load_reports(&provider);
        (first, second).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("providerAdded")]
    fn provider_added_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("providerRemoved")]
    fn provider_removed_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("mainProviderAdded")]
    fn main_provider_added_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("mainProviderRemoved")]
    fn main_provider_removed_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("reportPushed")]
    fn report_pushed_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] timestamp: u64,
        payload: &BigUint,
    );

    #[event("reportsPurged")]
    fn reports_purged_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("reportTimestampOutOfRange")]
    fn report_timestamp_out_of_range_event(&self, #[indexed] provider: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getReportExpirationTimeSec)]
    #[storage_mapper("reportExpirationTimeSec")]
    fn report_expiration_time_sec(&self) -> SingleValueMapper<u64>;

    #[view(getReportDelaySec)]
    #[storage_mapper("reportDelaySec")]
    fn report_delay_sec(&self) -> SingleValueMapper<u64>;

    #[view(getMinimumProviders)]
    #[storage_mapper("minimumProviders")]
    fn minimum_providers(&self) -> SingleValueMapper<u64>;

    #[view(getLedgerAddress)]
    #[storage_mapper("ledgerAddress")]
    fn ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Providers ──

    #[storage_mapper("providers")]
    fn providers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("mainProviders")]
    fn main_providers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("reports")]
    fn reports(&self, provider: &ManagedAddress) -> SingleValueMapper<[Report<Self::Api>; 2]>;
}
