#![no_std]

multiversx_sc::imports!();

pub mod rebase_policy_proxy;
pub mod supply_delta;

use median_oracle::median_oracle_proxy;
use rebase_token::rebase_token_proxy;

// ============================================================
// Defaults
// ============================================================

/// 5% expressed with 18 decimals.
const DEFAULT_DEVIATION_THRESHOLD: u64 = 50_000_000_000_000_000;

const DEFAULT_REBASE_LAG: u64 = 30;

/// One rebase per day, in a 15 minute window opening at 20:00 UTC.
const DEFAULT_MIN_REBASE_TIME_INTERVAL_SEC: u64 = 86_400;
const DEFAULT_REBASE_WINDOW_OFFSET_SEC: u64 = 72_000;
const DEFAULT_REBASE_WINDOW_LENGTH_SEC: u64 = 900;

// ============================================================
// Contract
// ============================================================

/// Monetary policy: reads both feeds once per interval and tells the
/// ledger how much to expand or contract.
#[multiversx_sc::contract]
pub trait RebasePolicy: elastic_common::fixed_point::FixedPointModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        token: ManagedAddress,
        target_oracle: ManagedAddress,
        market_oracle: ManagedAddress,
    ) {
        require!(!token.is_zero(), "Invalid token address");
        require!(!target_oracle.is_zero(), "Invalid oracle address");
        require!(!market_oracle.is_zero(), "Invalid oracle address");

        self.token().set(&token);
        self.target_oracle().set(&target_oracle);
        self.market_oracle().set(&market_oracle);

        self.deviation_threshold()
            .set(BigUint::from(DEFAULT_DEVIATION_THRESHOLD));
        self.rebase_lag().set(DEFAULT_REBASE_LAG);
        self.min_rebase_time_interval_sec()
            .set(DEFAULT_MIN_REBASE_TIME_INTERVAL_SEC);
        self.rebase_window_offset_sec()
            .set(DEFAULT_REBASE_WINDOW_OFFSET_SEC);
        self.rebase_window_length_sec()
            .set(DEFAULT_REBASE_WINDOW_LENGTH_SEC);
        self.epoch().set(0u64);
        self.last_rebase_timestamp_sec().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: rebase
    // Permissionless. At most once per interval, inside the window.
    // ========================================================

    #[endpoint(rebase)]
    fn rebase(&self) {
        let now = self.blockchain().get_block_timestamp();

        // ── Gate 1: window ──
        require!(self.in_rebase_window(), "Rebase window is closed");

        // ── Gate 2: interval ──
        let interval = self.min_rebase_time_interval_sec().get();
        let next_allowed = self.safe_add_u64(self.last_rebase_timestamp_sec().get(), interval);
        require!(next_allowed < now, "Rebase interval has not elapsed");

        // Snap to the start of the open window
        let window_start =
            supply_delta::window_start(now, interval, self.rebase_window_offset_sec().get())
                .unwrap_or_else(|err| sc_panic!(err.as_str()));
        self.last_rebase_timestamp_sec().set(window_start);

        let epoch = self.safe_add_u64(self.epoch().get(), 1);
        self.epoch().set(epoch);

        // ── Feeds ──
        let (target_rate, target_valid, target_reporters) =
            self.read_oracle(&self.target_oracle().get());
        require!(target_valid, "Invalid target rate");

        let (mut market_rate, market_valid, market_reporters) =
            self.read_oracle(&self.market_oracle().get());
        require!(market_valid, "Invalid market rate");

        let max_rate = elastic_common::max_rate::<Self::Api>();
        if market_rate > max_rate {
            market_rate = max_rate;
        }

        // ── Supply delta ──
        let token = self.token().get();
        let supply: BigUint = self
            .tx()
            .to(&token)
            .typed(rebase_token_proxy::RebaseTokenProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call();

        let delta = supply_delta::compute_supply_delta(
            &supply,
            &market_rate,
            &target_rate,
            &self.deviation_threshold().get(),
        )
        .and_then(|delta| supply_delta::dampen(&delta, self.rebase_lag().get()))
        .and_then(|delta| supply_delta::clamp_to_max_supply(&delta, &supply))
        .unwrap_or_else(|err| sc_panic!(err.as_str()));

        let new_supply: BigUint = self
            .tx()
            .to(&token)
            .typed(rebase_token_proxy::RebaseTokenProxy)
            .rebase(epoch, delta.clone(), target_reporters, market_reporters)
            .returns(ReturnsResult)
            .sync_call();
        require!(
            new_supply <= elastic_common::max_supply::<Self::Api>(),
            "Supply exceeds maximum"
        );

        self.rebase_event(epoch, &market_rate, &target_rate, &delta, now);
    }

    // ========================================================
    // Owner configuration
    // ========================================================

    #[only_owner]
    #[endpoint(setDeviationThreshold)]
    fn set_deviation_threshold(&self, deviation_threshold: BigUint) {
        self.deviation_threshold().set(&deviation_threshold);
    }

    #[only_owner]
    #[endpoint(setRebaseLag)]
    fn set_rebase_lag(&self, rebase_lag: u64) {
        require!(rebase_lag > 0, "Rebase lag must be positive");
        self.rebase_lag().set(rebase_lag);
    }

    #[only_owner]
    #[endpoint(setRebaseTimingParameters)]
    fn set_rebase_timing_parameters(
        &self,
        min_rebase_time_interval_sec: u64,
        rebase_window_offset_sec: u64,
        rebase_window_length_sec: u64,
    ) {
        require!(
            min_rebase_time_interval_sec > 0,
            "Rebase interval must be positive"
        );
        require!(
            rebase_window_offset_sec < min_rebase_time_interval_sec,
            "Window offset must be below the interval"
        );

        self.min_rebase_time_interval_sec()
            .set(min_rebase_time_interval_sec);
        self.rebase_window_offset_sec().set(rebase_window_offset_sec);
        self.rebase_window_length_sec().set(rebase_window_length_sec);
    }

    #[only_owner]
    #[endpoint(setToken)]
    fn set_token(&self, token: ManagedAddress) {
        require!(!token.is_zero(), "Invalid token address");
        self.token().set(&token);
    }

    #[only_owner]
    #[endpoint(setTargetOracle)]
    fn set_target_oracle(&self, target_oracle: ManagedAddress) {
        require!(!target_oracle.is_zero(), "Invalid oracle address");
        self.target_oracle().set(&target_oracle);
    }

    #[only_owner]
    #[endpoint(setMarketOracle)]
    fn set_market_oracle(&self, market_oracle: ManagedAddress) {
        require!(!market_oracle.is_zero(), "Invalid oracle address");
        self.market_oracle().set(&market_oracle);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn read_oracle(
        &self,
        oracle: &ManagedAddress,
    ) -> (BigUint, bool, ManagedVec<ManagedAddress>) {
        let data: MultiValue3<BigUint, bool, ManagedVec<ManagedAddress>> = self
            .tx()
            .to(oracle)
            .typed(median_oracle_proxy::MedianOracleProxy)
            .get_data()
            .returns(ReturnsResult)
            .sync_call();
        data.into_tuple()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(inRebaseWindow)]
    fn in_rebase_window(&self) -> bool {
        supply_delta::in_rebase_window(
            self.blockchain().get_block_timestamp(),
            self.min_rebase_time_interval_sec().get(),
            self.rebase_window_offset_sec().get(),
            self.rebase_window_length_sec().get(),
        )
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("rebase")]
    fn rebase_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] exchange_rate: &BigUint,
        #[indexed] target_rate: &BigUint,
        #[indexed] supply_delta: &BigInt,
        timestamp: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators ──

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTargetOracle)]
    #[storage_mapper("targetOracle")]
    fn target_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMarketOracle)]
    #[storage_mapper("marketOracle")]
    fn market_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Parameters ──

    #[view(getDeviationThreshold)]
    #[storage_mapper("deviationThreshold")]
    fn deviation_threshold(&self) -> SingleValueMapper<BigUint>;

    #[view(getRebaseLag)]
    #[storage_mapper("rebaseLag")]
    fn rebase_lag(&self) -> SingleValueMapper<u64>;

    #[view(getMinRebaseTimeIntervalSec)]
    #[storage_mapper("minRebaseTimeIntervalSec")]
    fn min_rebase_time_interval_sec(&self) -> SingleValueMapper<u64>;

    #[view(getRebaseWindowOffsetSec)]
    #[storage_mapper("rebaseWindowOffsetSec")]
    fn rebase_window_offset_sec(&self) -> SingleValueMapper<u64>;

    #[view(getRebaseWindowLengthSec)]
    #[storage_mapper("rebaseWindowLengthSec")]
    fn rebase_window_length_sec(&self) -> SingleValueMapper<u64>;

    // ── Epoch state ──

    #[view(getEpoch)]
    #[storage_mapper("epoch")]
    fn epoch(&self) -> SingleValueMapper<u64>;

    #[view(getLastRebaseTimestampSec)]
    #[storage_mapper("lastRebaseTimestampSec")]
    fn last_rebase_timestamp_sec(&self) -> SingleValueMapper<u64>;
}
