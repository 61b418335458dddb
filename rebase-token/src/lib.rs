#![no_std]

multiversx_sc::imports!();

pub mod accounting;
pub mod pausable;
pub mod rebase_token_proxy;

use elastic_common::math;
use median_oracle::median_oracle_proxy;

// ============================================================
// Contract
// ============================================================

/// Elastic-supply ledger.
///
/// Holds frac balances, applies the supply deltas computed by the monetary
/// policy, and pays oracle reporters out of a reward reserve kept on the
/// contract's own balance.
#[multiversx_sc::contract]
pub trait RebaseToken:
    elastic_common::fixed_point::FixedPointModule
    + accounting::AccountingModule
    + pausable::PausableModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, initial_supply: BigUint) {
        require!(
            initial_supply > 0u64 && initial_supply <= elastic_common::max_supply::<Self::Api>(),
            "Invalid initial supply"
        );

        let total_fracs = accounting::genesis_total_fracs(&initial_supply)
            .unwrap_or_else(|err| sc_panic!(err.as_str()));
        let fracs_per_unit = self.safe_div(&total_fracs, &initial_supply);

        let deployer = self.blockchain().get_caller();
        self.total_supply().set(&initial_supply);
        self.total_fracs().set(&total_fracs);
        self.fracs_per_unit().set(&fracs_per_unit);
        self.frac_balance(&deployer).set(&total_fracs);

        self.transfer_event(&ManagedAddress::zero(), &deployer, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: rebase
    // Monetary policy only. Returns the new total supply.
    // ========================================================

    #[endpoint(rebase)]
    fn rebase(
        &self,
        epoch: u64,
        supply_delta: BigInt,
        target_reporters: ManagedVec<ManagedAddress>,
        market_reporters: ManagedVec<ManagedAddress>,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.monetary_policy().get(),
            "Only the monetary policy can rebase"
        );
        self.require_rebase_not_paused();

        let supply = self.total_supply().get();
        let magnitude = supply_delta.magnitude();
        if magnitude == 0u64 {
            self.rebase_event(epoch, &supply);
            return supply;
        }

        let mut new_supply = if math::is_negative(&supply_delta) {
            self.safe_sub(&supply, &magnitude)
        } else {
            self.safe_add(&supply, &magnitude)
        };

        // ── Cap: clamp silently ──
        let max_supply = elastic_common::max_supply::<Self::Api>();
        if new_supply > max_supply {
            new_supply = max_supply;
        }

        let fracs_per_unit = self.safe_div(&self.total_fracs().get(), &new_supply);
        self.fracs_per_unit().set(&fracs_per_unit);
        self.total_supply().set(&new_supply);

        self.pay_rebase_rewards(&target_reporters, &market_reporters);

        self.rebase_event(epoch, &new_supply);
        new_supply
    }

    // ========================================================
    // ERC-20 surface
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, value: BigUint) -> bool {
        self.require_token_not_paused();
        self.require_valid_recipient(&to);

        let caller = self.blockchain().get_caller();
        self.move_units(&caller, &to, &value);
        true
    }

    /// Moves the caller's whole frac balance, rounding dust included.
    #[endpoint(transferAll)]
    fn transfer_all(&self, to: ManagedAddress) -> bool {
        self.require_token_not_paused();
        self.require_valid_recipient(&to);

        let caller = self.blockchain().get_caller();
        let fracs = self.frac_balance(&caller).get();
        let value = self.fracs_to_units(&fracs);
        self.move_fracs(&caller, &to, &fracs);
        self.transfer_event(&caller, &to, &value);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, value: BigUint) -> bool {
        self.require_token_not_paused();
        self.require_valid_recipient(&to);

        let spender = self.blockchain().get_caller();
        let allowed = self.allowances(&from, &spender).get();
        require!(allowed >= value, "Insufficient allowance");
        self.allowances(&from, &spender)
            .set(self.safe_sub(&allowed, &value));

        self.move_units(&from, &to, &value);
        true
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, value: BigUint) -> bool {
        self.require_token_not_paused();

        let owner = self.blockchain().get_caller();
        self.set_allowance(&owner, &spender, &value);
        true
    }

    #[endpoint(increaseAllowance)]
    fn increase_allowance(&self, spender: ManagedAddress, added_value: BigUint) -> bool {
        self.require_token_not_paused();

        let owner = self.blockchain().get_caller();
        let current = self.allowances(&owner, &spender).get();
        let updated = self.safe_add(&current, &added_value);
        self.set_allowance(&owner, &spender, &updated);
        true
    }

    /// Saturates at zero.
    #[endpoint(decreaseAllowance)]
    fn decrease_allowance(&self, spender: ManagedAddress, subtracted_value: BigUint) -> bool {
        self.require_token_not_paused();

        let owner = self.blockchain().get_caller();
        let current = self.allowances(&owner, &spender).get();
        let updated = if subtracted_value >= current {
            BigUint::zero()
        } else {
            self.safe_sub(&current, &subtracted_value)
        };
        self.set_allowance(&owner, &spender, &updated);
        true
    }

    // ========================================================
    // Reward reserve and provider registration
    // ========================================================

    #[endpoint(fundRewardReserve)]
    fn fund_reward_reserve(&self, value: BigUint) {
        self.require_token_not_paused();
        require!(value > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        let reserve = self.reserve_address();
        self.move_units(&caller, &reserve, &value);
    }

    /// Charges the registration fee, then registers the caller on `oracle`.
    #[endpoint(registerProvider)]
    fn register_provider(&self, oracle: ManagedAddress) {
        require!(self.oracles().contains(&oracle), "Unknown oracle");

        let caller = self.blockchain().get_caller();
        let fee = self.provider_registration_fee().get();
        if fee > 0u64 {
            let reserve = self.reserve_address();
            self.move_units(&caller, &reserve, &fee);
        }

        self.tx()
            .to(&oracle)
            .typed(median_oracle_proxy::MedianOracleProxy)
            .add_provider(caller.clone())
            .sync_call();

        self.provider_registered_event(&caller, &oracle, &fee);
    }

    // ========================================================
    // Conversion hooks
    // ========================================================

    #[endpoint(assetSolidification)]
    fn asset_solidification(
        &self,
        holder: ManagedAddress,
        value: BigUint,
        providers: ManagedVec<ManagedAddress>,
    ) {
        let agent = self.require_conversion_agent();
        require!(value > 0u64, "Amount must be positive");

        self.move_units(&holder, &agent, &value);
        self.pay_conversion_rewards(&providers);

        self.asset_solidified_event(&holder, &value);
    }

    #[endpoint(assetLiquidation)]
    fn asset_liquidation(
        &self,
        holder: ManagedAddress,
        value: BigUint,
        providers: ManagedVec<ManagedAddress>,
    ) {
        let agent = self.require_conversion_agent();
        require!(value > 0u64, "Amount must be positive");

        self.move_units(&agent, &holder, &value);
        self.pay_conversion_rewards(&providers);

        self.asset_liquidated_event(&holder, &value);
    }

    // ========================================================
    // Owner configuration
    // ========================================================

    #[only_owner]
    #[endpoint(setMonetaryPolicy)]
    fn set_monetary_policy(&self, monetary_policy: ManagedAddress) {
        require!(!monetary_policy.is_zero(), "Invalid monetary policy");
        self.monetary_policy().set(&monetary_policy);
    }

    #[only_owner]
    #[endpoint(setConversionAgent)]
    fn set_conversion_agent(&self, conversion_agent: ManagedAddress) {
        require!(!conversion_agent.is_zero(), "Invalid conversion agent");
        self.conversion_agent().set(&conversion_agent);
    }

    #[only_owner]
    #[endpoint(setRebaseReward)]
    fn set_rebase_reward(&self, rebase_reward: BigUint) {
        self.rebase_reward().set(&rebase_reward);
    }

    #[only_owner]
    #[endpoint(setConversionReward)]
    fn set_conversion_reward(&self, conversion_reward: BigUint) {
        self.conversion_reward().set(&conversion_reward);
    }

    #[only_owner]
    #[endpoint(setProviderRegistrationFee)]
    fn set_provider_registration_fee(&self, fee: BigUint) {
        self.provider_registration_fee().set(&fee);
    }

    #[only_owner]
    #[endpoint(addOracle)]
    fn add_oracle(&self, oracle: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&oracle),
            "Oracle must be a contract"
        );
        require!(self.oracles().insert(oracle), "Oracle already added");
    }

    #[only_owner]
    #[endpoint(removeOracle)]
    fn remove_oracle(&self, oracle: ManagedAddress) {
        require!(self.oracles().swap_remove(&oracle), "Unknown oracle");
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_conversion_agent(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.conversion_agent().get(),
            "Only the conversion agent can convert"
        );
        caller
    }

    /// Half of the reward to each reporter list, split evenly inside the list.
    fn pay_rebase_rewards(
        &self,
        target_reporters: &ManagedVec<ManagedAddress>,
        market_reporters: &ManagedVec<ManagedAddress>,
    ) {
        let reward = self.rebase_reward().get();
        if reward == 0u64 {
            return;
        }

        let half = self.safe_div(&reward, &BigUint::from(2u64));
        let target_share = self.even_share(&half, target_reporters.len());
        let market_share = self.even_share(&half, market_reporters.len());

        self.pay_from_reserve(&[
            (target_reporters, target_share),
            (market_reporters, market_share),
        ]);
    }

    fn pay_conversion_rewards(&self, providers: &ManagedVec<ManagedAddress>) {
        let reward = self.conversion_reward().get();
        if reward == 0u64 {
            return;
        }

        let share = self.even_share(&reward, providers.len());
        self.pay_from_reserve(&[(providers, share)]);
    }

    fn even_share(&self, total: &BigUint, recipients: usize) -> BigUint {
        if recipients == 0 {
            return BigUint::zero();
        }
        self.safe_div(total, &BigUint::from(recipients as u64))
    }

    /// All or nothing: when the reserve cannot cover every payment,
    /// nobody is paid and `rewardsSkipped` is logged instead.
    fn pay_from_reserve(&self, payouts: &[(&ManagedVec<ManagedAddress>, BigUint)]) {
        let mut required = BigUint::zero();
        for (recipients, share) in payouts.iter() {
            let count = BigUint::from(recipients.len() as u64);
            required = self.safe_add(&required, &self.safe_mul(share, &count));
        }
        if required == 0u64 {
            return;
        }

        let available = self.reserve_balance();
        if available < required {
            self.rewards_skipped_event(&required, &available);
            return;
        }

        let reserve = self.reserve_address();
        for (recipients, share) in payouts.iter() {
            if *share == 0u64 {
                continue;
            }
            for recipient in recipients.iter() {
                self.move_units(&reserve, &recipient, share);
            }
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getOracles)]
    fn get_oracles(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for oracle in self.oracles().iter() {
            result.push(oracle);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("rebase")]
    fn rebase_event(&self, #[indexed] epoch: u64, total_supply: &BigUint);

    #[event("rewardsSkipped")]
    fn rewards_skipped_event(&self, #[indexed] required: &BigUint, available: &BigUint);

    #[event("providerRegistered")]
    fn provider_registered_event(
        &self,
        #[indexed] provider: &ManagedAddress,
        #[indexed] oracle: &ManagedAddress,
        fee: &BigUint,
    );

    #[event("assetSolidified")]
    fn asset_solidified_event(&self, #[indexed] holder: &ManagedAddress, value: &BigUint);

    #[event("assetLiquidated")]
    fn asset_liquidated_event(&self, #[indexed] holder: &ManagedAddress, value: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Roles ──

    #[view(getMonetaryPolicy)]
    #[storage_mapper("monetaryPolicy")]
    fn monetary_policy(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getConversionAgent)]
    #[storage_mapper("conversionAgent")]
    fn conversion_agent(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("oracles")]
    fn oracles(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Rewards and fees ──

    #[view(getRebaseReward)]
    #[storage_mapper("rebaseReward")]
    fn rebase_reward(&self) -> SingleValueMapper<BigUint>;

    #[view(getConversionReward)]
    #[storage_mapper("conversionReward")]
    fn conversion_reward(&self) -> SingleValueMapper<BigUint>;

    #[view(getProviderRegistrationFee)]
    #[storage_mapper("providerRegistrationFee")]
    fn provider_registration_fee(&self) -> SingleValueMapper<BigUint>;
}
