multiversx_sc::imports!();

use elastic_common::math::{self, MathResult};

/// `totalFracs` for a genesis supply: the largest multiple of it that fits in 256 bits.
/// Keeps `totalFracs / totalSupply` exact at genesis.
pub fn genesis_total_fracs<M: ManagedTypeApi>(initial_supply: &BigUint<M>) -> MathResult<BigUint<M>> {
    let max = math::max_uint256::<M>();
    let dust = math::rem(&max, initial_supply)?;
    math::sub(&max, &dust)
}

/// Frac ledger shared by every balance-moving endpoint.
///
/// Balances are held in fracs; one external unit is worth `fracsPerUnit`
/// fracs. A rebase only changes `fracsPerUnit`, so every holder scales
/// proportionally while transfers move an exact number of units.
#[multiversx_sc::module]
pub trait AccountingModule: elastic_common::fixed_point::FixedPointModule {
    fn units_to_fracs(&self, value: &BigUint) -> BigUint {
        self.safe_mul(value, &self.fracs_per_unit().get())
    }

    fn fracs_to_units(&self, fracs: &BigUint) -> BigUint {
        self.safe_div(fracs, &self.fracs_per_unit().get())
    }

    /// The reward reserve is the token contract's own balance.
    fn reserve_address(&self) -> ManagedAddress {
        self.blockchain().get_sc_address()
    }

    fn reserve_balance(&self) -> BigUint {
        self.fracs_to_units(&self.frac_balance(&self.reserve_address()).get())
    }

    /// Moves exactly `value` external units and logs the transfer.
    fn move_units(&self, from: &ManagedAddress, to: &ManagedAddress, value: &BigUint) {
        require!(
            *value <= self.fracs_to_units(&self.frac_balance(from).get()),
            "Insufficient balance"
        );
        let fracs = self.units_to_fracs(value);
        self.move_fracs(from, to, &fracs);
        self.transfer_event(from, to, value);
    }

    fn move_fracs(&self, from: &ManagedAddress, to: &ManagedAddress, fracs: &BigUint) {
        let from_balance = self.frac_balance(from).get();
        require!(from_balance >= *fracs, "Insufficient balance");
        self.frac_balance(from)
            .set(self.safe_sub(&from_balance, fracs));

        let to_balance = self.frac_balance(to).get();
        self.frac_balance(to).set(self.safe_add(&to_balance, fracs));
    }

    fn require_valid_recipient(&self, to: &ManagedAddress) {
        require!(
            !to.is_zero() && *to != self.blockchain().get_sc_address(),
            "Invalid recipient"
        );
    }

    fn set_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, value: &BigUint) {
        self.allowances(owner, spender).set(value);
        self.approval_event(owner, spender, value);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(totalSupply)]
    fn total_supply_view(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.fracs_to_units(&self.frac_balance(&account).get())
    }

    #[view(allowance)]
    fn allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowances(&owner, &spender).get()
    }

    #[view(getFracsPerUnit)]
    fn get_fracs_per_unit(&self) -> BigUint {
        self.fracs_per_unit().get()
    }

    #[view(getTotalFracs)]
    fn get_total_fracs(&self) -> BigUint {
        self.total_fracs().get()
    }

    #[view(getRewardReserve)]
    fn get_reward_reserve(&self) -> BigUint {
        self.reserve_balance()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        value: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        value: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalFracs")]
    fn total_fracs(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("fracsPerUnit")]
    fn fracs_per_unit(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("fracBalance")]
    fn frac_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
