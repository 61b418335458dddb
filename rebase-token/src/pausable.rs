multiversx_sc::imports!();

/// Two independent owner switches: one stops rebases, the other stops
/// holder-initiated transfers and approvals.
#[multiversx_sc::module]
pub trait PausableModule {
    #[only_owner]
    #[endpoint(setRebasePaused)]
    fn set_rebase_paused(&self, paused: bool) {
        self.rebase_paused().set(paused);
        self.rebase_paused_event(paused);
    }

    #[only_owner]
    #[endpoint(setTokenPaused)]
    fn set_token_paused(&self, paused: bool) {
        self.token_paused().set(paused);
        self.token_paused_event(paused);
    }

    fn require_rebase_not_paused(&self) {
        require!(!self.rebase_paused().get(), "Rebase is paused");
    }

    fn require_token_not_paused(&self) {
        require!(!self.token_paused().get(), "Token is paused");
    }

    #[event("rebasePaused")]
    fn rebase_paused_event(&self, #[indexed] paused: bool);

    #[event("tokenPaused")]
    fn token_paused_event(&self, #[indexed] paused: bool);

    #[view(isRebasePaused)]
    #[storage_mapper("rebasePaused")]
    fn rebase_paused(&self) -> SingleValueMapper<bool>;

    #[view(isTokenPaused)]
    #[storage_mapper("tokenPaused")]
    fn token_paused(&self) -> SingleValueMapper<bool>;
}
