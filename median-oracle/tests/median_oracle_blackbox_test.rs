use median_oracle::median_oracle_proxy::MedianOracleProxy;
use median_oracle::types::Report;
use multiversx_sc_scenario::api::StaticApi;
use multiversx_sc_scenario::imports::*;

const OWNER: TestAddress = TestAddress::new("owner");
const LEDGER: TestAddress = TestAddress::new("ledger");
const MAIN_PROVIDER: TestAddress = TestAddress::new("main-provider");
const PROVIDER_A: TestAddress = TestAddress::new("provider-a");
const PROVIDER_B: TestAddress = TestAddress::new("provider-b");
const PROVIDER_C: TestAddress = TestAddress::new("provider-c");
const OUTSIDER: TestAddress = TestAddress::new("outsider");

const ORACLE: TestSCAddress = TestSCAddress::new("median-oracle");
const CODE_PATH: MxscPath = MxscPath::new("output/median-oracle.mxsc.json");

const BASE: u64 = 1_000_000;
const EXPIRATION: u64 = 3_600;
const DELAY: u64 = 60;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("median-oracle");
    blockchain.register_contract(CODE_PATH, median_oracle::ContractBuilder);
    blockchain
}

fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn setup() -> ScenarioWorld {
    let mut world = world();
    for account in [
        OWNER,
        LEDGER,
        MAIN_PROVIDER,
        PROVIDER_A,
        PROVIDER_B,
        PROVIDER_C,
        OUTSIDER,
    ] {
        world.account(account).nonce(1);
    }
    world.current_block().block_timestamp(BASE);

    world
        .tx()
        .from(OWNER)
        .typed(MedianOracleProxy)
        .init(EXPIRATION, DELAY, 2u64, managed(LEDGER))
        .code(CODE_PATH)
        .new_address(ORACLE)
        .run();

    world
}

fn add_provider(world: &mut ScenarioWorld, provider: TestAddress) {
    world
        .tx()
        .from(LEDGER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_provider(managed(provider))
        .run();
}

fn add_main_provider(world: &mut ScenarioWorld, provider: TestAddress) {
    add_provider(world, provider);
    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_main_provider(managed(provider))
        .run();
}

fn push(world: &mut ScenarioWorld, provider: TestAddress, payload: u64) {
    world
        .tx()
        .from(provider)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .push_report(BigUint::<StaticApi>::from(payload))
        .run();
}

fn get_data(world: &mut ScenarioWorld) -> (u64, bool, usize) {
    let (value, valid, reporters) = world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_data()
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    (value.to_u64().unwrap(), valid, reporters.len())
}

fn at(world: &mut ScenarioWorld, timestamp: u64) {
    world.current_block().block_timestamp(timestamp);
}

/// One main and two regular providers, all reporting at `BASE`.
fn setup_reporting() -> ScenarioWorld {
    let mut world = setup();
    add_main_provider(&mut world, MAIN_PROVIDER);
    add_provider(&mut world, PROVIDER_A);
    add_provider(&mut world, PROVIDER_B);

    push(&mut world, MAIN_PROVIDER, 10);
    push(&mut world, PROVIDER_A, 20);
    push(&mut world, PROVIDER_B, 30);
    world
}

// ============================================================
// Deploy and configuration
// ============================================================

#[test]
fn deploy_stores_configuration() {
    let mut world = setup();

    let expiration = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .report_expiration_time_sec()
        .returns(ReturnsResult)
        .run();
    let minimum = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .minimum_providers()
        .returns(ReturnsResult)
        .run();
    let ledger = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .ledger_address()
        .returns(ReturnsResult)
        .run();

    assert_eq!(expiration, EXPIRATION);
    assert_eq!(minimum, 2);
    assert_eq!(ledger, managed(LEDGER));
}

#[test]
fn deploy_rejects_zero_minimum_providers() {
    let mut world = world();
    world.account(OWNER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(MedianOracleProxy)
        .init(EXPIRATION, DELAY, 0u64, managed(LEDGER))
        .code(CODE_PATH)
        .new_address(ORACLE)
        .returns(ExpectError(4, "Minimum providers must be positive"))
        .run();
}

#[test]
fn expiration_is_capped_at_520_weeks() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .set_report_expiration_time_sec(520u64 * 7 * 86_400 + 1)
        .returns(ExpectError(4, "Report expiration time too large"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .set_report_expiration_time_sec(520u64 * 7 * 86_400)
        .run();
}

#[test]
fn setters_are_owner_only() {
    let mut world = setup();

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .set_report_delay_sec(1u64)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .set_minimum_providers(0u64)
        .returns(ExpectError(4, "Minimum providers must be positive"))
        .run();
}

// ============================================================
// Provider set
// ============================================================

#[test]
fn only_the_ledger_adds_providers() {
    let mut world = setup();

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_provider(managed(PROVIDER_A))
        .returns(ExpectError(4, "Only the ledger can add providers"))
        .run();

    add_provider(&mut world, PROVIDER_A);

    world
        .tx()
        .from(LEDGER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_provider(managed(PROVIDER_A))
        .returns(ExpectError(4, "Provider already registered"))
        .run();

    let (first, second) = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_provider_reports(managed(PROVIDER_A))
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(first, Report::purged());
    assert_eq!(second, Report::unset());
}

#[test]
fn main_provider_must_be_registered_first() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_main_provider(managed(PROVIDER_A))
        .returns(ExpectError(4, "Provider not registered"))
        .run();

    add_main_provider(&mut world, PROVIDER_A);

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .add_main_provider(managed(PROVIDER_A))
        .returns(ExpectError(4, "Already a main provider"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .remove_main_provider(managed(PROVIDER_A))
        .run();

    let main_providers = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_main_providers()
        .returns(ReturnsResult)
        .run();
    assert_eq!(main_providers.into_iter().count(), 0);
}

#[test]
fn removing_a_provider_clears_its_reports() {
    let mut world = setup_reporting();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .remove_provider(managed(MAIN_PROVIDER))
        .run();

    let size = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .providers_size()
        .returns(ReturnsResult)
        .run();
    assert_eq!(size, 2);

    let main_providers = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_main_providers()
        .returns(ReturnsResult)
        .run();
    assert_eq!(main_providers.into_iter().count(), 0);

    let (first, second) = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_provider_reports(managed(MAIN_PROVIDER))
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(first, Report::unset());
    assert_eq!(second, Report::unset());

    // removed providers can no longer report
    at(&mut world, BASE + DELAY);
    world
        .tx()
        .from(MAIN_PROVIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .push_report(BigUint::<StaticApi>::from(11u64))
        .returns(ExpectError(4, "Provider not registered"))
        .run();
}

// ============================================================
// Reporting
// ============================================================

#[test]
fn push_report_preconditions() {
    let mut world = setup();
    add_provider(&mut world, PROVIDER_A);

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .push_report(BigUint::<StaticApi>::from(5u64))
        .returns(ExpectError(4, "Provider not registered"))
        .run();

    world
        .tx()
        .from(PROVIDER_A)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .push_report(BigUint::<StaticApi>::zero())
        .returns(ExpectError(4, "Payload must be positive"))
        .run();

    push(&mut world, PROVIDER_A, 5);

    at(&mut world, BASE + DELAY - 1);
    world
        .tx()
        .from(PROVIDER_A)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .push_report(BigUint::<StaticApi>::from(6u64))
        .returns(ExpectError(4, "Report delay has not elapsed"))
        .run();

    at(&mut world, BASE + DELAY);
    push(&mut world, PROVIDER_A, 6);

    let (first, second) = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_provider_reports(managed(PROVIDER_A))
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(first.timestamp, BASE + DELAY);
    assert_eq!(first.payload, BigUint::<StaticApi>::from(6u64));
    assert_eq!(second.timestamp, BASE);
    assert_eq!(second.payload, BigUint::<StaticApi>::from(5u64));
}

#[test]
fn purge_invalidates_both_slots() {
    let mut world = setup_reporting();

    world
        .tx()
        .from(PROVIDER_A)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .purge_reports()
        .run();

    let (first, second) = world
        .query()
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_provider_reports(managed(PROVIDER_A))
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(first, Report::purged());
    assert_eq!(second, Report::purged());

    // remaining: one main and one regular, still two reports
    at(&mut world, BASE + 100);
    assert_eq!(get_data(&mut world), (30, true, 2));

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .purge_reports()
        .returns(ExpectError(4, "Provider not registered"))
        .run();
}

// ============================================================
// Aggregation
// ============================================================

#[test]
fn get_data_needs_two_providers_and_a_main_one() {
    let mut world = setup();
    add_main_provider(&mut world, MAIN_PROVIDER);

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_data()
        .returns(ExpectError(4, "Not enough providers"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .remove_main_provider(managed(MAIN_PROVIDER))
        .run();
    add_provider(&mut world, PROVIDER_A);

    world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_data()
        .returns(ExpectError(4, "No main provider"))
        .run();
}

#[test]
fn median_with_balanced_tiers() {
    let mut world = setup_reporting();
    at(&mut world, BASE + 100);

    // main 10, regular 20 and 30: already balanced
    assert_eq!(get_data(&mut world), (20, true, 3));
}

#[test]
fn main_value_is_duplicated_when_regulars_outnumber() {
    let mut world = setup();
    add_main_provider(&mut world, MAIN_PROVIDER);
    add_provider(&mut world, PROVIDER_A);
    add_provider(&mut world, PROVIDER_B);
    add_provider(&mut world, PROVIDER_C);

    push(&mut world, MAIN_PROVIDER, 40);
    push(&mut world, PROVIDER_A, 10);
    push(&mut world, PROVIDER_B, 20);
    push(&mut world, PROVIDER_C, 30);

    at(&mut world, BASE + 100);
    // [10, 20, 30, 40, 40]; padding adds no reporter
    assert_eq!(get_data(&mut world), (30, true, 4));
}

#[test]
fn reports_younger_than_the_delay_are_not_used() {
    let mut world = setup_reporting();
    at(&mut world, BASE + DELAY - 1);

    assert_eq!(get_data(&mut world), (0, false, 0));
}

#[test]
fn expired_reports_are_not_used() {
    let mut world = setup_reporting();
    at(&mut world, BASE + EXPIRATION + 1);

    let logs = world
        .tx()
        .from(OUTSIDER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .get_data()
        .returns(ReturnsLogs)
        .run();

    // one staleness log per dropped provider, in registration order
    let dropped: Vec<Vec<u8>> = logs
        .iter()
        .filter(|log| log.topics[0] == b"reportTimestampOutOfRange".to_vec())
        .map(|log| log.topics[1].clone())
        .collect();
    assert_eq!(
        dropped,
        vec![
            MAIN_PROVIDER.to_address().to_vec(),
            PROVIDER_A.to_address().to_vec(),
            PROVIDER_B.to_address().to_vec(),
        ]
    );

    assert_eq!(get_data(&mut world), (0, false, 0));
}

#[test]
fn past_slot_stands_in_for_a_fresh_report() {
    let mut world = setup_reporting();

    at(&mut world, BASE + 100);
    push(&mut world, MAIN_PROVIDER, 50);
    push(&mut world, PROVIDER_A, 60);
    push(&mut world, PROVIDER_B, 70);

    // new reports still inside the delay: the older ones are used
    at(&mut world, BASE + 120);
    assert_eq!(get_data(&mut world), (20, true, 3));

    at(&mut world, BASE + 100 + DELAY);
    assert_eq!(get_data(&mut world), (60, true, 3));
}

#[test]
fn too_few_accepted_reports_is_invalid() {
    let mut world = setup_reporting();
    world
        .tx()
        .from(OWNER)
        .to(ORACLE)
        .typed(MedianOracleProxy)
        .set_minimum_providers(4u64)
        .run();

    at(&mut world, BASE + 100);
    assert_eq!(get_data(&mut world), (0, false, 0));
}

#[test]
fn missing_regular_tier_is_invalid() {
    let mut world = setup();
    add_main_provider(&mut world, MAIN_PROVIDER);
    add_main_provider(&mut world, PROVIDER_A);
    add_provider(&mut world, PROVIDER_B);

    push(&mut world, MAIN_PROVIDER, 10);
    push(&mut world, PROVIDER_A, 20);

    at(&mut world, BASE + 100);
    assert_eq!(get_data(&mut world), (0, false, 0));
}
