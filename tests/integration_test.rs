/// Integration tests for the application layer
mod test_utilities;

use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::time::Duration;
use test_utilities::mocks::*;
use hizzle_updater::prelude::*;

struct Harness {
    remote: Arc<MockRemoteClient>,
    clock: Arc<ManualClock>,
    inventory: Arc<StaticInventory>,
    key_store: Arc<MemoryLicenseKeyStore>,
    cache: Arc<MemoryCacheStore>,
    updater: Updater,
}

fn config() -> UpdaterConfig {
    UpdaterConfig {
        license_api_url: "https://api.test/licenses".to_string(),
        versions_api_url: "https://api.test/versions".to_string(),
        site_url: "https://example.com".to_string(),
        cache_prefix: "hizzle".to_string(),
        request_headers: BTreeMap::new(),
        state_dir: PathBuf::from(".unused"),
        inventory: PathBuf::from("unused.toml"),
    }
}

fn component(identifier: &str, version: &str) -> Component {
    Component::new(identifier.to_string(), String::new(), version.to_string()).unwrap()
}

fn harness(remote: MockRemoteClient, components: Vec<Component>) -> Harness {
    harness_with_key(remote, components, LicenseOptions::default())
}

fn harness_with_key(
    remote: MockRemoteClient,
    components: Vec<Component>,
    options: LicenseOptions,
) -> Harness {
    let remote = Arc::new(remote);
    let clock = Arc::new(ManualClock::new());
    let inventory = Arc::new(StaticInventory::new(components));
    let key_store = Arc::new(MemoryLicenseKeyStore::new(options));
    let cache = Arc::new(MemoryCacheStore::new(clock.clone()));

    let updater = Updater::new(
        &config(),
        Collaborators {
            inventory: inventory.clone(),
            remote: remote.clone(),
            cache: cache.clone(),
            key_store: key_store.clone(),
            clock: clock.clone(),
        },
    );

    Harness {
        remote,
        clock,
        inventory,
        key_store,
        cache,
        updater,
    }
}

fn with_key(key: &str) -> LicenseOptions {
    LicenseOptions {
        license_key: Some(key.to_string()),
        legacy_keys: vec![],
    }
}

fn versions_body() -> serde_json::Value {
    json!({
        "noptin-ads": {
            "version": "1.10.0",
            "download_link": "https://downloads.test/ads.zip",
            "requires_php": "7.4",
            "name": "Ads"
        },
        "noptin-forms": {
            "version": "2.0.0",
            "download_link": "",
            "requires_php": "7.4"
        },
        "noptin-maps": {
            "version": "1.2.3",
            "download_link": "https://downloads.test/maps.zip",
            "requires_php": "7.2"
        }
    })
}

fn installed() -> Vec<Component> {
    vec![
        component("noptin-ads", "1.9.0"),
        component("noptin-forms", "2.0.0-beta"),
        component("noptin-maps", "1.2.3"),
    ]
}

// ============================================================================
// Version check engine
// ============================================================================

#[test]
fn test_empty_inventory_makes_no_calls() {
    let h = harness(MockRemoteClient::new(), vec![]);

    let downloads = h.updater.versions().get_update_data().unwrap();

    assert!(downloads.is_empty());
    assert_eq!(h.remote.total_calls(), 0);
    assert!(h.cache.is_empty());
}

#[test]
fn test_single_batched_request_with_all_identifiers() {
    let h = harness_with_key(
        MockRemoteClient::new().with_versions(versions_body()),
        vec![
            component("noptin-maps", "1.0.0"),
            component("noptin-ads", "1.0.0"),
            component("noptin-ads", "1.0.0"),
        ],
        with_key("KEY-1"),
    );

    let downloads = h.updater.versions().get_update_data().unwrap();

    assert_eq!(h.remote.calls("versions"), 1);
    assert_eq!(downloads.len(), 2);
    match &h.remote.requests()[0] {
        RemoteRequest::Versions {
            license_key,
            website,
            downloads,
            hash,
        } => {
            assert_eq!(license_key.as_deref(), Some("KEY-1"));
            assert_eq!(website, "https://example.com");
            assert_eq!(downloads, "noptin-ads,noptin-maps");
            assert_eq!(hash.len(), 64);
        }
        other => panic!("unexpected request: {:?}", other),
    }
}

#[test]
fn test_matching_fingerprint_makes_zero_calls() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );

    let first = h.updater.versions().get_update_data().unwrap();
    let second = h.updater.versions().get_update_data().unwrap();

    assert_eq!(h.remote.calls("versions"), 1);
    assert_eq!(first, second);
}

#[test]
fn test_inventory_order_does_not_change_fingerprint() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    let mut reversed = installed();
    reversed.reverse();
    h.inventory.replace(reversed).unwrap();
    h.updater.on_inventory_changed().unwrap();

    assert_eq!(h.remote.calls("versions"), 1);
}

#[test]
fn test_new_component_refetches_whole_batch() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        vec![component("noptin-ads", "1.9.0")],
    );
    h.updater.versions().get_update_data().unwrap();

    h.inventory.replace(installed()).unwrap();
    let downloads = h.updater.on_inventory_changed().unwrap();

    assert_eq!(h.remote.calls("versions"), 2);
    match &h.remote.requests()[1] {
        RemoteRequest::Versions { downloads, .. } => {
            assert_eq!(downloads, "noptin-ads,noptin-forms,noptin-maps");
        }
        other => panic!("unexpected request: {:?}", other),
    }
    assert_eq!(downloads.len(), 3);
}

#[test]
fn test_license_change_refetches() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    // Bypass the manager so only the fingerprint can notice the new key
    h.key_store.save(&with_key("KEY-2")).unwrap();
    h.updater.versions().get_update_data().unwrap();

    assert_eq!(h.remote.calls("versions"), 2);
}

#[test]
fn test_per_item_error_is_isolated() {
    let remote = MockRemoteClient::new().with_versions(json!({
        "noptin-ads": {"version": "1.10.0", "download_link": "https://dl/ads.zip", "requires_php": "7.4"},
        "noptin-forms": {"error": "License does not cover this add-on"},
    }));
    let h = harness(
        remote,
        vec![
            component("noptin-ads", "1.9.0"),
            component("noptin-forms", "1.0.0"),
            component("noptin-maps", "1.0.0"),
        ],
    );

    let downloads = h.updater.versions().get_update_data().unwrap();

    let ads = downloads["noptin-ads"].version_info().unwrap();
    assert_eq!(ads.version, "1.10.0");
    assert!(downloads["noptin-forms"].is_error());
    // Missing from the response
    assert!(downloads["noptin-maps"].is_error());

    let entry = h.updater.versions().cached_entry().unwrap();
    assert!(entry.had_errors);

    // Still cached for the long TTL
    h.clock.advance(Duration::from_secs(2 * 60 * 60));
    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 1);
}

#[test]
fn test_empty_array_response_fails_every_identifier_with_long_ttl() {
    let h = harness(MockRemoteClient::new().with_versions(json!([])), installed());

    let downloads = h.updater.versions().get_update_data().unwrap();

    assert_eq!(downloads.len(), 3);
    assert!(downloads.values().all(|download| download.is_error()));
    assert!(h.updater.versions().cached_entry().unwrap().had_errors);

    h.clock.advance(FAILED_CHECK_TTL + Duration::from_secs(1));
    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 1);
}

#[test]
fn test_transport_error_caches_empty_entry_with_short_ttl() {
    let remote = MockRemoteClient::new();
    remote.fail("versions");
    let h = harness(remote, installed());

    let downloads = h.updater.versions().get_update_data().unwrap();
    assert!(downloads.is_empty());

    let entry = h.updater.versions().cached_entry().unwrap();
    assert!(entry.had_errors);
    assert!(entry.downloads.is_empty());

    // Within the short TTL the failure is served from cache
    h.clock.advance(FAILED_CHECK_TTL - Duration::from_secs(1));
    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 1);

    // After it, the check is retried
    h.remote.respond("versions", Ok(versions_body()));
    h.clock.advance(Duration::from_secs(1));
    let downloads = h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 2);
    assert_eq!(downloads.len(), 3);
}

#[test]
fn test_success_entry_expires_after_long_ttl() {
    assert!(FAILED_CHECK_TTL < VERSION_CHECK_TTL);

    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    h.clock.advance(FAILED_CHECK_TTL + Duration::from_secs(1));
    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 1);

    h.clock.advance(VERSION_CHECK_TTL);
    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 2);
}

#[test]
fn test_application_error_is_absorbed() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "versions",
        Err(RemoteError::Application {
            code: "rest_forbidden".to_string(),
            message: "Forbidden".to_string(),
            status: Some(403),
        }),
    );
    let h = harness(remote, installed());

    assert!(h.updater.versions().get_update_data().unwrap().is_empty());
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 0);
}

#[test]
fn test_missing_configuration_is_returned() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "versions",
        Err(RemoteError::MissingConfiguration {
            field: "versions_api_url".to_string(),
        }),
    );
    let h = harness(remote, installed());

    let err = h.updater.versions().get_update_data().unwrap_err();
    assert_eq!(err.code(), "missing_configuration");
    assert!(h.updater.versions().cached_entry().is_none());
}

#[test]
fn test_flush_forces_fresh_call() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    h.updater.versions().flush().unwrap();
    h.updater.versions().get_update_data().unwrap();

    assert_eq!(h.remote.calls("versions"), 2);
}

#[test]
fn test_component_info_lookup() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );

    let info = h.updater.versions().component_info("noptin-ads").unwrap().unwrap();
    let version = info.version_info().unwrap();
    assert_eq!(version.name.as_deref(), Some("Ads"));
    assert!(h.updater.versions().component_info("unknown").unwrap().is_none());
}

// ============================================================================
// Update reconciler
// ============================================================================

#[test]
fn test_update_count_without_check_is_zero_and_offline() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );

    assert_eq!(h.updater.updates().get_update_count().unwrap(), 0);
    assert!(!h.updater.updates().has_update("noptin-ads").unwrap());
    assert!(h.updater.updates().pending_updates().unwrap().is_empty());
    assert_eq!(h.remote.total_calls(), 0);
}

#[test]
fn test_has_update_uses_version_precedence() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    // 1.9.0 -> 1.10.0
    assert!(h.updater.updates().has_update("noptin-ads").unwrap());
    // 2.0.0-beta -> 2.0.0
    assert!(h.updater.updates().has_update("noptin-forms").unwrap());
    // 1.2.3 -> 1.2.3
    assert!(!h.updater.updates().has_update("noptin-maps").unwrap());
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 2);
}

#[test]
fn test_update_count_is_cached_and_reset_by_new_check() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    assert_eq!(h.updater.on_schedule_tick().unwrap(), 2);

    // A cached count survives inventory edits until the version data changes
    h.inventory
        .replace(vec![component("noptin-ads", "1.10.0")])
        .unwrap();
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 2);

    h.updater.on_inventory_changed().unwrap();
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 0);
}

#[test]
fn test_update_count_recomputed_after_ttl() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    assert_eq!(h.updater.on_schedule_tick().unwrap(), 2);

    h.inventory
        .replace(vec![component("noptin-ads", "1.10.0")])
        .unwrap();

    h.clock.advance(UPDATE_COUNT_TTL - Duration::from_secs(1));
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 2);

    // The version data is still live; only the count is recomputed
    h.clock.advance(Duration::from_secs(1));
    assert!(h.updater.versions().cached_entry().is_some());
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 0);
    assert_eq!(h.remote.calls("versions"), 1);
}

#[test]
fn test_pending_updates_carry_entitlement() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    let pending = h.updater.updates().pending_updates().unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].identifier, "noptin-ads");
    assert_eq!(
        pending[0].package.as_deref(),
        Some("https://downloads.test/ads.zip")
    );
    assert_eq!(pending[1].new_version, "2.0.0");
    assert!(pending[1].package.is_none());
}

#[test]
fn test_update_applied_flushes() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.on_schedule_tick().unwrap();

    h.updater.on_update_applied().unwrap();
    assert!(h.updater.versions().cached_entry().is_none());
    assert_eq!(h.updater.updates().get_update_count().unwrap(), 0);
}

#[test]
fn test_check_updates_report() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );

    let report = h.updater.check_updates(false).unwrap();
    assert_eq!(report.update_count, 2);
    assert_eq!(report.statuses.len(), 3);
    assert!(matches!(
        report.statuses[2].state,
        ComponentState::UpToDate { .. }
    ));

    h.updater.check_updates(true).unwrap();
    assert_eq!(h.remote.calls("versions"), 2);
}

// ============================================================================
// License state
// ============================================================================

#[test]
fn test_license_details_are_cached() {
    let h = harness_with_key(
        MockRemoteClient::new()
            .with_license(json!({"license": {"is_active_on_site": true, "date_expires": "2030-01-01"}})),
        installed(),
        with_key("KEY-1"),
    );

    let license = h.updater.licenses().get_license_details(true).unwrap().unwrap();
    assert!(license.is_active_on_site());
    assert_eq!(license.detail_str("date_expires"), Some("2030-01-01"));

    h.updater.licenses().get_license_details(true).unwrap();
    assert_eq!(h.remote.calls("license"), 1);

    h.clock.advance(LICENSE_DETAILS_TTL);
    h.updater.licenses().get_license_details(true).unwrap();
    assert_eq!(h.remote.calls("license"), 2);
}

#[test]
fn test_license_details_offline() {
    let h = harness_with_key(MockRemoteClient::new(), installed(), with_key("KEY-1"));

    let license = h.updater.licenses().get_license_details(false).unwrap().unwrap();
    assert_eq!(license.key(), "KEY-1");
    assert!(!license.is_resolved());
    assert_eq!(h.remote.total_calls(), 0);
}

#[test]
fn test_no_key_means_no_license() {
    let h = harness(MockRemoteClient::new(), installed());
    assert!(h.updater.licenses().get_license_details(true).unwrap().is_none());
    assert_eq!(h.remote.total_calls(), 0);
}

#[test]
fn test_legacy_key_is_used() {
    let h = harness_with_key(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
        LicenseOptions {
            license_key: None,
            legacy_keys: vec!["  ".to_string(), "LEGACY".to_string()],
        },
    );

    assert_eq!(
        h.updater.licenses().get_active_key().unwrap().as_deref(),
        Some("LEGACY")
    );
}

#[test]
fn test_inactive_license_clears_key() {
    let h = harness_with_key(
        MockRemoteClient::new().with_license(json!({"license": {"is_active_on_site": false}})),
        installed(),
        with_key("KEY-1"),
    );

    let details = h.updater.licenses().get_license_details(true).unwrap();

    assert!(details.is_none());
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
}

#[test]
fn test_unknown_license_clears_key_and_errors() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "license",
        Err(RemoteError::Application {
            code: "license_not_found".to_string(),
            message: "Invalid license key".to_string(),
            status: Some(400),
        }),
    );
    let h = harness_with_key(remote, installed(), with_key("KEY-1"));

    let err = h.updater.licenses().get_license_details(true).unwrap_err();

    assert_eq!(err.code(), "license_not_found");
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
}

#[test]
fn test_transport_error_keeps_key() {
    let remote = MockRemoteClient::new();
    remote.fail("license");
    let h = harness_with_key(remote, installed(), with_key("KEY-1"));

    assert!(h.updater.licenses().get_license_details(true).is_err());
    assert_eq!(
        h.updater.licenses().get_active_key().unwrap().as_deref(),
        Some("KEY-1")
    );
}

#[test]
fn test_missing_license_object_is_invalid_license() {
    let h = harness_with_key(
        MockRemoteClient::new().with_license(json!({"success": true})),
        installed(),
        with_key("KEY-1"),
    );

    let err = h.updater.licenses().get_license_details(true).unwrap_err();
    assert_eq!(err.code(), "invalid_license");
}

#[test]
fn test_set_active_key_flushes_version_cache() {
    let h = harness(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
    );
    h.updater.versions().get_update_data().unwrap();

    h.updater.licenses().set_active_key("KEY-9").unwrap();
    assert!(h.updater.versions().cached_entry().is_none());

    h.updater.versions().get_update_data().unwrap();
    assert_eq!(h.remote.calls("versions"), 2);
}

#[test]
fn test_activation_stores_key_and_flushes() {
    let remote = MockRemoteClient::new().with_versions(versions_body());
    remote.respond(
        "license_activate",
        Ok(json!({"license": {"is_active_on_site": true, "title": "Pro"}})),
    );
    let h = harness(remote, installed());
    h.updater.versions().get_update_data().unwrap();

    let outcome = h.updater.activate_license(" KEY-1 ").unwrap();

    assert!(!outcome.is_membership);
    assert_eq!(outcome.license.key(), "KEY-1");
    assert_eq!(
        h.updater.licenses().get_active_key().unwrap().as_deref(),
        Some("KEY-1")
    );
    assert!(h.updater.versions().cached_entry().is_none());

    // Activation response seeds the details cache
    h.updater.licenses().get_license_details(true).unwrap().unwrap();
    assert_eq!(h.remote.calls("license"), 0);
}

#[test]
fn test_membership_activation() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "license_activate",
        Ok(json!({"is_membership": "1", "license": {"is_active_on_site": false}})),
    );
    let h = harness(remote, installed());

    let outcome = h.updater.activate_license("MEMBER").unwrap();
    assert!(outcome.is_membership);
}

#[test]
fn test_activation_rejected_by_service() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "license_activate",
        Err(RemoteError::Application {
            code: "license_expired".to_string(),
            message: "Your license has expired".to_string(),
            status: Some(400),
        }),
    );
    let h = harness(remote, installed());

    let err = h.updater.activate_license("KEY-1").unwrap_err();
    assert_eq!(format!("{}", err), "Your license has expired");
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
}

#[test]
fn test_activation_not_active_is_invalid_license() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "license_activate",
        Ok(json!({"license": {"is_active_on_site": false}})),
    );
    let h = harness(remote, installed());

    let err = h.updater.activate_license("KEY-1").unwrap_err();
    assert_eq!(err.code(), "invalid_license");
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
}

#[test]
fn test_deactivation_clears_key() {
    let h = harness_with_key(
        MockRemoteClient::new().with_versions(versions_body()),
        installed(),
        with_key("KEY-1"),
    );
    h.updater.versions().get_update_data().unwrap();

    h.updater.deactivate_license().unwrap();

    assert_eq!(h.remote.calls("license_deactivate"), 1);
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
    assert!(h.updater.versions().cached_entry().is_none());
}

#[test]
fn test_deactivation_of_unknown_key_still_clears() {
    let remote = MockRemoteClient::new();
    remote.respond(
        "license_deactivate",
        Err(RemoteError::Application {
            code: "rest_not_found".to_string(),
            message: "Not found".to_string(),
            status: Some(404),
        }),
    );
    let h = harness_with_key(remote, installed(), with_key("KEY-1"));

    h.updater.deactivate_license().unwrap();
    assert!(h.updater.licenses().get_active_key().unwrap().is_none());
}

#[test]
fn test_deactivation_transport_error_keeps_key() {
    let remote = MockRemoteClient::new();
    remote.fail("license_deactivate");
    let h = harness_with_key(remote, installed(), with_key("KEY-1"));

    assert!(h.updater.deactivate_license().is_err());
    assert!(h.updater.licenses().get_active_key().unwrap().is_some());
}

#[test]
fn test_deactivation_without_key() {
    let h = harness(MockRemoteClient::new(), installed());
    let err = h.updater.deactivate_license().unwrap_err();
    assert_eq!(err.code(), "no_active_license");
    assert_eq!(h.remote.total_calls(), 0);
}

// ============================================================================
// Shared cache across processes
// ============================================================================

#[test]
fn test_concurrent_engines_sharing_a_cache_converge() {
    let remote = Arc::new(
        MockRemoteClient::new()
            .with_versions(versions_body())
            .with_delay(Duration::from_millis(50)),
    );
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(MemoryCacheStore::new(clock.clone()));

    let make_updater = || {
        Updater::new(
            &config(),
            Collaborators {
                inventory: Arc::new(StaticInventory::new(installed())),
                remote: remote.clone(),
                cache: cache.clone(),
                key_store: Arc::new(MemoryLicenseKeyStore::default()),
                clock: clock.clone(),
            },
        )
    };
    let first = make_updater();
    let second = make_updater();
    let barrier = Barrier::new(2);

    let (a, b) = std::thread::scope(|scope| {
        let a = scope.spawn(|| {
            barrier.wait();
            first.versions().get_update_data().unwrap()
        });
        let b = scope.spawn(|| {
            barrier.wait();
            second.versions().get_update_data().unwrap()
        });
        (a.join().unwrap(), b.join().unwrap())
    });

    // Both may fetch; either write is valid for the fingerprint
    let calls = remote.calls("versions");
    assert!((1..=2).contains(&calls));
    assert_eq!(a, b);

    first.versions().get_update_data().unwrap();
    second.versions().get_update_data().unwrap();
    assert_eq!(remote.calls("versions"), calls);
}

#[test]
fn test_progress_reporter_mock_records_messages() {
    let reporter = MockProgressReporter::new();
    reporter.start_waiting("Checking for updates...");
    reporter.report_completion("done");
    assert_eq!(
        reporter.get_messages(),
        vec!["Waiting: Checking for updates...", "Completed: done"]
    );
}
