//! End-to-end flow: TOML manifest -> reconciler -> directory provider.

use std::fs;

use group_core::{DependencyEdge, Manifest};
use group_provider::{Error as ProviderError, InMemoryDirectory};
use group_sync::{Error, Reconciler, SyncOptions, SyncStatus};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

const MANIFEST: &str = r#"
[[group]]
name = "wheel"
members = ["alice", "bob"]

[[group]]
name = "admins"
members = "alice"
enforcement = true
"#;

#[test]
fn manifest_drives_a_full_reconcile_pass() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groups.toml");
    fs::write(&path, MANIFEST).unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(
        manifest.dependencies(),
        vec![DependencyEdge::group("wheel"), DependencyEdge::group("admins")]
    );

    let directory = InMemoryDirectory::new()
        .with_group("wheel", ["alice"])
        .with_group("admins", ["alice", "carol"]);
    let reconciler = Reconciler::new(&directory);

    let reports = reconciler
        .reconcile_all(&manifest.groups, &SyncOptions::default())
        .unwrap();

    // wheel: partial, bob added, alice kept.
    assert_eq!(reports[0].status, SyncStatus::Changed);
    assert_eq!(
        directory.members_of("wheel"),
        Some(vec!["alice".to_string(), "bob".to_string()])
    );

    // admins: comprehensive, carol purged.
    assert_eq!(reports[1].status, SyncStatus::Changed);
    assert_eq!(directory.members_of("admins"), Some(vec!["alice".to_string()]));

    // A second pass over the corrected state is a no-op.
    let second = reconciler
        .reconcile_all(&manifest.groups, &SyncOptions::default())
        .unwrap();
    assert!(second.iter().all(|report| report.status == SyncStatus::InSync));
}

#[test]
fn unresolvable_members_never_reach_the_directory() {
    let manifest = Manifest::parse(
        r#"
        [[group]]
        name = "wheel"
        members = "alice,ghost"
        "#,
    )
    .unwrap();

    let directory = InMemoryDirectory::new()
        .with_group("wheel", Vec::<String>::new())
        .with_known_principals(["alice", "bob"]);
    let reconciler = Reconciler::new(&directory);

    let reports = reconciler
        .reconcile_all(&manifest.groups, &SyncOptions::default())
        .unwrap();

    assert_eq!(reports[0].status, SyncStatus::Changed);
    assert_eq!(directory.members_of("wheel"), Some(vec!["alice".to_string()]));
}

#[test]
fn absent_group_dry_runs_as_a_creation_from_empty() {
    let manifest = Manifest::parse(
        r#"
        [[group]]
        name = "wheel"
        members = "alice"
        "#,
    )
    .unwrap();

    // The group does not exist yet; observation reads absent.
    let directory = InMemoryDirectory::new();
    let reconciler = Reconciler::new(&directory);

    let reports = reconciler
        .reconcile_all(&manifest.groups, &SyncOptions { dry_run: true })
        .unwrap();

    assert_eq!(reports[0].status, SyncStatus::WouldChange);
    let change = reports[0].change.as_ref().unwrap();
    assert_eq!(change.to_string(), "absent -> alice");
}

#[test]
fn applying_to_a_missing_group_is_a_reconciliation_failure() {
    // The dependency edge exists precisely so frameworks order group
    // creation first; without it the apply fails and propagates.
    let directory = InMemoryDirectory::new();
    let reconciler = Reconciler::new(&directory);
    let manifest = Manifest::parse("[[group]]\nname = \"wheel\"\nmembers = \"alice\"\n").unwrap();

    let result = reconciler.reconcile_all(&manifest.groups, &SyncOptions::default());
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::GroupNotFound { .. }))
    ));
}

#[test]
fn reports_serialize_for_the_invoking_framework() {
    let directory = InMemoryDirectory::new().with_group("wheel", ["alice"]);
    let reconciler = Reconciler::new(&directory);
    let manifest = Manifest::parse("[[group]]\nname = \"wheel\"\nmembers = \"alice,bob\"\n").unwrap();

    let reports = reconciler
        .reconcile_all(&manifest.groups, &SyncOptions::default())
        .unwrap();

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["group"], "wheel");
    assert_eq!(json[0]["status"], "changed");
    assert_eq!(json[0]["change"]["desired"], "alice,bob");
}
