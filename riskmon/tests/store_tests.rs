// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon::{AlertLog, SensorId, SensorStore, Severity, StatusTier};
use riskmon_test_utils::fixtures::{catalog_sensors, pressure_beta, temperature_alpha};

fn catalog_store() -> anyhow::Result<SensorStore> {
    Ok(SensorStore::with_sensors(catalog_sensors(), AlertLog::new(10))?)
}

#[test]
fn test_lookup_of_unknown_id_is_not_found() -> anyhow::Result<()> {
    let store = catalog_store()?;

    let error = store.get("S999").unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Sensor not found: S999");
    assert!(!store.contains("S999"));
    Ok(())
}

#[test]
fn test_duplicate_insert_is_rejected() -> anyhow::Result<()> {
    let store = SensorStore::new(AlertLog::new(10));
    store.insert(temperature_alpha())?;

    let error = store.insert(temperature_alpha()).unwrap_err();

    assert!(matches!(error, riskmon::RiskmonError::DuplicateSensor { ref id } if id == "S001"));
    assert_eq!(store.len(), 1);
    Ok(())
}

#[test]
fn test_snapshot_is_in_id_order() -> anyhow::Result<()> {
    let store = SensorStore::new(AlertLog::new(10));
    store.insert(pressure_beta())?;
    store.insert(temperature_alpha())?;

    let ids: Vec<SensorId> = store.snapshot().iter().map(|s| s.id().clone()).collect();

    assert_eq!(ids, vec![SensorId::new("S001"), SensorId::new("S002")]);
    assert_eq!(store.ids(), ids);
    Ok(())
}

#[test]
fn test_update_mutates_shared_state() -> anyhow::Result<()> {
    // Arrange
    let store = catalog_store()?;
    let other = store.clone();

    // Act
    let change = store.update("S001", |sensor| sensor.apply_reading(27.0, "Just now"))?;

    // Assert
    assert_eq!(change.status, StatusTier::Warning);
    let seen = other.get("S001")?;
    assert_eq!(seen.reading(), 27.0);
    assert_eq!(seen.status(), StatusTier::Warning);
    assert_eq!(seen.last_update(), "Just now");
    Ok(())
}

#[test]
fn test_update_of_unknown_id_does_not_run_closure() -> anyhow::Result<()> {
    let store = catalog_store()?;
    let mut ran = false;

    let result = store.update("S999", |_| ran = true);

    assert!(result.is_err());
    assert!(!ran);
    Ok(())
}

#[test]
fn test_alerts_are_filtered_per_sensor() -> anyhow::Result<()> {
    let store = catalog_store()?;
    store.record_alert(SensorId::new("S001"), "first", "2024-01-15 10:00:00", Severity::Warning);
    store.record_alert(SensorId::new("S002"), "second", "2024-01-15 10:01:00", Severity::Danger);
    store.record_alert(SensorId::new("S001"), "third", "2024-01-15 10:02:00", Severity::Danger);

    let for_alpha: Vec<String> = store
        .alerts_for(&SensorId::new("S001"))
        .into_iter()
        .map(|a| a.message)
        .collect();

    assert_eq!(for_alpha, vec!["third", "first"]);
    assert_eq!(store.alerts().len(), 3);
    Ok(())
}
