use pf_core::UnitSystem;
use pf_engine::{PartialInputs, Rounding};
use pf_project::{ProjectError, ValidationError, load_json, load_yaml, save_json, save_yaml};
use pf_project::schema::*;

#[test]
fn roundtrip_yaml_reference_scenario() {
    let scenario = Scenario::mica_creek();

    let path = std::env::temp_dir().join("pf_project_roundtrip_mica.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_partial_imperial_scenario() {
    let scenario = Scenario {
        description: Some("half filled".to_string()),
        units: UnitSystem::Imperial,
        rounding: Rounding::Legacy,
        ..Scenario::new(
            "Partial",
            PartialInputs {
                runoff: Some(1.1),
                curve_number: Some(78.0),
                ..PartialInputs::default()
            },
        )
    };

    let path = std::env::temp_dir().join("pf_project_roundtrip_partial.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn absent_fields_are_not_written() {
    let scenario = Scenario::new(
        "Sparse",
        PartialInputs {
            area: Some(12.0),
            ..PartialInputs::default()
        },
    );
    let yaml = serde_yaml::to_string(&scenario).unwrap();
    assert!(yaml.contains("A: 12"));
    assert!(!yaml.contains("Tc"));
    assert!(!yaml.contains("description"));
}

#[test]
fn unsupported_version_is_rejected_on_load() {
    let path = std::env::temp_dir().join("pf_project_future_version.yaml");
    std::fs::write(&path, "version: 7\nname: From the future\n").unwrap();

    match load_yaml(&path) {
        Err(ProjectError::Validation(ValidationError::UnsupportedVersion { version })) => {
            assert_eq!(version, 7);
        }
        other => panic!("expected unsupported version, got {other:?}"),
    }
}

#[test]
fn invalid_scenario_is_not_saved() {
    let scenario = Scenario {
        name: String::new(),
        ..Scenario::mica_creek()
    };
    let path = std::env::temp_dir().join("pf_project_unsaved.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}
