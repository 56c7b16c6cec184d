//! Registry contract, configuration and errors

use crate::common::*;
use opkit::condition::{equal, EQUAL, NOT_EQUAL};
use opkit::updater::inc;
use opkit::{
    ConfigError, ConvertError, ConverterRegistry, Oper, RegistryConfig, RegistryError,
    CONFIG_FILE_NAME,
};
use tempfile::TempDir;

#[test]
fn test_lookup_returns_registered_converter() {
    init_tracing();
    let registry = ConverterRegistry::new();
    registry.register("sql", EQUAL, |_, oper| format!("f:{}", oper.key()));

    let f = registry.lookup("sql", EQUAL).unwrap();
    assert_eq!(f(EQUAL, &equal("id", 1)), "f:id");
    assert!(registry.lookup("sql", "Unregistered").is_none());
}

#[test]
fn test_reregistration_overwrites() {
    init_tracing();
    let registry = ConverterRegistry::new();
    registry.register("sql", EQUAL, |_, _| "f");
    registry.register("sql", EQUAL, |_, _| "g");

    assert_eq!(registry.convert("sql", &equal("id", 1)).unwrap(), "g");
    assert_eq!(registry.operations("sql"), vec![EQUAL]);
}

#[test]
fn test_backends_are_independent() {
    let registry = ConverterRegistry::new();
    registry.register("sql", EQUAL, |_, _| 1);
    registry.register("kv", EQUAL, |_, _| 2);

    assert_eq!(registry.convert("sql", &equal("a", 0)).unwrap(), 1);
    assert_eq!(registry.convert("kv", &equal("a", 0)).unwrap(), 2);
    assert!(!registry.contains("kv", NOT_EQUAL));
}

#[test]
#[should_panic(expected = "requires a backend name")]
fn test_empty_backend_is_fatal() {
    ConverterRegistry::new().register("", EQUAL, |_, _| ());
}

#[test]
fn test_try_register_returns_error() {
    let registry = ConverterRegistry::new();
    let err = registry.try_register("sql", "", |_, _| ()).err().unwrap();
    assert_eq!(err, RegistryError::EmptyOperation);
    assert!(err.to_string().contains("operation name"));
}

#[test]
fn test_reference_backend_covers_every_constructor() {
    let registry = sql_registry();
    for op in [
        "Equal", "NotEqual", "Less", "LessEqual", "Greater", "GreaterEqual", "In", "NotIn",
        "IsNull", "IsNotNull", "Like", "NotLike", "Between", "NotBetween", "EqualKey",
        "NotEqualKey", "LessKey", "LessEqualKey", "GreaterKey", "GreaterEqualKey", "And", "Or",
        "Set", "Inc", "Dec", "Add", "Sub", "Mul", "Div", "Batch", "Order", "Orders", "Page",
    ] {
        assert!(registry.contains(SQL, op), "missing converter for {}", op);
    }
    assert_eq!(registry.backends(), vec![SQL]);
}

#[test]
fn test_no_converter_error_message() {
    let registry: ConverterRegistry<String> = ConverterRegistry::new();
    let err = registry.convert("sql", &inc("hits")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no converter registered for operation 'Inc' on backend 'sql'"
    );
}

#[test]
fn test_default_backend_from_config_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "default_backend = \"sql\"\nlog_overrides = false\n").unwrap();

    let config = RegistryConfig::from_file(&path).unwrap();
    let registry = ConverterRegistry::with_config(config);
    registry.register("sql", EQUAL, |_, oper| oper.key().len());
    // Overrides are silent with log_overrides = false, but still win
    registry.register("sql", EQUAL, |_, oper| oper.key().len() * 10);

    assert_eq!(registry.convert_default(&equal("abc", 1)).unwrap(), 30);
    assert!(!registry.config().log_overrides);
}

#[test]
fn test_default_config_written_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    RegistryConfig::write_default_if_missing(&path).unwrap();

    let registry: ConverterRegistry<()> =
        ConverterRegistry::with_config(RegistryConfig::from_file(&path).unwrap());
    assert_eq!(
        registry.convert_default(&equal("a", 1)).unwrap_err(),
        ConvertError::NoDefaultBackend
    );
}

#[test]
fn test_bad_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "default_backend = [").unwrap();

    let err = RegistryConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}
