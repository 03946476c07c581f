//! Integration tests for the logger system
//!
//! These tests verify:
//! - Registry defaulting (root bootstrap, level and appender inheritance)
//! - Double gating through logger and appender thresholds
//! - Laziness of deferred parts
//! - Configuration, including config files
//! - Custom formatters

use analog::prelude::*;
use analog::{formatter_fn, AppenderRef};
use std::cell::Cell;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn quiet_registry() -> Registry {
    // Keeps the default appender off the console; nothing reads it.
    Registry::with_default_appender(Arc::new(ConsoleAppender::with_threshold(LogLevel::None)))
}

fn as_dyn(appender: &Arc<MemoryAppender>) -> Arc<dyn Appender> {
    appender.clone()
}

fn log_all_levels(logger: &Logger) {
    let level = logger.level().to_str().to_lowercase();
    logger.trace([Part::lazy(|| format!("{} trace", level))]).unwrap();
    logger.debug([Part::lazy(|| format!("{} debug", level))]).unwrap();
    logger.info([Part::lazy(|| format!("{} info", level))]).unwrap();
    logger.warn([Part::lazy(|| format!("{} warn", level))]).unwrap();
    logger.error([Part::lazy(|| format!("{} error", level))]).unwrap();
    logger.fatal([Part::lazy(|| format!("{} fatal", level))]).unwrap();
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_settings() {
    let registry = quiet_registry();
    assert!(registry.get_appender("").is_some());
    assert_eq!(registry.root().name(), "");
    assert_eq!(registry.root().level(), LogLevel::All);
    assert_eq!(registry.logger("test").name(), "test");
}

#[test]
fn test_child_before_root_defaults_to_all() {
    let registry = quiet_registry();
    registry.reset();
    let child = registry.logger("child");
    assert_eq!(child.level(), LogLevel::All);
    assert!(registry.has_logger(""));
}

#[test]
fn test_root_level_propagates_to_new_loggers() {
    let registry = quiet_registry();
    registry.reset();
    registry.root_with_level(LogLevel::Warn);

    assert_eq!(registry.root().level(), LogLevel::Warn);
    assert_eq!(registry.logger("x").level(), LogLevel::Warn);
    assert_eq!(
        registry.logger_with_level("debug", LogLevel::Debug).level(),
        LogLevel::Debug
    );
}

#[test]
fn test_new_logger_copies_root_appenders() {
    let registry = quiet_registry();
    let root = registry.root_with_level(LogLevel::Debug);
    root.add_appender(Arc::new(MemoryAppender::new()));

    let test = registry.logger("test");
    let expected = registry.root().appenders();
    let actual = test.appenders();
    assert_eq!(actual.len(), expected.len());
    for (a, b) in actual.iter().zip(expected.iter()) {
        assert!(Arc::ptr_eq(a, b));
    }
}

#[test]
fn test_appender_list_is_a_snapshot() {
    let registry = quiet_registry();
    registry.reset();
    let a = Arc::new(MemoryAppender::new());
    let b = Arc::new(MemoryAppender::new());
    registry
        .configure(Config::new().logger(LoggerConfig::new("", LogLevel::All).appender(as_dyn(&a))))
        .unwrap();

    let y = registry.logger("y");
    registry.root().add_appender(as_dyn(&b));

    let appenders = y.appenders();
    assert_eq!(appenders.len(), 1);
    assert!(Arc::ptr_eq(&appenders[0], &as_dyn(&a)));
    assert_eq!(registry.root().appender_count(), 2);
}

#[test]
fn test_idempotent_registration() {
    let registry = quiet_registry();
    let first = registry.logger_with_level("x", LogLevel::Debug);
    let second = registry.logger_with_level("x", LogLevel::Fatal);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.level(), LogLevel::Debug);
    assert!(Arc::ptr_eq(&first, &registry.logger("x")));
}

#[test]
fn test_unknown_appender_is_absent() {
    let registry = quiet_registry();
    assert!(registry.get_appender("nope").is_none());
    registry.add_appender("nope", Arc::new(MemoryAppender::new()));
    assert!(registry.get_appender("nope").is_some());
}

#[test]
fn test_add_appender_overwrites() {
    let registry = quiet_registry();
    let first = Arc::new(MemoryAppender::new());
    let second = Arc::new(MemoryAppender::new());
    registry.add_appender("mem", as_dyn(&first));
    registry.add_appender("mem", as_dyn(&second));
    assert!(Arc::ptr_eq(
        &registry.get_appender("mem").unwrap(),
        &as_dyn(&second)
    ));
}

// ============================================================================
// Levels scenario
// ============================================================================

struct LevelsFixture {
    registry: Registry,
    all: Arc<MemoryAppender>,
    error: Arc<MemoryAppender>,
}

impl LevelsFixture {
    fn new() -> Self {
        let all = Arc::new(MemoryAppender::new());
        let error = Arc::new(MemoryAppender::with_threshold(LogLevel::Error));
        let registry = quiet_registry();
        registry.reset();

        let mut config = Config::new()
            .appender("all", as_dyn(&all))
            .appender("error", as_dyn(&error))
            .logger(
                LoggerConfig::new("", LogLevel::All)
                    .appender("all")
                    .appender("error"),
            );
        for level in LogLevel::EVENT_LEVELS.iter().chain([LogLevel::None].iter()) {
            config = config.logger(LoggerConfig::new(level.to_str().to_lowercase(), *level));
        }
        registry.configure(config).unwrap();

        Self { registry, all, error }
    }

    fn reset_buffers(&self) {
        self.all.reset();
        self.error.reset();
    }
}

fn check_all_levels(logger: &Logger, expected: [bool; 6], off: bool) {
    assert_eq!(logger.is_trace_enabled(), expected[0]);
    assert_eq!(logger.is_debug_enabled(), expected[1]);
    assert_eq!(logger.is_info_enabled(), expected[2]);
    assert_eq!(logger.is_warn_enabled(), expected[3]);
    assert_eq!(logger.is_error_enabled(), expected[4]);
    assert_eq!(logger.is_fatal_enabled(), expected[5]);
    assert_eq!(logger.is_off(), off);
    for (level, enabled) in LogLevel::EVENT_LEVELS.iter().zip(expected) {
        assert_eq!(logger.is_enabled(*level), enabled, "{:?}", level);
    }
}

#[test]
fn test_levels_setup() {
    let fixture = LevelsFixture::new();
    let root = fixture.registry.root();
    assert_eq!(root.name(), "");
    assert_eq!(root.level(), LogLevel::All);
    for level in LogLevel::EVENT_LEVELS {
        let logger = fixture.registry.logger(&level.to_str().to_lowercase());
        assert_eq!(logger.level(), level);
    }

    let appenders = root.appenders();
    assert_eq!(appenders.len(), 2);
    assert!(Arc::ptr_eq(&appenders[0], &as_dyn(&fixture.all)));
    assert!(Arc::ptr_eq(&appenders[1], &as_dyn(&fixture.error)));
}

#[test]
fn test_root_logger_at_all() {
    let fixture = LevelsFixture::new();
    let logger = fixture.registry.root();
    fixture.reset_buffers();
    log_all_levels(&logger);
    check_all_levels(&logger, [true; 6], false);

    let all = fixture.all.buffer();
    assert_eq!(all.len(), 6);
    assert!(all[0].ends_with("Z] [Trace] all trace"));
    assert!(all[1].ends_with("Z] [Debug] all debug"));
    assert!(all[2].ends_with("Z] [Info] all info"));
    assert!(all[3].ends_with("Z] [Warn] all warn"));
    assert!(all[4].ends_with("Z] [Error] all error"));
    assert!(all[5].ends_with("Z] [Fatal] all fatal"));

    let error = fixture.error.buffer();
    assert_eq!(error.len(), 2);
    assert!(error[0].ends_with("Z] [Error] all error"));
    assert!(error[1].ends_with("Z] [Fatal] all fatal"));
}

#[test]
fn test_trace_logger() {
    let fixture = LevelsFixture::new();
    let logger = fixture.registry.logger("trace");
    fixture.reset_buffers();
    log_all_levels(&logger);
    check_all_levels(&logger, [true; 6], false);

    let all = fixture.all.buffer();
    assert_eq!(all.len(), 6);
    assert!(all[0].ends_with("Z] [Trace] [trace] trace trace"));
    assert!(all[5].ends_with("Z] [Fatal] [trace] trace fatal"));
}

#[test]
fn test_info_logger() {
    let fixture = LevelsFixture::new();
    let logger = fixture.registry.logger("info");
    fixture.reset_buffers();
    log_all_levels(&logger);
    check_all_levels(&logger, [false, false, true, true, true, true], false);

    let all = fixture.all.buffer();
    assert_eq!(all.len(), 4);
    assert!(all[0].ends_with("Z] [Info] [info] info info"));
    assert!(all[1].ends_with("Z] [Warn] [info] info warn"));
    assert!(all[2].ends_with("Z] [Error] [info] info error"));
    assert!(all[3].ends_with("Z] [Fatal] [info] info fatal"));
}

#[test]
fn test_fatal_logger() {
    let fixture = LevelsFixture::new();
    let logger = fixture.registry.logger("fatal");
    fixture.reset_buffers();
    log_all_levels(&logger);
    check_all_levels(&logger, [false, false, false, false, false, true], false);

    assert_eq!(fixture.all.len(), 1);
    assert!(fixture.all.buffer()[0].ends_with("Z] [Fatal] [fatal] fatal fatal"));
    assert_eq!(fixture.error.len(), 1);
    assert!(fixture.error.buffer()[0].ends_with("Z] [Fatal] [fatal] fatal fatal"));
}

#[test]
fn test_none_logger() {
    let fixture = LevelsFixture::new();
    let logger = fixture.registry.logger("none");
    fixture.reset_buffers();
    log_all_levels(&logger);
    check_all_levels(&logger, [false; 6], true);

    assert!(fixture.all.is_empty());
    assert!(fixture.error.is_empty());
    assert_eq!(logger.metrics().suppressed_count(), 6);
}

// ============================================================================
// Gating
// ============================================================================

#[test]
fn test_disabled_level_never_evaluates_deferred_part() {
    let registry = quiet_registry();
    let logger = registry.logger_with_level("lazy", LogLevel::Error);
    let calls = Cell::new(0);

    for level in [LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Warn] {
        logger
            .log(
                level,
                [Part::lazy(|| {
                    calls.set(calls.get() + 1);
                    "built"
                })],
            )
            .unwrap();
    }
    assert_eq!(calls.get(), 0);

    logger
        .error([Part::lazy(|| {
            calls.set(calls.get() + 1);
            "built"
        })])
        .unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_shared_appender_filters_per_event() {
    let shared = Arc::new(MemoryAppender::with_threshold(LogLevel::Warn));
    let registry = quiet_registry();
    registry
        .configure(
            Config::new()
                .appender("shared", as_dyn(&shared))
                .logger(LoggerConfig::new("verbose", LogLevel::All).appender("shared"))
                .logger(LoggerConfig::new("strict", LogLevel::Error).appender("shared")),
        )
        .unwrap();

    let verbose = registry.logger("verbose");
    let strict = registry.logger("strict");
    verbose.info(["a"]).unwrap();
    verbose.warn(["b"]).unwrap();
    strict.warn(["c"]).unwrap();
    strict.fatal(["d"]).unwrap();

    let buffer = shared.buffer();
    assert_eq!(buffer.len(), 2);
    assert!(buffer[0].ends_with("[Warn] [verbose] b"));
    assert!(buffer[1].ends_with("[Fatal] [strict] d"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_configure_entry_without_appenders_and_no_root_uses_default() {
    let default_sink = Arc::new(MemoryAppender::new());
    let registry = Registry::with_default_appender(as_dyn(&default_sink));
    registry
        .configure(Config::new().logger(LoggerConfig::new("early", LogLevel::Info)))
        .unwrap();

    let early = registry.logger("early");
    assert_eq!(early.level(), LogLevel::Info);
    early.info(["hello"]).unwrap();
    assert_eq!(default_sink.len(), 1);
}

#[test]
fn test_configure_inline_and_named_appenders() {
    let named = Arc::new(MemoryAppender::new());
    let inline = Arc::new(MemoryAppender::new());
    let registry = quiet_registry();
    registry
        .configure(
            Config::new().appender("named", as_dyn(&named)).logger(
                LoggerConfig::new("mixed", LogLevel::All)
                    .appender("named")
                    .appender(AppenderRef::Instance(as_dyn(&inline))),
            ),
        )
        .unwrap();

    registry.logger("mixed").info(["both"]).unwrap();
    assert_eq!(named.len(), 1);
    assert_eq!(inline.len(), 1);
}

#[test]
fn test_configure_replaces_existing_logger() {
    let registry = quiet_registry();
    let before = registry.logger_with_level("svc", LogLevel::Debug);
    registry
        .configure(Config::new().logger(LoggerConfig::new("svc", LogLevel::Error)))
        .unwrap();
    let after = registry.logger("svc");
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.level(), LogLevel::Error);
}

#[test]
fn test_configure_root_entry_updates_root_pointer() {
    let registry = quiet_registry();
    registry.root();
    registry
        .configure(Config::new().logger(LoggerConfig::new("", LogLevel::Info)))
        .unwrap();
    assert_eq!(registry.root().level(), LogLevel::Info);
    assert_eq!(registry.logger("later").level(), LogLevel::Info);
}

#[test]
fn test_configure_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logging.json");
    fs::write(
        &path,
        r#"{
            "appenders": [
                { "name": "errors", "kind": "memory", "level": "Error" },
                { "name": "quiet", "kind": "console", "level": "None", "single_stream": true }
            ],
            "loggers": [
                { "name": "", "level": "Info", "appenders": ["errors", "quiet"] },
                { "name": "db", "level": "Debug" }
            ]
        }"#,
    )
    .expect("Failed to write config");

    let registry = quiet_registry();
    registry.configure_from_path(&path).unwrap();

    assert_eq!(registry.root().level(), LogLevel::Info);
    let db = registry.logger("db");
    assert_eq!(db.level(), LogLevel::Debug);
    let appenders = db.appenders();
    assert_eq!(appenders.len(), 2);
    assert_eq!(appenders[0].threshold(), LogLevel::Error);
    assert_eq!(appenders[1].name(), "console");
    assert!(Arc::ptr_eq(
        &appenders[0],
        &registry.get_appender("errors").unwrap()
    ));
}

#[test]
fn test_configure_from_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry = quiet_registry();
    let err = registry
        .configure_from_path(temp_dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert!(err.to_string().contains("absent.json"));
}

// ============================================================================
// Formatters
// ============================================================================

#[test]
fn test_custom_formatter() {
    let registry = quiet_registry();
    registry
        .configure(Config::new().logger(LoggerConfig::new("", LogLevel::All).appender(
            AppenderRef::Instance(Arc::new(ConsoleAppender::with_threshold(LogLevel::None))),
        )))
        .unwrap();

    let test_format = formatter_fn(|entry| {
        Ok(format!(
            "Test-{}-{}-{}",
            entry.threshold.rank(),
            entry.level.rank(),
            serde_json::to_string(entry.parts)?
        ))
    });

    let logger = registry.logger("test1");
    let appender = Arc::new(MemoryAppender::with_formatter(test_format.clone()));
    logger.add_appender(as_dyn(&appender));
    logger.debug(["test1"]).unwrap();
    assert_eq!(appender.buffer()[0], r#"Test-0-2-["test1"]"#);

    let logger = registry.logger_with_level("test2", LogLevel::Info);
    let appender = Arc::new(MemoryAppender::with_options(
        AppenderOptions::new()
            .with_threshold(LogLevel::Error)
            .with_formatter(test_format),
    ));
    logger.add_appender(as_dyn(&appender));
    logger.warn(["filtered"]).unwrap();
    logger.error(["test2"]).unwrap();
    assert_eq!(appender.buffer(), vec![r#"Test-3-5-["test2"]"#.to_string()]);
}

#[test]
fn test_default_formatter_renders_structures_as_json() {
    let memory = Arc::new(MemoryAppender::new());
    let registry = Registry::with_default_appender(as_dyn(&memory));

    #[derive(serde::Serialize)]
    struct Job {
        id: u32,
        tags: Vec<&'static str>,
    }
    let job = Job { id: 9, tags: vec!["nightly"] };

    registry
        .logger("jobs")
        .info([Part::from("scheduled"), Part::serialize(&job), Part::from(2.5)])
        .unwrap();
    assert!(memory.buffer()[0].ends_with(r#"[Info] [jobs] scheduled {"id":9,"tags":["nightly"]} 2.5"#));
}
