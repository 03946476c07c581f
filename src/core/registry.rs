//! Logger and appender registry
//!
//! The registry maps names to loggers and to appenders. The logger registered
//! under the empty name is the root logger: any logger created without an
//! explicit level takes the root's level, and starts with a copy of the
//! root's appender list. The root itself is created lazily on first use with
//! level `All` and the appender registered under the empty name.
//!
//! There is no process-wide instance; whoever composes the application owns
//! the `Registry` and hands it (or loggers from it) to the code that logs.

use super::{
    appender::Appender,
    config::{AppenderRef, Config, ConfigFile},
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::Logger,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    appenders: HashMap<String, Arc<dyn Appender>>,
    root: Option<Arc<Logger>>,
}

impl RegistryState {
    fn seeded(default_appender: &Arc<dyn Appender>) -> Self {
        let mut appenders = HashMap::new();
        appenders.insert(String::new(), Arc::clone(default_appender));
        Self {
            loggers: HashMap::new(),
            appenders,
            root: None,
        }
    }

    /// The appender registered under the empty name, as a one-element list.
    fn unnamed_appender(&self) -> Vec<Arc<dyn Appender>> {
        self.appenders.get("").cloned().into_iter().collect()
    }

    fn seed_if_empty(&self, appenders: Vec<Arc<dyn Appender>>) -> Vec<Arc<dyn Appender>> {
        if appenders.is_empty() {
            self.unnamed_appender()
        } else {
            appenders
        }
    }

    fn ensure_root(&mut self) -> Arc<Logger> {
        if let Some(root) = &self.root {
            return Arc::clone(root);
        }
        let root = Arc::new(Logger::new("", LogLevel::All, self.unnamed_appender()));
        self.register(Arc::clone(&root));
        root
    }

    /// Last registration under a name wins.
    fn register(&mut self, logger: Arc<Logger>) {
        if logger.is_root() {
            self.root = Some(Arc::clone(&logger));
        }
        self.loggers.insert(logger.name().to_string(), logger);
    }

    fn resolve(&self, reference: AppenderRef) -> Result<Arc<dyn Appender>> {
        match reference {
            AppenderRef::Instance(appender) => Ok(appender),
            AppenderRef::Named(name) => self
                .appenders
                .get(&name)
                .cloned()
                .ok_or_else(|| LoggerError::unknown_appender(name)),
        }
    }
}

pub struct Registry {
    state: RwLock<RegistryState>,
    default_appender: Arc<dyn Appender>,
}

impl Registry {
    /// A registry whose default appender writes to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_appender(Arc::new(ConsoleAppender::new()))
    }

    /// A registry that seeds `default_appender` under the empty name, now and
    /// on every [`reset`](Registry::reset).
    #[must_use]
    pub fn with_default_appender(default_appender: Arc<dyn Appender>) -> Self {
        Self {
            state: RwLock::new(RegistryState::seeded(&default_appender)),
            default_appender,
        }
    }

    pub fn default_appender(&self) -> Arc<dyn Appender> {
        Arc::clone(&self.default_appender)
    }

    /// Get or create the logger called `name`.
    ///
    /// An existing logger is returned unchanged, whatever `level` is passed.
    /// A new logger takes `level` if given, otherwise the root logger's level,
    /// and a copy of the root logger's current appender list. The root logger
    /// is bootstrapped first if it does not exist yet.
    pub fn get_logger(&self, name: &str, level: Option<LogLevel>) -> Arc<Logger> {
        if let Some(existing) = self.state.read().loggers.get(name) {
            return Arc::clone(existing);
        }

        let mut state = self.state.write();
        // Another thread may have registered it between the two locks.
        if let Some(existing) = state.loggers.get(name) {
            return Arc::clone(existing);
        }

        let root = state.ensure_root();
        if name.is_empty() && level.is_none() {
            return root;
        }

        let level = level.unwrap_or_else(|| root.level());
        let appenders = state.seed_if_empty(root.appenders());
        let logger = Arc::new(Logger::new(name, level, appenders));
        state.register(Arc::clone(&logger));
        logger
    }

    /// The root logger, created at level `All` if needed.
    pub fn root(&self) -> Arc<Logger> {
        self.get_logger("", None)
    }

    /// The root logger; `level` only applies if the root is created by this call.
    pub fn root_with_level(&self, level: LogLevel) -> Arc<Logger> {
        self.get_logger("", Some(level))
    }

    pub fn logger(&self, name: &str) -> Arc<Logger> {
        self.get_logger(name, None)
    }

    pub fn logger_with_level(&self, name: &str, level: LogLevel) -> Arc<Logger> {
        self.get_logger(name, Some(level))
    }

    /// Build an unregistered logger with registry defaults.
    ///
    /// Without a level the root logger's level is used, creating the root
    /// logger if necessary. Without appenders the logger starts with the
    /// appender registered under the empty name.
    pub fn new_logger(
        &self,
        name: impl Into<String>,
        level: Option<LogLevel>,
        appenders: Vec<Arc<dyn Appender>>,
    ) -> Logger {
        let mut state = self.state.write();
        let level = match level {
            Some(level) => level,
            None => state.ensure_root().level(),
        };
        let appenders = state.seed_if_empty(appenders);
        Logger::new(name, level, appenders)
    }

    /// Register the configured appenders, then build and register each
    /// logger in order.
    ///
    /// A logger entry without appenders gets the current root logger's
    /// appenders, or the default appender when there is no root logger yet.
    /// An entry naming an unregistered appender fails with
    /// [`LoggerError::UnknownAppender`]; entries before it stay applied.
    pub fn configure(&self, config: Config) -> Result<()> {
        let mut state = self.state.write();

        for appender in config.appenders {
            state.appenders.insert(appender.name, appender.appender);
        }

        for logger in config.loggers {
            let appenders = if !logger.appenders.is_empty() {
                logger
                    .appenders
                    .into_iter()
                    .map(|reference| state.resolve(reference))
                    .collect::<Result<Vec<_>>>()?
            } else if let Some(root) = &state.root {
                root.appenders()
            } else {
                vec![Arc::clone(&self.default_appender)]
            };
            let appenders = state.seed_if_empty(appenders);
            state.register(Arc::new(Logger::new(logger.name, logger.level, appenders)));
        }
        Ok(())
    }

    /// Load a JSON config file and apply it with [`Registry::configure`].
    pub fn configure_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.configure(ConfigFile::from_path(path)?.into_config())
    }

    pub fn get_appender(&self, name: &str) -> Option<Arc<dyn Appender>> {
        self.state.read().appenders.get(name).cloned()
    }

    /// Register `appender` under `name`, replacing any previous registration.
    pub fn add_appender(&self, name: impl Into<String>, appender: Arc<dyn Appender>) {
        self.state.write().appenders.insert(name.into(), appender);
    }

    pub fn has_logger(&self, name: &str) -> bool {
        self.state.read().loggers.contains_key(name)
    }

    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().loggers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Forget every logger and appender and re-seed the default appender.
    pub fn reset(&self) {
        *self.state.write() = RegistryState::seeded(&self.default_appender);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Registry")
            .field("loggers", &state.loggers.len())
            .field("appenders", &state.appenders.len())
            .field("has_root", &state.root.is_some())
            .finish()
    }
}
