//! Message parts
//!
//! A log call carries an ordered list of parts. Literal parts are ready to
//! render; deferred parts hold a closure that is only invoked once the
//! logger's threshold has admitted the event, so expensive message
//! construction costs nothing when the level is disabled.

use super::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub enum Part<'a> {
    Literal(Value),
    Deferred(Box<dyn FnOnce() -> Result<Value> + 'a>),
}

impl<'a> Part<'a> {
    /// Defer building the value until the event is known to be dispatched.
    ///
    /// # Examples
    ///
    /// ```
    /// use analog::Part;
    ///
    /// let part = Part::lazy(|| format!("{} items", 3));
    /// assert_eq!(part.materialize().unwrap(), "3 items");
    /// ```
    pub fn lazy<F, T>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
        T: Into<Value>,
    {
        Part::Deferred(Box::new(move || Ok(f().into())))
    }

    /// Structurally serialize `value`, deferred like [`Part::lazy`].
    ///
    /// Serialization errors surface from the logging call that materializes
    /// the part.
    pub fn serialize<T>(value: &'a T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Part::Deferred(Box::new(move || Ok(serde_json::to_value(value)?)))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Part::Deferred(_))
    }

    /// Resolve the part to its value, running a deferred closure exactly once.
    pub fn materialize(self) -> Result<Value> {
        match self {
            Part::Literal(value) => Ok(value),
            Part::Deferred(f) => f(),
        }
    }
}

impl fmt::Debug for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Part::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<Value> for Part<'_> {
    fn from(value: Value) -> Self {
        Part::Literal(value)
    }
}

impl From<&str> for Part<'_> {
    fn from(value: &str) -> Self {
        Part::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for Part<'_> {
    fn from(value: String) -> Self {
        Part::Literal(Value::String(value))
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Part<'_> {
                fn from(value: $ty) -> Self {
                    Part::Literal(Value::from(value))
                }
            }
        )*
    };
}

impl_literal_from!(bool, i32, i64, u32, u64, f64);

/// Render one materialized part: strings verbatim, everything else as compact JSON.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}
