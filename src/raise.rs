//! Bridging from code that reports errors through `Result` with an error type
//! unknown to the caller.
//!
//! Any raised error is erased into an [`anyhow::Error`] at the boundary and
//! converted exactly once into the outcome's error type via
//! [`ErrorInitializing`].
use std::any::type_name;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Debug, Display};

use log::{debug, error};

use crate::Outcome;

/// Error types that can be built from an arbitrary raised error.
///
/// Implementations must succeed for every input. A type that can only
/// represent some errors should use [`narrow`], which fails loudly instead of
/// picking a wrong variant.
///
/// Newtypes around an implementing type can use the derive:
///
/// ```
/// use outcome::{ErrorInitializing, Outcome};
///
/// #[derive(Debug, ErrorInitializing)]
/// struct LoadError(anyhow::Error);
///
/// let loaded: Outcome<u16, LoadError> = Outcome::from_fallible(|| "80x".parse::<u16>());
/// assert!(loaded.is_failure());
/// ```
pub trait ErrorInitializing: Sized {
    fn from_raised(error: anyhow::Error) -> Self;
}

/// Keeps the raised error verbatim.
impl ErrorInitializing for anyhow::Error {
    fn from_raised(error: anyhow::Error) -> Self {
        error
    }
}

impl ErrorInitializing for Box<dyn Error + Send + Sync> {
    fn from_raised(error: anyhow::Error) -> Self {
        error.into()
    }
}

/// For outcomes that can never fail. Reaching this is a contract violation.
impl ErrorInitializing for Infallible {
    fn from_raised(raised: anyhow::Error) -> Self {
        error!("error raised where none can occur: {:#}", raised);
        panic!("error raised into an infallible outcome: {:#}", raised)
    }
}

/// Downcasts a raised error to the concrete type `T`.
///
/// Meant for [`ErrorInitializing`] implementations that only accept errors of
/// one kind. Panics when the raised error is of any other type.
pub fn narrow<T>(raised: anyhow::Error) -> T
where
    T: Display + Debug + Send + Sync + 'static,
{
    match raised.downcast::<T>() {
        Ok(error) => error,
        Err(raised) => {
            error!(
                "raised error [{:#}] can not be narrowed to {}",
                raised,
                type_name::<T>()
            );
            panic!(
                "raised error [{:#}] is not a {}",
                raised,
                type_name::<T>()
            )
        }
    }
}

impl<V, E> Outcome<V, E>
where
    E: ErrorInitializing,
{
    /// Runs `body`, turning a returned error into a failure.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let parsed: Outcome<i32, anyhow::Error> = Outcome::from_fallible(|| "42".parse::<i32>());
    /// assert_eq!(parsed.value(), Some(42));
    /// ```
    pub fn from_fallible<F, X>(body: F) -> Self
    where
        F: FnOnce() -> Result<V, X>,
        X: Into<anyhow::Error>,
    {
        match body() {
            Ok(value) => Outcome::Success(value),
            Err(raised) => Outcome::Failure(convert(raised.into())),
        }
    }

    /// Like [`Outcome::map`] for a transform that can fail. The returned error
    /// becomes the failure; an existing failure passes through without
    /// calling `transform`.
    pub fn try_map<U, F, X>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Result<U, X>,
        X: Into<anyhow::Error>,
    {
        self.flat_map(|value| Outcome::from_fallible(|| transform(value)))
    }
}

fn convert<E: ErrorInitializing>(raised: anyhow::Error) -> E {
    debug!("converting raised error into failure: {}", raised);
    E::from_raised(raised)
}
