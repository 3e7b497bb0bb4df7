use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a successful result carrying a `V` or a failure carrying an `E`.
///
/// Outcomes are never mutated. Every combinator consumes `self` and hands back
/// a new value, so a failure can only be changed explicitly by the caller.
///
/// All operations are derived from [`Outcome::analysis`], the single place
/// where the two variants are taken apart.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<V, E> {
    /// Finished successfully with a value.
    Success(V),

    /// Finished with an error.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Wraps `value` as a success.
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    /// Wraps `error` as a failure.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Turns a present value into a success. `or_error` is only called when
    /// `value` is `None`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let port: Outcome<u16, &str> = Outcome::from_optional(None, || "port is not set");
    /// assert_eq!(port, Outcome::failure("port is not set"));
    /// ```
    pub fn from_optional<F>(value: Option<V>, or_error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(or_error()),
        }
    }

    /// Evaluates exactly one of the closures, depending on the variant, and
    /// returns what it produced.
    pub fn analysis<U, S, F>(self, if_success: S, if_failure: F) -> U
    where
        S: FnOnce(V) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(value) => if_success(value),
            Outcome::Failure(error) => if_failure(error),
        }
    }

    pub fn value(self) -> Option<V> {
        self.analysis(Some, |_| None)
    }

    pub fn error_value(self) -> Option<E> {
        self.analysis(|_| None, Some)
    }

    pub fn is_success(&self) -> bool {
        self.as_ref().analysis(|_| true, |_| false)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the payload without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match *self {
            Outcome::Success(ref value) => Outcome::Success(value),
            Outcome::Failure(ref error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value, or the error for the caller to propagate
    /// with `?`.
    pub fn into_result(self) -> Result<V, E> {
        self.analysis(Ok, Err)
    }

    /// Applies `transform` to a success value. Failures pass through.
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        self.analysis(|value| Outcome::Success(transform(value)), Outcome::Failure)
    }

    /// Chains an operation that can fail itself. Failures pass through and
    /// `transform` is not called for them.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn half(n: u32) -> Outcome<u32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).flat_map(half).flat_map(half), half(3));
    /// ```
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        self.analysis(transform, Outcome::Failure)
    }

    /// Applies `transform` to an error. Successes pass through.
    pub fn map_error<E2, F>(self, transform: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.analysis(Outcome::Success, |error| Outcome::Failure(transform(error)))
    }

    pub fn flat_map_error<E2, F>(self, transform: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        self.analysis(Outcome::Success, transform)
    }

    /// Same as `map(on_success).map_error(on_failure)`, in either order.
    pub fn bimap<U, E2, S, F>(self, on_success: S, on_failure: F) -> Outcome<U, E2>
    where
        S: FnOnce(V) -> U,
        F: FnOnce(E) -> E2,
    {
        self.analysis(
            |value| Outcome::Success(on_success(value)),
            |error| Outcome::Failure(on_failure(error)),
        )
    }

    /// Returns the success value or, only for a failure, calls `fallback`.
    pub fn recover<F>(self, fallback: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.analysis(|value| value, |_| fallback())
    }

    /// Keeps a success as is; replaces a failure with whatever `fallback`
    /// produces.
    pub fn recover_with<F>(self, fallback: F) -> Outcome<V, E>
    where
        F: FnOnce() -> Outcome<V, E>,
    {
        self.analysis(Outcome::Success, |_| fallback())
    }

    /// Pairs this success with the one produced by `other`.
    ///
    /// The first failure wins: `other` is never called when `self` is already
    /// a failure.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let pair: Outcome<(i32, &str), ()> = Outcome::success(1).combine(|| Outcome::success("a"));
    /// assert_eq!(pair.value(), Some((1, "a")));
    /// ```
    pub fn combine<V2, F>(self, other: F) -> Outcome<(V, V2), E>
    where
        F: FnOnce() -> Outcome<V2, E>,
    {
        self.analysis(
            |value| other().map(|other_value| (value, other_value)),
            Outcome::Failure,
        )
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<V, E> {
        self.flat_map(|inner| inner)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects success values into `C`. Stops pulling from the iterator at the
/// first failure and returns it.
///
/// ```
/// use outcome::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> = vec![Outcome::success(1), Outcome::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all, Outcome::success(vec![1, 2]));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

impl<V, E> Display for Outcome<V, E>
where
    V: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "success({})", value),
            Outcome::Failure(error) => write!(f, "failure({})", error),
        }
    }
}
