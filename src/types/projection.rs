use core::iter::FusedIterator;

/// Zero-or-one sequence of success values.
///
/// Produced by the projection combinators ([`success`](crate::combinators::success),
/// [`get_success`](crate::combinators::typed::get_success),
/// [`peek_failure_and_do`](crate::combinators::peek_failure_and_do)). A
/// `Succeeded` outcome projects to one element, a `Failed` one to none, so a
/// stream of outcomes can be `flat_map`ped straight into its success values.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
/// use outcome_rail::combinators::success;
///
/// let emails: Vec<&str> = vec![
///     Outcome::<&str, &str>::succeeded("valid@host"),
///     Outcome::failed("invalid_email"),
/// ]
/// .into_iter()
/// .flat_map(success())
/// .collect();
///
/// assert_eq!(emails, vec!["valid@host"]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection<S> {
    inner: Option<S>,
}

impl<S> Projection<S> {
    #[inline]
    pub(crate) fn single(value: S) -> Self {
        Self { inner: Some(value) }
    }

    #[inline]
    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if the projection holds no value.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Consumes the projection, returning the held value if any.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<S> {
        self.inner
    }
}

impl<S> Iterator for Projection<S> {
    type Item = S;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<S> DoubleEndedIterator for Projection<S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<S> ExactSizeIterator for Projection<S> {}

impl<S> FusedIterator for Projection<S> {}
