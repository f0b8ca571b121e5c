//! Human-readable dumps of a sequence's contents.
//!
//! Presentation only. A [`Dump`] borrows the sequence and writes
//! `[e0, e1, ...]` through a caller-supplied element formatter.

use std::fmt;

use crate::sequence::Sequence;

/// `Display` adapter returned by [`Sequence::dump_with`] and
/// [`Sequence::dump`].
pub struct Dump<'a, T, F> {
    elements: &'a [T],
    format_element: F,
}

impl<T, F> fmt::Display for Dump<'_, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            (self.format_element)(element, f)?;
        }
        f.write_str("]")
    }
}

/// Element formatter signature used by [`Sequence::dump`].
pub type FormatFn<T> = fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result;

/// Default element formatter: the handle's address as `<0x...>`.
fn format_address<T: fmt::Pointer>(element: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("<")?;
    fmt::Pointer::fmt(element, f)?;
    f.write_str(">")
}

impl<T> Sequence<T> {
    /// Format every element with `format_element`.
    ///
    /// ```
    /// use shiftseq::Sequence;
    ///
    /// let seq: Sequence<i64> = [1, 2, 3].into_iter().collect();
    /// let text = seq.dump_with(|v, f| write!(f, "{v}")).to_string();
    /// assert_eq!(text, "[1, 2, 3]");
    /// ```
    pub fn dump_with<F>(&self, format_element: F) -> Dump<'_, T, F>
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        Dump {
            elements: &self.storage,
            format_element,
        }
    }
}

impl<T: fmt::Pointer> Sequence<T> {
    /// Format every element as its raw address.
    pub fn dump(&self) -> Dump<'_, T, FormatFn<T>> {
        self.dump_with(format_address::<T> as FormatFn<T>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_with_custom_formatter() {
        let seq: Sequence<i64> = [4, 5, 6].into_iter().collect();
        let text = seq.dump_with(|v, f| write!(f, "#{v}")).to_string();
        assert_eq!(text, "[#4, #5, #6]");
    }

    #[test]
    fn dump_empty() {
        let seq: Sequence<i64> = Sequence::new();
        assert_eq!(seq.dump_with(|v, f| write!(f, "{v}")).to_string(), "[]");
    }

    #[test]
    fn dump_prints_addresses() {
        let a = 1u8;
        let b = 2u8;
        let seq: Sequence<&u8> = [&a, &b].into_iter().collect();
        let expected = format!("[<{:p}>, <{:p}>]", &a, &b);
        assert_eq!(seq.dump().to_string(), expected);
    }
}
