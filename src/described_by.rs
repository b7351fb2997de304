/// Build an `aria-describedby` value.
///
/// Present ids are joined with one space in the order explicit, hint, error.
/// Returns `None` when nothing is present so the attribute can be left off
/// entirely rather than emitted empty.
pub fn build(explicit: Option<&str>, hint_id: Option<&str>, error_id: Option<&str>) -> Option<String> {
    join([explicit, hint_id, error_id])
}

/// Join the present, non-blank ids in order.
pub fn join<'a>(ids: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let ids: Vec<&str> = ids
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_absent_is_none() {
        assert_eq!(build(None, None, None), None);
        assert_eq!(build(Some(""), None, Some(" ")), None);
    }

    #[test]
    fn keeps_fixed_order() {
        assert_eq!(
            build(Some("some-id"), Some("ouroboros-hint"), Some("ouroboros-error")).as_deref(),
            Some("some-id ouroboros-hint ouroboros-error")
        );
    }

    #[test]
    fn explicit_and_error_without_hint() {
        assert_eq!(
            build(Some("some-id"), None, Some("ouroboros-error")).as_deref(),
            Some("some-id ouroboros-error")
        );
    }

    #[test]
    fn single_entries() {
        assert_eq!(build(None, Some("a-hint"), None).as_deref(), Some("a-hint"));
        assert_eq!(build(None, None, Some("a-error")).as_deref(), Some("a-error"));
        assert_eq!(build(Some("x y"), None, None).as_deref(), Some("x y"));
    }

    #[test]
    fn join_skips_blank_entries() {
        assert_eq!(join([Some("a"), None, Some(" "), Some("b")]).as_deref(), Some("a b"));
        assert_eq!(join(std::iter::empty::<Option<&str>>()), None);
    }
}
