/// Compute effective row limit with precedence: global flag -> page default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: usize) -> usize {
    global
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(fallback)
}

/// Keep at most `limit` items.
#[must_use]
pub fn take_limited<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, take_limited};

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(10), 50), 10);
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn take_limited_truncates() {
        assert_eq!(take_limited(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(take_limited(vec![1], 5), vec![1]);
    }
}
