/// `document.readyState` while the markup is still being parsed.
const LOADING: &str = "loading";

/// Whether attaching must wait for `DOMContentLoaded`.
///
/// Only `"loading"` defers; `"interactive"` and `"complete"` already have the full tree.
#[must_use]
pub fn awaits_markup(ready_state: &str) -> bool {
    ready_state == LOADING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_defers_attach() {
        assert!(awaits_markup("loading"));
        assert!(!awaits_markup("interactive"));
        assert!(!awaits_markup("complete"));
    }
}
