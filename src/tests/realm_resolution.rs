#[cfg(test)]
mod test {
    use crate::keycloak::client::resolve_realm;

    #[test]
    fn explicit_realm_wins() {
        assert_eq!(resolve_realm("tenant-x", "acme"), "tenant-x");
    }

    #[test]
    fn configured_default_applies_when_explicit_is_empty() {
        assert_eq!(resolve_realm("", "acme"), "acme");
    }

    #[test]
    fn fallback_realm_applies_when_nothing_is_configured() {
        assert_eq!(resolve_realm("", ""), "master");
    }
}
