use crate::domain::errors::{DomainError, ScopeHint};
use crate::domain::slug::SlugScope;

/// Adds scope information to lookup misses of scoped record types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeDiagnostics {
    scoped: bool,
}

impl ScopeDiagnostics {
    pub fn new(scoped: bool) -> Self {
        Self { scoped }
    }

    pub fn annotate(&self, err: DomainError, scope: Option<&SlugScope>) -> DomainError {
        match err {
            DomainError::NotFound(not_found) if self.scoped => {
                let hint = match scope {
                    Some(scope) => ScopeHint::Supplied(scope.to_string()),
                    None => ScopeHint::Missing,
                };
                DomainError::NotFound(not_found.with_scope_hint(hint))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RecordNotFound;

    fn miss() -> DomainError {
        RecordNotFound::single("Address", "home").into()
    }

    #[test]
    fn unscoped_types_pass_errors_through() {
        let err = ScopeDiagnostics::new(false).annotate(miss(), None);
        assert_eq!(err.to_string(), "Couldn't find Address with ID=home");
    }

    #[test]
    fn scoped_types_mention_the_scope() {
        let diagnostics = ScopeDiagnostics::new(true);
        let scope = SlugScope::new("de").unwrap();
        assert!(
            diagnostics
                .annotate(miss(), Some(&scope))
                .to_string()
                .ends_with("and scope=de")
        );
        assert!(
            diagnostics
                .annotate(miss(), None)
                .to_string()
                .ends_with("expected scope but got none")
        );
    }

    #[test]
    fn other_errors_are_untouched() {
        let err = ScopeDiagnostics::new(true)
            .annotate(DomainError::Persistence("disk".into()), None);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
