use serde::Serialize;

/// Where the rendered payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderSource {
    PrimaryCache,
    PrimaryFetch,
    FallbackCache,
    FallbackFetch,
}

impl RenderSource {
    pub fn is_cache_hit(self) -> bool {
        matches!(self, RenderSource::PrimaryCache | RenderSource::FallbackCache)
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, RenderSource::FallbackCache | RenderSource::FallbackFetch)
    }
}

/// Lifecycle of one panel initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    TryPrimaryCache,
    FetchPrimary,
    TryFallbackCache,
    FetchFallback,
    Rendered(RenderSource),
    Failed,
}

/// Outcome of the work done in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    CacheHit,
    CacheMiss,
    FetchSucceeded,
    FetchFailed,
}

impl PanelState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PanelState::Rendered(_) | PanelState::Failed)
    }

    /// Next state, or `self` when the event does not apply
    pub fn next(self, event: PanelEvent) -> PanelState {
        use PanelEvent::*;
        use PanelState::*;

        match (self, event) {
            (TryPrimaryCache, CacheHit) => Rendered(RenderSource::PrimaryCache),
            (TryPrimaryCache, CacheMiss) => FetchPrimary,
            (FetchPrimary, FetchSucceeded) => Rendered(RenderSource::PrimaryFetch),
            (FetchPrimary, FetchFailed) => TryFallbackCache,
            (TryFallbackCache, CacheHit) => Rendered(RenderSource::FallbackCache),
            (TryFallbackCache, CacheMiss) => FetchFallback,
            (FetchFallback, FetchSucceeded) => Rendered(RenderSource::FallbackFetch),
            (FetchFallback, FetchFailed) => Failed,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(events: &[PanelEvent]) -> PanelState {
        events
            .iter()
            .fold(PanelState::TryPrimaryCache, |state, event| state.next(*event))
    }

    #[test]
    fn test_paths_to_each_terminal() {
        use PanelEvent::*;

        assert_eq!(walk(&[CacheHit]), PanelState::Rendered(RenderSource::PrimaryCache));
        assert_eq!(
            walk(&[CacheMiss, FetchSucceeded]),
            PanelState::Rendered(RenderSource::PrimaryFetch)
        );
        assert_eq!(
            walk(&[CacheMiss, FetchFailed, CacheHit]),
            PanelState::Rendered(RenderSource::FallbackCache)
        );
        assert_eq!(
            walk(&[CacheMiss, FetchFailed, CacheMiss, FetchSucceeded]),
            PanelState::Rendered(RenderSource::FallbackFetch)
        );
        assert_eq!(
            walk(&[CacheMiss, FetchFailed, CacheMiss, FetchFailed]),
            PanelState::Failed
        );
    }

    #[test]
    fn test_terminal_states_absorb_events() {
        for terminal in [PanelState::Failed, PanelState::Rendered(RenderSource::PrimaryCache)] {
            assert!(terminal.is_terminal());
            assert_eq!(terminal.next(PanelEvent::CacheMiss), terminal);
            assert_eq!(terminal.next(PanelEvent::FetchFailed), terminal);
        }
    }

    #[test]
    fn test_mismatched_event_keeps_state() {
        assert_eq!(
            PanelState::FetchPrimary.next(PanelEvent::CacheHit),
            PanelState::FetchPrimary
        );
    }

    #[test]
    fn test_render_source_flags() {
        assert!(RenderSource::PrimaryCache.is_cache_hit());
        assert!(RenderSource::FallbackCache.is_cache_hit());
        assert!(!RenderSource::PrimaryFetch.is_cache_hit());
        assert!(!RenderSource::FallbackFetch.is_cache_hit());

        assert!(RenderSource::FallbackFetch.is_fallback());
        assert!(!RenderSource::PrimaryCache.is_fallback());
    }
}
