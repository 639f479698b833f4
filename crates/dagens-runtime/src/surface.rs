use dagens_engine::PanelContent;

/// Display region the panel writes into.
///
/// Every call replaces whatever the surface showed before.
pub trait Surface: Send + Sync {
    fn replace(&self, content: &PanelContent);
}
