use crate::domain::GlobalDefaults;

/// Port for the user-level defaults document.
///
/// Loading never fails: an absent or unusable document is an empty overlay.
pub trait OverridesSource {
    fn load(&self) -> GlobalDefaults;
}
