use std::sync::Arc;

pub type DynNavigator = Arc<dyn NavigatorTrait + Send + Sync>;

/// The router the stores and guards drive.
pub trait NavigatorTrait: std::fmt::Debug {
    fn push(&self, path: &str);
    fn replace(&self, path: &str);
    fn current(&self) -> String;
}
