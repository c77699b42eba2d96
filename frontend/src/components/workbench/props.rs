use common::config::AppConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WorkbenchProps {
    /// Read once on creation; later prop changes do not reconfigure a running session.
    #[prop_or_default]
    pub config: AppConfig,
}
