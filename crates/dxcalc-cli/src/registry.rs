//! Presenter factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use dxcalc_core::DxError;
use dxcalc_orchestration::interfaces::{PresenterFactory, ResultPresenter};

use crate::chart::BarChartPresenter;
use crate::decision_aid::DecisionAidPresenter;
use crate::json::JsonPresenter;
use crate::output::DisplayOptions;
use crate::presenter::TablePresenter;

/// Default factory with lazy creation and cache.
pub struct DefaultPresenterFactory {
    opts: DisplayOptions,
    cache: RwLock<HashMap<String, Arc<dyn ResultPresenter>>>,
}

impl DefaultPresenterFactory {
    /// Create a factory whose terminal presenters share `opts`.
    #[must_use]
    pub fn new(opts: DisplayOptions) -> Self {
        Self {
            opts,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_presenter(&self, name: &str) -> Result<Arc<dyn ResultPresenter>, DxError> {
        match name {
            "table" => Ok(Arc::new(TablePresenter::new(self.opts))),
            "bars" | "chart" => Ok(Arc::new(BarChartPresenter::new(self.opts))),
            "aid" | "decision-aid" => Ok(Arc::new(DecisionAidPresenter::new(self.opts))),
            "json" => Ok(Arc::new(JsonPresenter)),
            _ => Err(DxError::Config(format!("unknown output format: {name}"))),
        }
    }
}

impl Default for DefaultPresenterFactory {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

impl PresenterFactory for DefaultPresenterFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn ResultPresenter>, DxError> {
        if let Some(presenter) = self.cache.read().get(name) {
            return Ok(Arc::clone(presenter));
        }

        let presenter = self.create_presenter(name)?;
        tracing::trace!(presenter = name, "created presenter");
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&presenter));
        Ok(presenter)
    }

    fn available(&self) -> Vec<&str> {
        vec!["table", "bars", "aid", "json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_each_presenter() {
        let factory = DefaultPresenterFactory::default();
        for name in factory.available() {
            let presenter = factory.get(name).unwrap();
            assert_eq!(presenter.name(), name);
        }
    }

    #[test]
    fn factory_accepts_aliases() {
        let factory = DefaultPresenterFactory::default();
        assert_eq!(factory.get("chart").unwrap().name(), "bars");
        assert_eq!(factory.get("decision-aid").unwrap().name(), "aid");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultPresenterFactory::default();
        let p1 = factory.get("table").unwrap();
        let p2 = factory.get("table").unwrap();
        assert!(Arc::ptr_eq(&p1, &p2));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultPresenterFactory::default();
        let err = factory.get("xml").err().unwrap();
        assert!(matches!(err, DxError::Config(_)));
    }
}
