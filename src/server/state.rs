use std::sync::Arc;

use crate::config::Settings;
use crate::delivery::{DeliveryClient, DeliveryError, InfobipClient};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub delivery: Arc<dyn DeliveryClient>,
}

impl AppState {
    /// State backed by the Infobip HTTP client
    pub fn new(settings: Settings) -> Result<Self, DeliveryError> {
        let delivery = Arc::new(InfobipClient::new(settings.delivery.clone())?);
        Ok(Self::with_delivery(settings, delivery))
    }

    pub fn with_delivery(settings: Settings, delivery: Arc<dyn DeliveryClient>) -> Self {
        Self {
            settings: Arc::new(settings),
            delivery,
        }
    }
}
