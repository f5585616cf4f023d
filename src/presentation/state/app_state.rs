use std::sync::Arc;

use crate::application::ports::AiClient;
use crate::application::services::AnalysisService;

pub struct AppState<C>
where
    C: AiClient,
{
    pub analysis_service: Arc<AnalysisService<C>>,
}

impl<C> Clone for AppState<C>
where
    C: AiClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
