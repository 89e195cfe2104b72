use crate::common::*;

use crate::errors::keyword_api_error::*;

use crate::model::keyword_dto::{keyword_trend::*, search_request::*};

#[async_trait]
pub trait KeywordService {
    async fn get_keyword_trend(
        &self,
        search_request: &SearchRequest,
    ) -> Result<KeywordTrendResponse, KeywordApiError>;
}
