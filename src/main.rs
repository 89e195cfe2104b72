/*
Create date : 2024-11-12
Description : 키워드 검색어에 대한 날짜별/매체별 기사 수 집계를 Elasticsearch 에서 조회해 대시보드에 제공하는 API 서버

History     : 2024-11-12       # [v.1.0.0] first create
              2024-11-20       # [v.1.1.0] key_as_string 을 날짜(YYYY-MM-DD) 형식으로 변환
              2024-12-03       # [v.1.2.0]
                                 1) Elasticsearch client 를 전역변수에서 의존성 주입 방식으로 변경
                                 2) 요청/응답 본문을 타입이 있는 구조체로 변경
*/
mod common;
use common::*;

mod controller;
use controller::keyword_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::keyword_service::*;

mod model;
use model::configs::config::*;

mod repository;
use repository::es_repository::*;

mod env_configuration;
use env_configuration::env_config::*;

mod errors;

mod traits;

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    let _logger = set_global_logger().unwrap_or_else(|e| panic!("[main()] {:?}", e));

    info!("Start Keyword Trend API");

    let config: Config = Config::load(&SYSTEM_CONFIG_PATH).unwrap_or_else(|e| {
        error!("[main()] {:?}", e);
        panic!("[main()] {:?}", e)
    });

    let es_repository: EsRepositoryImpl = EsRepositoryImpl::from_config(config.elastic())
        .unwrap_or_else(|e| {
            error!(
                "[main()] Unable to create the 'Elasticsearch' client: {:?}",
                e
            );
            panic!(
                "[main()] Unable to create the 'Elasticsearch' client: {:?}",
                e
            )
        });

    info!(
        "[main()] Elasticsearch hosts: {:?}, index: {}",
        es_repository.hosts(),
        config.elastic().index_name()
    );

    /* Handler Dependency Injection(DI) */
    let keyword_service: Arc<KeywordServiceImpl<EsRepositoryImpl>> = Arc::new(
        KeywordServiceImpl::new(
            Arc::new(es_repository),
            config.elastic().index_name().to_string(),
        ),
    );

    let controller: KeywordController<KeywordServiceImpl<EsRepositoryImpl>> =
        KeywordController::new(keyword_service);

    if let Err(e) = controller.run(config.server().bind_addr()).await {
        error!("[main] controller error: {:?}", e);
    }
}
