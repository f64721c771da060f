use crate::{
    api::{attendance, registration},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = Arc::new(build_limiter(config.rate_api_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter) // rate limiting
            .service(
                web::scope("/attendance")
                    // /attendance/calendar
                    .service(
                        web::resource("/calendar")
                            .route(web::get().to(attendance::month_calendar)),
                    )
                    // /attendance/summary
                    .service(
                        web::resource("/summary").route(web::get().to(attendance::month_summary)),
                    )
                    // /attendance/insufficient
                    .service(
                        web::resource("/insufficient")
                            .route(web::get().to(attendance::insufficient_days)),
                    ),
            )
            .service(
                web::scope("/registrations")
                    // /registrations
                    .service(
                        web::resource("").route(web::get().to(registration::list_registrations)),
                    ),
            ),
    );
}
