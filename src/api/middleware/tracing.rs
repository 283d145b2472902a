//! Request tracing for the rental API.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every request in an `INFO` span and logs its status and latency.
///
/// Service events such as `Rental created` or `Rental transaction failed` are
/// emitted inside the request span, so a booking and its outcome share the
/// same `method`/`uri` fields:
///
/// ```text
/// INFO request{method=POST uri=/api/rent/create version=HTTP/1.1}: Rental created rental_id=7 user_id=1 movies=2 days=8 total=171.174
/// INFO request{method=POST uri=/api/rent/create version=HTTP/1.1}: finished processing request latency=6 ms status=200
/// INFO request{method=GET uri=/api/movies/31 version=HTTP/1.1}: finished processing request latency=1 ms status=404
/// ```
///
/// 5xx responses are classified as failures and additionally logged at
/// `ERROR` by tower-http.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
