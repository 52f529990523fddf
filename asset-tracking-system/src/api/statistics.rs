use actix_web::{get, web, HttpResponse};

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("stats")]
pub async fn dashboard(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.statistics_service.dashboard().await?))
}
