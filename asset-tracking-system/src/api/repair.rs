use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::{RepairFilter, RepairPayload};

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("repairs")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<RepairFilter>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.repair_service.list(filter.into_inner()).await?))
}

#[get("repairs/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.repair_service.get(id.into_inner()).await?))
}

#[post("repairs")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<RepairPayload>,
) -> ApiResult<HttpResponse> {
    let repair = sp.repair_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(repair))
}

#[put("repairs/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<RepairPayload>,
) -> ApiResult<HttpResponse> {
    let repair = sp.repair_service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(repair))
}

#[delete("repairs/{id}")]
pub async fn remove(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    sp.repair_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
