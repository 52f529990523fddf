use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::{SoftwareFilter, SoftwarePayload};

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("software")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<SoftwareFilter>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.software_service.list(filter.into_inner()).await?))
}

#[get("software/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.software_service.get(id.into_inner()).await?))
}

#[post("software")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<SoftwarePayload>,
) -> ApiResult<HttpResponse> {
    let software = sp.software_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(software))
}

#[put("software/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<SoftwarePayload>,
) -> ApiResult<HttpResponse> {
    let software = sp.software_service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(software))
}

#[delete("software/{id}")]
pub async fn remove(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    sp.software_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
