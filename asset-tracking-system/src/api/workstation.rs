use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::{WorkstationFilter, WorkstationPayload};

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("workstations")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<WorkstationFilter>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.workstation_service.list(filter.into_inner()).await?))
}

#[get("workstations/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.workstation_service.get(id.into_inner()).await?))
}

#[get("workstations/{id}/software")]
pub async fn list_software(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.workstation_service.list_software(id.into_inner()).await?))
}

#[get("workstationstatuses")]
pub async fn status_counts(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.workstation_service.status_counts().await?))
}

#[post("workstations")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<WorkstationPayload>,
) -> ApiResult<HttpResponse> {
    let workstation = sp.workstation_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(workstation))
}

#[put("workstations/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<WorkstationPayload>,
) -> ApiResult<HttpResponse> {
    let workstation = sp
        .workstation_service
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(workstation))
}

#[delete("workstations/{id}")]
pub async fn remove(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    sp.workstation_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
