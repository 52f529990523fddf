use actix_web::{get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::DepartmentPayload;

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("departments")]
pub async fn list(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.department_service.list().await?))
}

#[get("departments/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.department_service.get(id.into_inner()).await?))
}

#[post("departments")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<DepartmentPayload>,
) -> ApiResult<HttpResponse> {
    let department = sp.department_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(department))
}

#[put("departments/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<DepartmentPayload>,
) -> ApiResult<HttpResponse> {
    let department = sp
        .department_service
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(department))
}
