use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::UserPayload;

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("users")]
pub async fn list(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.user_service.list().await?))
}

#[get("users/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.user_service.get(id.into_inner()).await?))
}

#[post("users")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = sp.user_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[put("users/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = sp.user_service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("users/{id}")]
pub async fn remove(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    sp.user_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
