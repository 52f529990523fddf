use actix_web::{post, web, HttpResponse};

use super::{
    dtos::{LoginDto, LoginResponse},
    ApiResult,
};
use crate::infrastructure::ServiceProvider;

#[post("login")]
pub async fn login(sp: web::Data<ServiceProvider>, dto: web::Json<LoginDto>) -> ApiResult<HttpResponse> {
    let dto = dto.into_inner();
    let user = sp.auth_service.authenticate(&dto.username, &dto.password).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { user }))
}
