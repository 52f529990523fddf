use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_helpdesk::model::vo::{TicketFilter, TicketPayload};

use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("tickets")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<TicketFilter>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.ticket_service.list(filter.into_inner()).await?))
}

#[get("tickets/{id}")]
pub async fn get_one(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(sp.ticket_service.get(id.into_inner()).await?))
}

#[post("tickets")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    payload: web::Json<TicketPayload>,
) -> ApiResult<HttpResponse> {
    let ticket = sp.ticket_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ticket))
}

#[put("tickets/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    payload: web::Json<TicketPayload>,
) -> ApiResult<HttpResponse> {
    let ticket = sp.ticket_service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ticket))
}

#[delete("tickets/{id}")]
pub async fn remove(sp: web::Data<ServiceProvider>, id: web::Path<i32>) -> ApiResult<HttpResponse> {
    sp.ticket_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
