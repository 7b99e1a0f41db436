use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyDoc {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: i32,
    pub property_type: String,
    pub status: Option<String>,
    pub realtor_id: Option<i32>,
    pub listed_date: Option<String>,
    pub description: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPatchDoc {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub price: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub realtor_id: Option<i32>,
    pub listed_date: Option<String>,
    pub description: Option<String>,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRealtorDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub agency: String,
    pub years_of_experience: i32,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtorPatchDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
    pub agency: Option<String>,
    pub years_of_experience: Option<i32>,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatchDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::properties::list,
        crate::routes::properties::get,
        crate::routes::properties::create,
        crate::routes::properties::update,
        crate::routes::properties::patch,
        crate::routes::properties::delete,
        crate::routes::realtors::list,
        crate::routes::realtors::get,
        crate::routes::realtors::properties,
        crate::routes::realtors::create,
        crate::routes::realtors::update,
        crate::routes::realtors::patch,
        crate::routes::realtors::delete,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::by_email,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::patch,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            NewPropertyDoc,
            PropertyPatchDoc,
            NewRealtorDoc,
            RealtorPatchDoc,
            NewUserDoc,
            UserPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "properties"),
        (name = "realtors"),
        (name = "users")
    )
)]
pub struct ApiDoc;
