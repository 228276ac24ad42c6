use utoipa::OpenApi;

use crate::api::{appointments, health, orders, owners, pets};
use crate::model::request::{
    appointments::CreateAppointmentRequest,
    orders::{CreateOrderRequest, OrderItemRequest},
    owners::CreateOwnerRequest,
    pets::CreatePetRequest,
};
use crate::model::response::ErrorResponse;
use models_clinic::{Appointment, Gender, Order, OrderItem, Owner, Pet, Species, ValidationErrors};

#[derive(OpenApi)]
#[openapi(
        paths(
                /// /health
                health::health_handler,

                /// /owners
                owners::get_owners::handler,
                owners::get_owner::handler,
                owners::create_owner::handler,

                /// /pets
                pets::get_pets::handler,
                pets::get_pet::handler,
                pets::create_pet::handler,

                /// /appointments
                appointments::get_appointments::handler,
                appointments::get_appointment::handler,
                appointments::create_appointment::handler,

                /// /orders
                orders::get_orders::handler,
                orders::get_order::handler,
                orders::create_order::handler,
        ),
        components(
            schemas(
                        ErrorResponse,
                        ValidationErrors,
                        Owner,
                        Pet,
                        Gender,
                        Species,
                        Appointment,
                        Order,
                        OrderItem,
                        CreateOwnerRequest,
                        CreatePetRequest,
                        CreateAppointmentRequest,
                        CreateOrderRequest,
                        OrderItemRequest,
                ),
        ),
        tags(
            (name = "clinic service", description = "Veterinary clinic management API")
        )
    )]
pub struct ApiDoc;
