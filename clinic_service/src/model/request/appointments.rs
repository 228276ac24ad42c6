use chrono::{DateTime, Utc};
use clinic_db_client::appointments::create::NewAppointment;
use models_clinic::{ValidationErrors, validate};
use rust_decimal::Decimal;
use utoipa::ToSchema;
use uuid::Uuid;

use super::pets::invalid_pk;

pub const DATETIME_FORMAT_MESSAGE: &str =
    "Datetime has wrong format. Use one of these formats instead: YYYY-MM-DDThh:mm:ss[Z|+HH:MM].";

#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct CreateAppointmentRequest {
    /// Id of the [Pet](models_clinic::Pet) being seen
    pub pet: Option<String>,
    pub appointment_date: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub doctor: Option<String>,
    /// Defaults to 0 when omitted; at most two decimal places
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
}

impl CreateAppointmentRequest {
    pub fn validate(self) -> Result<NewAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let reason = validate::required_string(&mut errors, "reason", self.reason);

        let pet_id = match validate::required_string(&mut errors, "pet", self.pet) {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("pet", invalid_pk(&raw));
                    None
                }
            },
            None => None,
        };

        let appointment_date =
            match validate::required_string(&mut errors, "appointment_date", self.appointment_date)
            {
                Some(raw) => match DateTime::parse_from_rfc3339(&raw) {
                    Ok(when) => Some(when.with_timezone(&Utc)),
                    Err(_) => {
                        errors.add("appointment_date", DATETIME_FORMAT_MESSAGE);
                        None
                    }
                },
                None => None,
            };

        let price = validate::checked_money(
            &mut errors,
            "price",
            self.price.unwrap_or(Decimal::ZERO),
        );

        match (pet_id, appointment_date, reason, price) {
            (Some(pet_id), Some(appointment_date), Some(reason), Some(price))
                if errors.is_empty() =>
            {
                Ok(NewAppointment {
                    pet_id,
                    appointment_date,
                    reason,
                    notes: self.notes,
                    doctor: self.doctor,
                    price,
                })
            }
            _ => Err(errors),
        }
    }
}
