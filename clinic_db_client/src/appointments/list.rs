use chrono::{DateTime, Utc};
use models_clinic::Appointment;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::listing::{contains_pattern, resolve_ordering};

const ORDERABLE: &[(&str, &str)] = &[
    ("appointment_date", "a.appointment_date"),
    ("created_at", "a.created_at"),
];

#[derive(Debug, Default)]
pub struct AppointmentListParams {
    pub pet_id: Option<Uuid>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Lists appointments, most recent appointment first by default. Exact
/// filters on pet and appointment_date; free-text search over the pet's
/// name, which is why the query always joins pets.
#[instrument(skip(db, params))]
pub async fn list_appointments(
    db: &PgPool,
    params: &AppointmentListParams,
) -> anyhow::Result<Vec<Appointment>> {
    let mut query = QueryBuilder::new(
        "SELECT a.id, a.pet_id, a.appointment_date, a.reason, a.notes, a.doctor, a.price, \
         a.created_at, a.updated_at \
         FROM appointments a JOIN pets p ON p.id = a.pet_id WHERE TRUE",
    );

    if let Some(pet_id) = params.pet_id {
        query.push(" AND a.pet_id = ");
        query.push_bind(pet_id);
    }
    if let Some(appointment_date) = params.appointment_date {
        query.push(" AND a.appointment_date = ");
        query.push_bind(appointment_date);
    }
    if let Some(search) = &params.search {
        query.push(" AND p.name ILIKE ");
        query.push_bind(contains_pattern(search));
    }

    query.push(" ORDER BY ");
    query.push(resolve_ordering(
        params.ordering.as_deref(),
        ORDERABLE,
        "a.appointment_date DESC",
    ));

    let appointments = query.build_query_as::<Appointment>().fetch_all(db).await?;
    Ok(appointments)
}
