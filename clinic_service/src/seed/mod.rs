//! Applies a generated [plan::SeedPlan] to the database and reports what
//! was created.

use clinic_db_client::appointments::create::{NewAppointment, create_appointment};
use clinic_db_client::appointments::delete::delete_all_appointments;
use clinic_db_client::orders::create::{NewOrder, create_order};
use clinic_db_client::orders::delete::delete_all_orders;
use clinic_db_client::owners::create::{CreateOwnerError, NewOwner, create_owner};
use clinic_db_client::owners::delete::delete_all_owners;
use clinic_db_client::owners::get::{cpf_exists, email_exists};
use clinic_db_client::pets::create::{NewPet, create_pet};
use clinic_db_client::pets::delete::delete_all_pets;
use rand::Rng;
use sqlx::PgPool;
use tracing::instrument;

pub mod plan;

#[derive(Debug)]
pub struct OwnerSummary {
    pub name: String,
    pub formatted_cpf: String,
    pub pets: usize,
    pub orders: usize,
}

#[derive(Debug)]
pub struct SeedSummary {
    pub owners: Vec<OwnerSummary>,
    pub pets_created: usize,
    pub appointments_created: usize,
    pub orders_created: usize,
}

impl SeedSummary {
    pub fn print(&self) {
        println!("Seeding completed. Summary:");
        println!("Owners created: {}", self.owners.len());
        println!("Pets created: {}", self.pets_created);
        println!("Appointments created: {}", self.appointments_created);
        println!("Orders created: {}", self.orders_created);
        println!();
        println!("Owners and their pets/orders:");
        for owner in &self.owners {
            println!(
                "- {} (cpf={}) -> pets={}, orders={}",
                owner.name, owner.formatted_cpf, owner.pets, owner.orders
            );
        }
        println!("Done.");
    }
}

/// Deletes every clinic record, dependents first.
#[instrument(skip(db))]
pub async fn flush(db: &PgPool) -> anyhow::Result<()> {
    delete_all_appointments(db).await?;
    delete_all_pets(db).await?;
    delete_all_orders(db).await?;
    delete_all_owners(db).await?;
    Ok(())
}

/// Inserts the plan through the db client. Records surviving a previous
/// non-flush run can collide on cpf/email; those fields are regenerated
/// from the RNG and retried until the insert goes through.
#[instrument(skip(db, rng, plan))]
pub async fn apply_plan(
    db: &PgPool,
    rng: &mut impl Rng,
    plan: plan::SeedPlan,
) -> anyhow::Result<SeedSummary> {
    let mut summary = SeedSummary {
        owners: Vec::with_capacity(plan.owners.len()),
        pets_created: 0,
        appointments_created: 0,
        orders_created: 0,
    };

    for mut owner_seed in plan.owners {
        let owner = loop {
            while cpf_exists(db, &owner_seed.cpf).await? {
                owner_seed.cpf = plan::random_cpf(rng);
            }
            while email_exists(db, &owner_seed.email).await? {
                owner_seed.email = plan::random_email(rng);
            }

            match create_owner(
                db,
                NewOwner {
                    name: owner_seed.name.clone(),
                    cpf: owner_seed.cpf.clone(),
                    phone: owner_seed.phone.clone(),
                    email: owner_seed.email.clone(),
                    address: owner_seed.address.clone(),
                },
            )
            .await
            {
                Ok(owner) => break owner,
                // lost a race with a concurrent writer; pick new values
                Err(CreateOwnerError::DuplicateCpf) => {
                    owner_seed.cpf = plan::random_cpf(rng);
                }
                Err(CreateOwnerError::DuplicateEmail) => {
                    owner_seed.email = plan::random_email(rng);
                }
                Err(CreateOwnerError::DatabaseError(err)) => return Err(err),
            }
        };

        for pet_seed in &owner_seed.pets {
            let pet = create_pet(
                db,
                NewPet {
                    name: pet_seed.name.clone(),
                    gender: pet_seed.gender,
                    species: pet_seed.species,
                    breed: pet_seed.breed.clone(),
                    birth_date: Some(pet_seed.birth_date),
                    owner_id: owner.id,
                },
            )
            .await?;
            summary.pets_created += 1;

            for appointment_seed in &pet_seed.appointments {
                create_appointment(
                    db,
                    NewAppointment {
                        pet_id: pet.id,
                        appointment_date: appointment_seed.appointment_date,
                        reason: appointment_seed.reason.clone(),
                        notes: Some(appointment_seed.notes.clone()),
                        doctor: Some(appointment_seed.doctor.clone()),
                        price: appointment_seed.price,
                    },
                )
                .await?;
                summary.appointments_created += 1;
            }
        }

        for order_seed in &owner_seed.orders {
            create_order(
                db,
                NewOrder {
                    owner_id: owner.id,
                    items: order_seed.items.clone(),
                    total: order_seed.total,
                    notes: Some(order_seed.notes.clone()),
                },
            )
            .await?;
            summary.orders_created += 1;
        }

        summary.owners.push(OwnerSummary {
            name: owner.name.clone(),
            formatted_cpf: owner.formatted_cpf(),
            pets: owner_seed.pets.len(),
            orders: owner_seed.orders.len(),
        });
    }

    Ok(summary)
}
