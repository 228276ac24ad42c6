//! Deterministic sample-data generation. Everything here is pure: the plan
//! is derived entirely from the RNG and the reference instant handed in, so
//! a fixed seed always produces the same plan.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use models_clinic::{Gender, OrderItem, Species};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Felipe", "Gabriela", "Heitor", "Isabela",
    "Juliana", "Larissa", "Marcos", "Otavio", "Paula", "Rafael", "Sofia", "Thiago",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barbosa", "Cardoso", "Dias", "Ferreira", "Gomes", "Lima", "Martins", "Nunes",
    "Oliveira", "Pereira", "Ribeiro", "Santos", "Silva", "Souza",
];

const PET_NAMES: &[&str] = &[
    "Bela", "Bidu", "Bob", "Luna", "Mel", "Nina", "Pipoca", "Rex", "Simba", "Thor", "Toby",
];

const DOG_BREEDS: &[&str] = &[
    "Labrador",
    "Golden Retriever",
    "Bulldog",
    "Poodle",
    "Beagle",
    "Shih Tzu",
    "Rottweiler",
    "Yorkshire",
    "German Shepherd",
    "Not defined",
];

const CAT_BREEDS: &[&str] = &[
    "Siamese",
    "Persian",
    "Maine Coon",
    "Ragdoll",
    "Bengal",
    "Sphynx",
    "British Shorthair",
    "Scottish Fold",
    "Not defined",
];

const ITEM_NAMES: &[&str] = &[
    "Racao",
    "Vacina",
    "Consulta",
    "Antipulgas",
    "Medicamento",
    "Brinquedo",
    "Coleira",
];

const STREETS: &[&str] = &[
    "Rua das Flores",
    "Avenida Paulista",
    "Rua XV de Novembro",
    "Travessa do Comercio",
    "Rua da Praia",
    "Avenida Brasil",
];

const CITIES: &[&str] = &[
    "Sao Paulo - SP",
    "Curitiba - PR",
    "Belo Horizonte - MG",
    "Porto Alegre - RS",
    "Recife - PE",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "hotmail.com", "yahoo.com.br"];

const REASONS: &[&str] = &[
    "Consulta de rotina",
    "Vacinacao anual",
    "Vomito e falta de apetite",
    "Limpeza de tartaro",
    "Avaliacao de pele",
    "Revisao pos-cirurgica",
];

const APPOINTMENT_NOTES: &[&str] = &[
    "Paciente tranquilo durante o atendimento.",
    "Retornar em duas semanas para reavaliacao.",
    "Sem alteracoes significativas no exame fisico.",
    "Prescrita medicacao para uso continuo.",
];

const ORDER_NOTES: &[&str] = &[
    "Compra realizada na recepcao.",
    "Entrega agendada para a proxima semana.",
    "Cliente pediu nota fiscal.",
    "Pagamento em duas parcelas.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SeedPlan {
    pub owners: Vec<OwnerSeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerSeed {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub pets: Vec<PetSeed>,
    pub orders: Vec<OrderSeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetSeed {
    pub name: String,
    pub gender: Gender,
    pub species: Species,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub appointments: Vec<AppointmentSeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentSeed {
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub notes: String,
    pub doctor: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSeed {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub notes: String,
}

fn pick(rng: &mut impl Rng, values: &[&str]) -> String {
    values[rng.random_range(0..values.len())].to_string()
}

/// Rounds half-up to a fixed scale of two decimal places.
fn money(value: f64) -> Decimal {
    let mut value = Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value
}

pub fn random_cpf(rng: &mut impl Rng) -> String {
    (0..11).map(|_| char::from(b'0' + rng.random_range(0..10))).collect()
}

/// DDD + 9 + eight digits, eleven digits total.
pub fn random_phone(rng: &mut impl Rng) -> String {
    let mut phone = String::with_capacity(11);
    phone.push(char::from(b'1' + rng.random_range(0..9)));
    phone.push(char::from(b'0' + rng.random_range(0..10)));
    phone.push('9');
    for _ in 0..8 {
        phone.push(char::from(b'0' + rng.random_range(0..10)));
    }
    phone
}

pub fn random_email(rng: &mut impl Rng) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    let number = rng.random_range(1..1000);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{first}.{last}{number}@{domain}")
}

fn random_species_and_breed(rng: &mut impl Rng) -> (Species, String) {
    if rng.random_bool(0.6) {
        (Species::Dog, pick(rng, DOG_BREEDS))
    } else {
        (Species::Cat, pick(rng, CAT_BREEDS))
    }
}

fn random_appointment(rng: &mut impl Rng, now: DateTime<Utc>) -> AppointmentSeed {
    AppointmentSeed {
        appointment_date: now - Duration::seconds(rng.random_range(0..365 * 24 * 3600)),
        reason: pick(rng, REASONS),
        notes: pick(rng, APPOINTMENT_NOTES),
        doctor: format!("Dr. {} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        price: money(rng.random_range(50.0..500.0)),
    }
}

fn random_order(rng: &mut impl Rng) -> OrderSeed {
    let item_count = rng.random_range(1..=4);
    let mut items = Vec::with_capacity(item_count);
    let mut total = Decimal::ZERO;

    for _ in 0..item_count {
        let quantity = rng.random_range(1..=3);
        let unit_price = money(rng.random_range(10.0..200.0));
        let line_total = unit_price * Decimal::from(quantity);
        total += line_total;

        items.push(OrderItem {
            name: pick(rng, ITEM_NAMES),
            quantity,
            unit_price,
            line_total,
        });
    }

    OrderSeed {
        items,
        total: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        notes: pick(rng, ORDER_NOTES),
    }
}

/// Builds the whole sample dataset: 5 owners, 1-2 pets each (a shuffled
/// {1,1,1,2,2} multiset), 1-2 appointments per pet, and 0-2 orders per
/// owner (a shuffled {0,0,1,1,2} multiset). Uniqueness of cpf and email is
/// guaranteed within the plan by regeneration loops.
pub fn generate_plan(rng: &mut impl Rng, now: DateTime<Utc>) -> SeedPlan {
    let mut pet_counts = [1usize, 1, 1, 2, 2];
    pet_counts.shuffle(rng);
    let mut order_counts = [0usize, 0, 1, 1, 2];
    order_counts.shuffle(rng);

    let mut used_cpfs = std::collections::HashSet::new();
    let mut used_emails = std::collections::HashSet::new();
    let mut owners = Vec::with_capacity(5);

    for index in 0..5 {
        let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));

        let mut cpf = random_cpf(rng);
        while !used_cpfs.insert(cpf.clone()) {
            cpf = random_cpf(rng);
        }

        let mut email = random_email(rng);
        while !used_emails.insert(email.clone()) {
            email = random_email(rng);
        }

        let address = format!(
            "{}, {} - {}",
            pick(rng, STREETS),
            rng.random_range(1..2000),
            pick(rng, CITIES)
        );

        let mut pets = Vec::with_capacity(pet_counts[index]);
        for _ in 0..pet_counts[index] {
            let (species, breed) = random_species_and_breed(rng);
            let appointment_count = rng.random_range(1..=2);

            pets.push(PetSeed {
                name: pick(rng, PET_NAMES),
                gender: if rng.random_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                },
                species,
                breed,
                birth_date: (now - Duration::days(rng.random_range(0..15 * 365))).date_naive(),
                appointments: (0..appointment_count)
                    .map(|_| random_appointment(rng, now))
                    .collect(),
            });
        }

        let orders = (0..order_counts[index]).map(|_| random_order(rng)).collect();

        owners.push(OwnerSeed {
            name,
            cpf,
            phone: random_phone(rng),
            email,
            address,
            pets,
            orders,
        });
    }

    SeedPlan { owners }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use models_clinic::validate;
    use rand::{SeedableRng, rngs::StdRng};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_produces_identical_plans() {
        let plan_a = generate_plan(&mut StdRng::seed_from_u64(123), fixed_now());
        let plan_b = generate_plan(&mut StdRng::seed_from_u64(123), fixed_now());
        assert_eq!(plan_a, plan_b);

        let plan_c = generate_plan(&mut StdRng::seed_from_u64(124), fixed_now());
        assert_ne!(plan_a, plan_c);
    }

    #[test]
    fn test_pet_and_order_counts_are_the_fixed_multisets() {
        let plan = generate_plan(&mut StdRng::seed_from_u64(123), fixed_now());

        let mut pet_counts: Vec<usize> = plan.owners.iter().map(|o| o.pets.len()).collect();
        pet_counts.sort_unstable();
        assert_eq!(pet_counts, [1, 1, 1, 2, 2]);

        let mut order_counts: Vec<usize> = plan.owners.iter().map(|o| o.orders.len()).collect();
        order_counts.sort_unstable();
        assert_eq!(order_counts, [0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_owner_fields_pass_validation() {
        let plan = generate_plan(&mut StdRng::seed_from_u64(7), fixed_now());

        let mut cpfs = std::collections::HashSet::new();
        let mut emails = std::collections::HashSet::new();
        for owner in &plan.owners {
            assert!(validate::is_valid_cpf(&owner.cpf), "{}", owner.cpf);
            assert!(validate::is_valid_phone(&owner.phone), "{}", owner.phone);
            assert!(validate::is_valid_email(&owner.email), "{}", owner.email);
            assert!(cpfs.insert(owner.cpf.clone()));
            assert!(emails.insert(owner.email.clone()));
        }
    }

    #[test]
    fn test_appointment_prices_are_in_range_with_two_decimals() {
        let plan = generate_plan(&mut StdRng::seed_from_u64(42), fixed_now());

        for owner in &plan.owners {
            for pet in &owner.pets {
                let count = pet.appointments.len();
                assert!((1..=2).contains(&count));
                for appointment in &pet.appointments {
                    assert!(appointment.price >= Decimal::from(50));
                    assert!(appointment.price <= Decimal::from(500));
                    assert_eq!(appointment.price.scale(), 2);
                }
            }
        }
    }

    #[test]
    fn test_order_totals_are_the_rounded_sum_of_line_totals() {
        let plan = generate_plan(&mut StdRng::seed_from_u64(99), fixed_now());

        let mut seen_orders = 0;
        for owner in &plan.owners {
            for order in &owner.orders {
                seen_orders += 1;
                assert!((1..=4).contains(&order.items.len()));

                let mut sum = Decimal::ZERO;
                for item in &order.items {
                    assert!((1..=3).contains(&item.quantity));
                    assert!(item.unit_price >= Decimal::from(10));
                    assert!(item.unit_price <= Decimal::from(200));
                    assert_eq!(item.line_total, item.unit_price * Decimal::from(item.quantity));
                    sum += item.line_total;
                }
                assert_eq!(
                    order.total,
                    sum.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                );
            }
        }
        assert_eq!(seen_orders, 4, "order multiset sums to 4 orders");
    }

    #[test]
    fn test_money_has_fixed_scale() {
        assert_eq!(money(123.456).to_string(), "123.46");
        assert_eq!(money(50.0).to_string(), "50.00");
    }

    #[test]
    fn test_half_up_rounding_strategy() {
        use std::str::FromStr;

        let midpoint = Decimal::from_str("100.005").unwrap();
        assert_eq!(
            midpoint
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_string(),
            "100.01"
        );
    }
}
