//! Data access layer

pub mod bungalows;
pub mod clients;
pub mod documents;
pub mod reservations;
pub mod settings;
pub mod staff;
pub mod vehicles;

use sqlx::{Pool, Postgres};

pub use bungalows::BungalowsRepository;
pub use clients::ClientsRepository;
pub use documents::DocumentsRepository;
pub use reservations::ReservationsRepository;
pub use settings::SettingsRepository;
pub use staff::StaffRepository;
pub use vehicles::VehiclesRepository;

/// Container for all repositories
#[derive(Clone)]
pub struct Repository {
    pub clients: ClientsRepository,
    pub vehicles: VehiclesRepository,
    pub bungalows: BungalowsRepository,
    pub reservations: ReservationsRepository,
    pub documents: DocumentsRepository,
    pub settings: SettingsRepository,
    pub staff: StaffRepository,
}

impl Repository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            clients: ClientsRepository::new(pool.clone()),
            vehicles: VehiclesRepository::new(pool.clone()),
            bungalows: BungalowsRepository::new(pool.clone()),
            reservations: ReservationsRepository::new(pool.clone()),
            documents: DocumentsRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool.clone()),
            staff: StaffRepository::new(pool),
        }
    }
}
