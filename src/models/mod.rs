//! Data models for the rental server

pub mod bungalow;
pub mod client;
pub mod document;
pub mod enums;
pub mod payment;
pub mod reservation;
pub mod settings;
pub mod staff;
pub mod vehicle;

// Re-export commonly used types
pub use bungalow::Bungalow;
pub use client::Client;
pub use document::Document;
pub use enums::{
    BungalowStatus, CommissionType, DocumentStatus, DocumentType, PaymentMethod,
    ReservationStatus, StaffRole, VehicleStatus,
};
pub use payment::Payment;
pub use reservation::Reservation;
pub use settings::CompanySettings;
pub use staff::Staff;
pub use vehicle::Vehicle;
