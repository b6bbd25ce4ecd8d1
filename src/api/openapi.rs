//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bungalows, clients, documents, health, reservations, settings, stats, vehicles};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Raiatea Rental API",
        version = "1.0.0",
        description = "Vehicle and bungalow rental management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Bungalows
        bungalows::list_bungalows,
        bungalows::get_bungalow,
        bungalows::create_bungalow,
        bungalows::update_bungalow,
        bungalows::delete_bungalow,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::update_reservation_status,
        reservations::delete_reservation,
        // Documents
        documents::list_documents,
        documents::get_document,
        documents::compose_document,
        documents::update_document_status,
        documents::render_document_html,
        documents::send_document,
        documents::record_payment,
        documents::list_payments,
        // Stats
        stats::get_stats,
        // Settings
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            // Auth
            crate::models::staff::Staff,
            crate::models::staff::LoginRequest,
            crate::models::staff::LoginResponse,
            // Clients
            crate::models::client::Client,
            crate::models::client::ClientQuery,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            // Vehicles
            crate::models::vehicle::Vehicle,
            crate::models::vehicle::VehicleQuery,
            crate::models::vehicle::CreateVehicle,
            crate::models::vehicle::UpdateVehicle,
            // Bungalows
            crate::models::bungalow::Bungalow,
            crate::models::bungalow::BungalowFeatures,
            crate::models::bungalow::BungalowQuery,
            crate::models::bungalow::CreateBungalow,
            crate::models::bungalow::UpdateBungalow,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationQuery,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservation,
            crate::models::reservation::UpdateReservationStatus,
            // Documents
            crate::models::document::Document,
            crate::models::document::DocumentQuery,
            crate::models::document::ComposeDocument,
            crate::models::document::UpdateDocumentStatus,
            crate::models::document::SendDocument,
            crate::models::document::CompanyDetails,
            crate::models::document::ClientDetails,
            crate::models::document::DocumentLine,
            crate::models::payment::Payment,
            crate::models::payment::CreatePayment,
            // Settings
            crate::models::settings::CompanySettings,
            crate::models::settings::UpdateCompanySettings,
            // Enums
            crate::models::enums::ReservationStatus,
            crate::models::enums::VehicleStatus,
            crate::models::enums::BungalowStatus,
            crate::models::enums::CommissionType,
            crate::models::enums::DocumentType,
            crate::models::enums::DocumentStatus,
            crate::models::enums::PaymentMethod,
            crate::models::enums::StaffRole,
            // Stats
            crate::services::stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "clients", description = "Client management"),
        (name = "vehicles", description = "Vehicle fleet management"),
        (name = "bungalows", description = "Bungalow management"),
        (name = "reservations", description = "Reservation management"),
        (name = "documents", description = "Quotes and invoices"),
        (name = "stats", description = "Dashboard statistics"),
        (name = "settings", description = "Company settings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
