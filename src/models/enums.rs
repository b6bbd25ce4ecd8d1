//! Shared domain enums (statuses, document and commission kinds)

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ReservationStatus
// ---------------------------------------------------------------------------

/// Reservation lifecycle. Transitions are free staff actions; nothing is
/// automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            _ => Err(format!("Invalid reservation status: {}", s)),
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(ReservationStatus::Pending)
    }
}

// ---------------------------------------------------------------------------
// VehicleStatus / BungalowStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Maintenance => "maintenance",
        }
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(VehicleStatus::Available),
            "rented" => Ok(VehicleStatus::Rented),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            _ => Err(format!("Invalid vehicle status: {}", s)),
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(VehicleStatus::Available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BungalowStatus {
    Available,
    Occupied,
    Maintenance,
}

impl BungalowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BungalowStatus::Available => "available",
            BungalowStatus::Occupied => "occupied",
            BungalowStatus::Maintenance => "maintenance",
        }
    }
}

impl std::str::FromStr for BungalowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(BungalowStatus::Available),
            "occupied" => Ok(BungalowStatus::Occupied),
            "maintenance" => Ok(BungalowStatus::Maintenance),
            _ => Err(format!("Invalid bungalow status: {}", s)),
        }
    }
}

impl From<String> for BungalowStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(BungalowStatus::Available)
    }
}

// ---------------------------------------------------------------------------
// CommissionType
// ---------------------------------------------------------------------------

/// Direction of a booking-channel commission. The amount is tracked for
/// back-office reconciliation, never billed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    ToRefund,
    ToReceive,
    None,
}

impl CommissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionType::ToRefund => "to_refund",
            CommissionType::ToReceive => "to_receive",
            CommissionType::None => "none",
        }
    }
}

impl std::str::FromStr for CommissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to_refund" => Ok(CommissionType::ToRefund),
            "to_receive" => Ok(CommissionType::ToReceive),
            "none" => Ok(CommissionType::None),
            _ => Err(format!("Invalid commission type: {}", s)),
        }
    }
}

impl From<String> for CommissionType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(CommissionType::None)
    }
}

// ---------------------------------------------------------------------------
// DocumentType
// ---------------------------------------------------------------------------

/// Kind of billing document; immutable once the document is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Quote,
    Invoice,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Quote => "quote",
            DocumentType::Invoice => "invoice",
        }
    }

    /// Number prefix: D for quotes (devis), F for invoices (factures)
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentType::Quote => "D",
            DocumentType::Invoice => "F",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quote" => Ok(DocumentType::Quote),
            "invoice" => Ok(DocumentType::Invoice),
            _ => Err(format!("Invalid document type: {}", s)),
        }
    }
}

// SQLx conversion for DocumentType (stored as text)
impl sqlx::Type<Postgres> for DocumentType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for DocumentType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for DocumentType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// DocumentStatus
// ---------------------------------------------------------------------------

/// Document lifecycle, independent of reservation status.
/// draft -> sent -> paid; cancellation allowed from any non-paid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Sent,
    Paid,
    Cancelled,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Sent => "sent",
            DocumentStatus::Paid => "paid",
            DocumentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a staff-triggered transition to `next` is allowed.
    /// Transitions are one-way: paid and cancelled are terminal.
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        use DocumentStatus::*;
        matches!(
            (self, next),
            (Draft, Sent) | (Draft, Cancelled) | (Sent, Paid) | (Sent, Cancelled)
        )
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(DocumentStatus::Draft),
            "sent" => Ok(DocumentStatus::Sent),
            "paid" => Ok(DocumentStatus::Paid),
            "cancelled" => Ok(DocumentStatus::Cancelled),
            _ => Err(format!("Invalid document status: {}", s)),
        }
    }
}

impl From<String> for DocumentStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(DocumentStatus::Draft)
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    Check,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Check => "check",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "check" => Ok(PaymentMethod::Check),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(PaymentMethod::Cash)
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Staff account role; admin unlocks settings mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Staff,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Staff => "staff",
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(StaffRole::Admin),
            "staff" => Ok(StaffRole::Staff),
            _ => Err(format!("Invalid staff role: {}", s)),
        }
    }
}

impl From<String> for StaffRole {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(StaffRole::Staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_status_transitions() {
        use DocumentStatus::*;

        assert!(Draft.can_transition_to(Sent));
        assert!(Draft.can_transition_to(Cancelled));
        assert!(Sent.can_transition_to(Paid));
        assert!(Sent.can_transition_to(Cancelled));

        // One-way: no reversals, paid is terminal
        assert!(!Sent.can_transition_to(Draft));
        assert!(!Paid.can_transition_to(Cancelled));
        assert!(!Paid.can_transition_to(Sent));
        assert!(!Cancelled.can_transition_to(Draft));
        assert!(!Draft.can_transition_to(Paid));
    }

    #[test]
    fn document_type_prefixes() {
        assert_eq!(DocumentType::Quote.prefix(), "D");
        assert_eq!(DocumentType::Invoice.prefix(), "F");
    }
}
