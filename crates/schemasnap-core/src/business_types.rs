//! Schema.org business types offered for the `@type` of a generated document.

/// Type used when the input does not name one.
pub const DEFAULT_BUSINESS_TYPE: &str = "LocalBusiness";

pub const SUPPORTED_BUSINESS_TYPES: &[&str] = &[
    "LocalBusiness",
    "Restaurant",
    "Store",
    "AutoDealer",
    "AutoRepair",
    "BeautySalon",
    "DentistOffice",
    "DryCleaningBusiness",
    "FinancialService",
    "FoodEstablishment",
    "GasStation",
    "HealthAndBeautyBusiness",
    "HomeAndConstructionBusiness",
    "LegalService",
    "Library",
    "LodgingBusiness",
    "MedicalBusiness",
    "ProfessionalService",
    "RealEstateAgent",
    "TravelAgency",
    "VeterinaryCare",
];

/// Returns `true` if `name` is one of [`SUPPORTED_BUSINESS_TYPES`].
///
/// Matching is exact: Schema.org type names are case-sensitive.
#[must_use]
pub fn is_supported_business_type(name: &str) -> bool {
    SUPPORTED_BUSINESS_TYPES.contains(&name)
}
