pub mod csv_export;
pub mod xlsx_export;

/// Column order of the matched-pairs table.
pub const MATCH_HEADERS: [&str; 10] = [
    "SF AccountID",
    "Legacy Customer ID",
    "Enterprise ID",
    "Account Name",
    "Full Address",
    "Billing City",
    "Billing State",
    "Postal Code",
    "Country",
    "Score",
];

/// Column order of the new-accounts dataload.
pub const DATALOAD_HEADERS: [&str; 17] = [
    "_Legacy Customer ID",
    "Name",
    "RecordTypeId",
    "Customer_Status__c",
    "Customer_Status_Assigned__c",
    "CurrencyIsoCode",
    "Payment_Terms__c",
    "Customer_Group__c",
    "Customer_Category__c",
    "WDIntegrate__c",
    "PublishToWorkday__c",
    "BillingStreet",
    "BillingCity",
    "BillingState",
    "BillingPostalCode",
    "BillingCountry",
    "Tax ID",
];

pub(crate) fn score_text(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}
