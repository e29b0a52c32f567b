//! Domain models for billwatch

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A recurring financial obligation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub name: String,
    /// None = variable amount (contributes zero to cost projections)
    pub amount: Option<f64>,
    pub frequency: Frequency,
    /// Next calendar date this bill is due (no time component)
    pub next_due_date: NaiveDate,
    #[serde(default)]
    pub bill_type: BillType,
    /// Optional link to a user-defined category (opaque to this crate)
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Informational flag; has no effect on status computation
    #[serde(default)]
    pub auto_pay: bool,
    #[serde(default)]
    pub last_paid_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Consecutive on-time payments
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_payments: u32,
    #[serde(default)]
    pub on_time_payments: u32,
}

fn default_active() -> bool {
    true
}

/// Bill recurrence period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Number of billing periods in a year (annual cost multiplier)
    pub fn per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" => Ok(Self::Yearly),
            _ => Err(Error::InvalidFrequency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bill categories - classification only, nothing but display grouping
/// depends on these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillType {
    Utilities,
    Subscriptions,
    Insurance,
    Rent,
    Loans,
    Phone,
    Memberships,
    #[default]
    Other,
}

impl BillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utilities => "utilities",
            Self::Subscriptions => "subscriptions",
            Self::Insurance => "insurance",
            Self::Rent => "rent",
            Self::Loans => "loans",
            Self::Phone => "phone",
            Self::Memberships => "memberships",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::Subscriptions => "Subscriptions",
            Self::Insurance => "Insurance",
            Self::Rent => "Rent/Mortgage",
            Self::Loans => "Loans",
            Self::Phone => "Phone/Internet",
            Self::Memberships => "Memberships",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for BillType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utilities" => Ok(Self::Utilities),
            "subscriptions" | "subscription" => Ok(Self::Subscriptions),
            "insurance" => Ok(Self::Insurance),
            "rent" | "mortgage" => Ok(Self::Rent),
            "loans" | "loan" => Ok(Self::Loans),
            "phone" | "internet" => Ok(Self::Phone),
            "memberships" | "membership" => Ok(Self::Memberships),
            "other" => Ok(Self::Other),
            _ => Err(Error::InvalidBillType(s.to_string())),
        }
    }
}

impl std::fmt::Display for BillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Due-date bucket a bill falls into, relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    Overdue,
    DueToday,
    DueSoon,
    Upcoming,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due-today",
            Self::DueSoon => "due-soon",
            Self::Upcoming => "upcoming",
        }
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bill plus its computed due-status, produced on read and never stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillWithStatus {
    #[serde(flatten)]
    pub bill: Bill,
    pub status: DueStatus,
    /// Signed whole days until the due date; negative = overdue
    pub days_until_due: i64,
}

/// A single charge record fed to recurring-pattern detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// A recurring charge pattern found by the detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringCandidate {
    /// Normalized payee name the group was keyed on
    pub payee: String,
    /// Mean charge amount across the group
    pub amount: f64,
    pub frequency: Frequency,
    pub first_seen: NaiveDate,
    pub last_seen: NaiveDate,
    /// Number of charges backing the pattern
    pub occurrences: usize,
    /// Last seen date advanced by one period
    pub suggested_next_due: NaiveDate,
}
