//! Report repository: summary aggregates over invoices.
//!
//! Aggregation happens in memory over `Decimal` rows rather than SQL
//! group-bys; volumes in this domain are small and the arithmetic stays
//! in one place.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{invoices, parties, sea_orm_active_enums::InvoiceDirection};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for tally_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Income/expense/profit for one calendar month.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Sale invoice totals.
    pub income: Decimal,
    /// Purchase invoice totals.
    pub expense: Decimal,
    /// Income minus expense.
    pub profit: Decimal,
}

/// Headline totals for the reporting window and the one before it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportOverview {
    /// Sale totals in the window.
    pub total_income: Decimal,
    /// Purchase totals in the window.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub net_profit: Decimal,
    /// Sale totals in the preceding window of equal length.
    pub previous_period_income: Decimal,
    /// Purchase totals in the preceding window.
    pub previous_period_expense: Decimal,
}

/// Sale totals attributed to one party.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SalesByParty {
    /// Party display name.
    pub party_name: String,
    /// Sum of sale invoice totals.
    pub total: Decimal,
}

/// The full summary report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SummaryReport {
    /// Month-by-month series over the window.
    pub monthly: Vec<MonthlySummary>,
    /// Headline totals.
    pub overview: ReportOverview,
    /// Sale distribution across parties, largest first.
    pub sales_by_party: Vec<SalesByParty>,
}

/// Report repository (read-only).
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

/// Length of the reporting window in months.
const WINDOW_MONTHS: u32 = 6;

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the six-month summary report ending at `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn build_summary(&self, reference: NaiveDate) -> Result<SummaryReport, ReportError> {
        let window_start = reference
            .checked_sub_months(Months::new(WINDOW_MONTHS))
            .unwrap_or(reference);
        let previous_start = window_start
            .checked_sub_months(Months::new(WINDOW_MONTHS))
            .unwrap_or(window_start);

        // One query covers both windows; the split happens in memory.
        let rows = invoices::Entity::find()
            .filter(invoices::Column::Date.gte(previous_start))
            .filter(invoices::Column::Date.lte(reference))
            .all(&self.db)
            .await?;

        let mut monthly_buckets: HashMap<(i32, u32), (Decimal, Decimal)> = HashMap::new();
        let mut overview = ReportOverview {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            previous_period_income: Decimal::ZERO,
            previous_period_expense: Decimal::ZERO,
        };
        let mut sales: HashMap<Uuid, Decimal> = HashMap::new();

        for row in &rows {
            let in_window = row.date >= window_start;
            match row.direction {
                InvoiceDirection::Sale => {
                    if in_window {
                        overview.total_income += row.total;
                        *sales.entry(row.party_id).or_default() += row.total;
                        let bucket = monthly_buckets
                            .entry((row.date.year(), row.date.month()))
                            .or_default();
                        bucket.0 += row.total;
                    } else {
                        overview.previous_period_income += row.total;
                    }
                }
                InvoiceDirection::Purchase => {
                    if in_window {
                        overview.total_expense += row.total;
                        let bucket = monthly_buckets
                            .entry((row.date.year(), row.date.month()))
                            .or_default();
                        bucket.1 += row.total;
                    } else {
                        overview.previous_period_expense += row.total;
                    }
                }
            }
        }
        overview.net_profit = overview.total_income - overview.total_expense;

        // Emit every month in the window, including empty ones.
        let mut monthly = Vec::new();
        let mut cursor = window_start;
        while cursor <= reference {
            let key = (cursor.year(), cursor.month());
            let (income, expense) = monthly_buckets.get(&key).copied().unwrap_or_default();
            monthly.push(MonthlySummary {
                year: key.0,
                month: key.1,
                income,
                expense,
                profit: income - expense,
            });
            let Some(next) = cursor.checked_add_months(Months::new(1)) else {
                break;
            };
            cursor = next;
        }

        let sales_by_party = self.resolve_party_names(sales).await?;

        Ok(SummaryReport {
            monthly,
            overview,
            sales_by_party,
        })
    }

    async fn resolve_party_names(
        &self,
        sales: HashMap<Uuid, Decimal>,
    ) -> Result<Vec<SalesByParty>, ReportError> {
        let ids: Vec<Uuid> = sales.keys().copied().collect();
        let names: HashMap<Uuid, String> = parties::Entity::find()
            .filter(parties::Column::Id.is_in(ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let mut result: Vec<SalesByParty> = sales
            .into_iter()
            .map(|(id, total)| SalesByParty {
                party_name: names
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                total,
            })
            .collect();
        result.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(result)
    }
}
