use serde::{Deserialize, Serialize};

/// A season's budget, expense and income record.
///
/// `transfer_expense`, `transfer_income`, `total_expense` and `total_income`
/// are derived from the roster by `FinanceService::recompute`. They stay
/// writable, but every recompute overwrites them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceLedger {
    #[serde(rename = "presupuestoInicial", deserialize_with = "crate::models::null_as_default")]
    pub initial_budget: String,

    /// Sum of player purchase fees (derived)
    #[serde(rename = "gastosFichajes", deserialize_with = "crate::models::null_as_default")]
    pub transfer_expense: String,

    /// Sum of player sale fees (derived)
    #[serde(rename = "profitsFichajes", deserialize_with = "crate::models::null_as_default")]
    pub transfer_income: String,

    #[serde(rename = "gastosEntrenadores", deserialize_with = "crate::models::null_as_default")]
    pub coaching_expense: String,

    #[serde(rename = "gastosOjeadores", deserialize_with = "crate::models::null_as_default")]
    pub scouting_expense: String,

    #[serde(rename = "gastosInfraestructura", deserialize_with = "crate::models::null_as_default")]
    pub infrastructure_expense: String,

    #[serde(rename = "gastosOtros", deserialize_with = "crate::models::null_as_default")]
    pub other_expense: String,

    #[serde(rename = "ingresosOtros", deserialize_with = "crate::models::null_as_default")]
    pub other_income: String,

    /// Derived
    #[serde(rename = "gastoTotal", deserialize_with = "crate::models::null_as_default")]
    pub total_expense: String,

    /// Derived
    #[serde(rename = "ingresoTotal", deserialize_with = "crate::models::null_as_default")]
    pub total_income: String,

    #[serde(rename = "presupuestoFinal", deserialize_with = "crate::models::null_as_default")]
    pub final_budget: String,
}

/// Ledger entries the user types in by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinanceField {
    InitialBudget,
    CoachingExpense,
    ScoutingExpense,
    InfrastructureExpense,
    OtherExpense,
    OtherIncome,
    FinalBudget,
}

impl FinanceLedger {
    pub fn field_mut(&mut self, field: FinanceField) -> &mut String {
        match field {
            FinanceField::InitialBudget => &mut self.initial_budget,
            FinanceField::CoachingExpense => &mut self.coaching_expense,
            FinanceField::ScoutingExpense => &mut self.scouting_expense,
            FinanceField::InfrastructureExpense => &mut self.infrastructure_expense,
            FinanceField::OtherExpense => &mut self.other_expense,
            FinanceField::OtherIncome => &mut self.other_income,
            FinanceField::FinalBudget => &mut self.final_budget,
        }
    }

    pub fn field(&self, field: FinanceField) -> &str {
        match field {
            FinanceField::InitialBudget => &self.initial_budget,
            FinanceField::CoachingExpense => &self.coaching_expense,
            FinanceField::ScoutingExpense => &self.scouting_expense,
            FinanceField::InfrastructureExpense => &self.infrastructure_expense,
            FinanceField::OtherExpense => &self.other_expense,
            FinanceField::OtherIncome => &self.other_income,
            FinanceField::FinalBudget => &self.final_budget,
        }
    }
}
