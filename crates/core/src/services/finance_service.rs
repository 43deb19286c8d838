use crate::models::finance::FinanceLedger;
use crate::models::player::Player;
use crate::models::season::Season;

use super::money::{format_magnitude, parse_magnitude};

/// Derives a season's transfer and total figures from its roster and the
/// manually entered ledger lines.
///
/// Pure business logic, no I/O. The derived fields are always overwritten,
/// even when the user edited them by hand.
pub struct FinanceService;

impl FinanceService {
    /// Recompute the ledger for `season`.
    ///
    /// Returns a copy of the season's ledger with `transfer_expense`,
    /// `transfer_income`, `total_expense` and `total_income` replaced.
    /// Idempotent for an unchanged roster and unchanged manual lines.
    pub fn recompute(season: &Season) -> FinanceLedger {
        let mut ledger = season.finance.clone();

        let transfer_expense = Self::sum_fees(&season.players, |p| p.purchase_value.as_deref());
        let transfer_income = Self::sum_fees(&season.players, |p| p.sale_value.as_deref());

        let total_expense = transfer_expense
            + parse_magnitude(&ledger.coaching_expense)
            + parse_magnitude(&ledger.scouting_expense)
            + parse_magnitude(&ledger.infrastructure_expense)
            + parse_magnitude(&ledger.other_expense);
        let total_income = transfer_income + parse_magnitude(&ledger.other_income);

        ledger.transfer_expense = format_magnitude(transfer_expense);
        ledger.transfer_income = format_magnitude(transfer_income);
        ledger.total_expense = format_magnitude(total_expense);
        ledger.total_income = format_magnitude(total_income);
        ledger
    }

    /// Net balance of the season: total income minus total expense, using the
    /// numbers the ledger currently displays.
    pub fn net_balance(ledger: &FinanceLedger) -> f64 {
        parse_magnitude(&ledger.total_income) - parse_magnitude(&ledger.total_expense)
    }

    fn sum_fees<'a, F>(players: &'a [Player], fee: F) -> f64
    where
        F: Fn(&'a Player) -> Option<&'a str>,
    {
        players
            .iter()
            .filter_map(fee)
            .filter(|v| !v.is_empty())
            .map(parse_magnitude)
            .sum()
    }
}
